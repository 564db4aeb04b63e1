use super::*;

/// Tests the customer feed query.
///
/// The feed holds visible notifications addressed to the user plus visible
/// broadcasts, newest first. Other users' notifications and hidden ones are left out.
///
/// Expected: own and broadcast notifications, newest first
#[tokio::test]
async fn lists_own_and_broadcast_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let broadcast = factory::notification::NotificationFactory::new(db)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let own = factory::notification::NotificationFactory::new(db)
        .user_id(1)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db)
        .user_id(2)
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db)
        .visible(false)
        .build()
        .await?;

    let feed = NotificationRepository::new(db).list_for_user(1, 100).await?;

    let ids: Vec<i32> = feed.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![own.id, broadcast.id]);

    Ok(())
}

/// Tests that the feed respects the limit.
///
/// Expected: at most `limit` entries
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::notification::create_notification(db).await?;
    }

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.list_for_user(1, 3).await?.len(), 3);
    assert_eq!(repo.list_all(10).await?.len(), 5);

    Ok(())
}
