use super::*;

/// Tests recording a broadcast reader twice.
///
/// Expected: the reader appears once
#[tokio::test]
async fn records_reader_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let broadcast = factory::notification::create_notification(db).await?;
    let repo = NotificationRepository::new(db);

    repo.add_reader(broadcast.id, 4).await?;
    repo.add_reader(broadcast.id, 4).await?;
    repo.add_reader(broadcast.id, 6).await?;

    let notification = repo.get_by_id(broadcast.id).await?.unwrap();
    let mut readers = notification.read_by.clone();
    readers.sort();

    assert_eq!(readers, vec![4, 6]);
    assert!(!notification.read);

    Ok(())
}

/// Tests flipping the read flag of a targeted notification.
///
/// Expected: read is true afterwards
#[tokio::test]
async fn set_read_flips_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let targeted = factory::notification::NotificationFactory::new(db)
        .user_id(3)
        .build()
        .await?;
    let repo = NotificationRepository::new(db);

    repo.set_read(targeted.id).await?;

    assert!(repo.get_by_id(targeted.id).await?.unwrap().read);

    Ok(())
}
