use super::*;

/// Tests deleting a broadcast that has readers.
///
/// Expected: true, and the notification is gone
#[tokio::test]
async fn deletes_notification_with_readers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let broadcast = factory::notification::create_notification(db).await?;
    let repo = NotificationRepository::new(db);
    repo.add_reader(broadcast.id, 1).await?;

    assert!(repo.delete(broadcast.id).await?);
    assert!(repo.get_by_id(broadcast.id).await?.is_none());
    assert!(!repo.delete(broadcast.id).await?);

    Ok(())
}
