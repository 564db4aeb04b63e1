use super::*;

/// Tests creating a targeted notification with metadata.
///
/// Expected: visible, unread, metadata preserved
#[tokio::test]
async fn creates_visible_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notification = NotificationRepository::new(db)
        .create(CreateNotificationParams {
            user_id: Some(5),
            kind: "booking".to_string(),
            title: "Booking confirmed".to_string(),
            message: "See you soon".to_string(),
            metadata: Some(serde_json::json!({ "booking_id": 9 })),
        })
        .await?;

    assert!(notification.visible);
    assert!(!notification.read);
    assert!(notification.read_by.is_empty());
    assert_eq!(notification.user_id, Some(5));
    assert_eq!(
        notification.metadata,
        Some(serde_json::json!({ "booking_id": 9 }))
    );

    Ok(())
}

/// Tests that factory-attached metadata is read back by id.
///
/// Expected: metadata preserved, broadcasts carry none
#[tokio::test]
async fn reads_back_factory_metadata() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tagged = factory::notification::NotificationFactory::new(db)
        .user_id(1)
        .metadata(serde_json::json!({ "inquiry_id": 4 }))
        .build()
        .await?;
    let plain = factory::notification::create_notification(db).await?;

    let repo = NotificationRepository::new(db);
    let tagged = repo.get_by_id(tagged.id).await?.unwrap();
    let plain = repo.get_by_id(plain.id).await?.unwrap();

    assert_eq!(tagged.metadata, Some(serde_json::json!({ "inquiry_id": 4 })));
    assert_eq!(plain.metadata, None);

    Ok(())
}
