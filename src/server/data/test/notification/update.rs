use super::*;

/// Tests hiding a notification and changing its title.
///
/// Expected: Ok(Some) with new title, hidden, message untouched
#[tokio::test]
async fn updates_title_and_visibility() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::notification::create_notification(db).await?;

    let updated = NotificationRepository::new(db)
        .update(UpdateNotificationParams {
            id: existing.id,
            title: Some("Pool closed".to_string()),
            visible: Some(false),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Pool closed");
    assert!(!updated.visible);
    assert_eq!(updated.message, existing.message);

    Ok(())
}

/// Tests updating a missing notification.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NotificationRepository::new(db)
        .update(UpdateNotificationParams {
            id: 77,
            visible: Some(false),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
