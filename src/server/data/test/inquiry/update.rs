use super::*;

/// Tests an administrator style update.
///
/// Expected: Ok(Some) with new status and response, refreshed updated_at
#[tokio::test]
async fn updates_status_and_response() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::inquiry::create_inquiry(db).await?;

    let updated = InquiryRepository::new(db)
        .update(
            existing.id,
            InquiryChanges {
                status: Some(InquiryStatus::Responded),
                response: Some("Yes, it is.".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, InquiryStatus::Responded);
    assert_eq!(updated.response, "Yes, it is.");
    assert_eq!(updated.description, existing.description);
    assert!(updated.updated_at >= existing.updated_at);

    Ok(())
}

/// Tests deleting an inquiry.
///
/// Expected: true, then gone
#[tokio::test]
async fn deletes_inquiry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::inquiry::create_inquiry(db).await?;
    let repo = InquiryRepository::new(db);

    assert!(repo.delete(existing.id).await?);
    assert!(repo.get_by_id(existing.id).await?.is_none());

    Ok(())
}
