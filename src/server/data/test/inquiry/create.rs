use super::*;

/// Tests storing an inquiry.
///
/// Expected: Ok with the given code and enum columns round-tripping
#[tokio::test]
async fn creates_inquiry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let inquiry = InquiryRepository::new(db)
        .create("INQ001".to_string(), params(Some(1)))
        .await?;

    assert_eq!(inquiry.inquiry_code, "INQ001");
    assert_eq!(inquiry.kind, InquiryKind::Product);
    assert_eq!(inquiry.priority, InquiryPriority::Medium);
    assert_eq!(inquiry.status, InquiryStatus::Pending);
    assert_eq!(inquiry.created_at, inquiry.updated_at);

    Ok(())
}

/// Tests that inquiry codes are unique.
///
/// Expected: Err on the second insert with the same code
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InquiryRepository::new(db);
    repo.create("INQ001".to_string(), params(None)).await?;

    assert!(repo.create("INQ001".to_string(), params(None)).await.is_err());

    Ok(())
}
