use super::*;

/// Tests listing a user's inquiries and fetching the latest one.
///
/// Expected: only that user's inquiries, newest first
#[tokio::test]
async fn lists_user_inquiries_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::inquiry::InquiryFactory::new(db)
        .user_id(Some(7))
        .build()
        .await?;
    let newer = factory::inquiry::InquiryFactory::new(db)
        .user_id(Some(7))
        .build()
        .await?;
    factory::inquiry::InquiryFactory::new(db)
        .user_id(Some(8))
        .build()
        .await?;

    let repo = InquiryRepository::new(db);

    let ids: Vec<i32> = repo.get_by_user(7).await?.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(repo.get_latest_by_user(7).await?.unwrap().id, newer.id);
    assert!(repo.get_latest_by_user(9).await?.is_none());
    assert_eq!(repo.count().await?, 3);

    Ok(())
}
