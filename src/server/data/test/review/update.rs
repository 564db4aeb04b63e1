use super::*;

/// Tests a partial review update.
///
/// Expected: Ok(Some) with new stars and the old description
#[tokio::test]
async fn updates_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, review) = factory::helpers::create_review_with_user(db).await?;

    let updated = ReviewRepository::new(db)
        .update(UpdateReviewParams {
            id: review.id,
            user_id: user.id,
            stars: Some(3),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.stars, 3);
    assert_eq!(updated.description, review.description);

    Ok(())
}

/// Tests deleting a review.
///
/// Expected: true, then the review is gone
#[tokio::test]
async fn deletes_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, review) = factory::helpers::create_review_with_user(db).await?;
    let repo = ReviewRepository::new(db);

    assert!(repo.delete(review.id).await?);
    assert!(repo.get_by_id(review.id).await?.is_none());

    Ok(())
}
