use super::*;

/// Tests creating a review.
///
/// Verifies that the stored review is returned together with its author summary.
///
/// Expected: Ok with review and author
#[tokio::test]
async fn creates_review_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .first_name("Mary")
        .build()
        .await?;

    let review = ReviewRepository::new(db)
        .create(CreateReviewParams {
            user_id: user.id,
            product_id: None,
            name: Some("Mary".to_string()),
            description: "Lovely massage".to_string(),
            stars: 4,
        })
        .await?;

    assert_eq!(review.stars, 4);
    let author = review.author.unwrap();
    assert_eq!(author.id, user.id);
    assert_eq!(author.first_name, "Mary");

    Ok(())
}

/// Tests the one-review-per-user check.
///
/// Expected: false before and true after the user reviews
#[tokio::test]
async fn tracks_whether_user_has_reviewed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = ReviewRepository::new(db);

    assert!(!repo.exists_for_user(user.id).await?);
    factory::review::create_review(db, user.id).await?;
    assert!(repo.exists_for_user(user.id).await?);

    Ok(())
}
