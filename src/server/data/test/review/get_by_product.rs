use super::*;

/// Tests filtering reviews by product.
///
/// Expected: only reviews of the requested product
#[tokio::test]
async fn returns_reviews_of_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let oil_fan = factory::user::create_user(db).await?;
    let tea_fan = factory::user::create_user(db).await?;
    let oil_review = factory::review::ReviewFactory::new(db, oil_fan.id)
        .product_id("massage-oil")
        .build()
        .await?;
    factory::review::ReviewFactory::new(db, tea_fan.id)
        .product_id("herbal-tea")
        .build()
        .await?;

    let reviews = ReviewRepository::new(db)
        .get_by_product("massage-oil")
        .await?;

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, oil_review.id);

    Ok(())
}
