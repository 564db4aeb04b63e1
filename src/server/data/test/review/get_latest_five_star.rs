use super::*;

/// Tests the five-star showcase query.
///
/// Verifies that lower ratings are skipped and the newest reviews come first,
/// limited to the requested count.
///
/// Expected: the two newest five-star reviews
#[tokio::test]
async fn returns_newest_five_star_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let mut five_star = Vec::new();
    for days_ago in [3, 2, 1] {
        let user = factory::user::create_user(db).await?;
        five_star.push(
            factory::review::ReviewFactory::new(db, user.id)
                .created_at(now - Duration::days(days_ago))
                .build()
                .await?,
        );
    }
    let critic = factory::user::create_user(db).await?;
    factory::review::ReviewFactory::new(db, critic.id)
        .stars(2)
        .created_at(now)
        .build()
        .await?;

    let reviews = ReviewRepository::new(db).get_latest_five_star(2).await?;

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].id, five_star[2].id);
    assert_eq!(reviews[1].id, five_star[1].id);
    assert!(reviews.iter().all(|r| r.author.is_some()));

    Ok(())
}
