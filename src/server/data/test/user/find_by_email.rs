use super::*;

/// Tests looking an account up by e-mail.
///
/// Expected: Some for a stored address, None otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .email("linus@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("linus@example.com").await?.unwrap();
    assert_eq!(found.id, stored.id);
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
