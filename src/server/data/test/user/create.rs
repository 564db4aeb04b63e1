use super::*;

/// Tests creating an account.
///
/// Verifies that the account is stored with the given role and that the password
/// confirmation is not persisted anywhere.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(signup("grace@example.com"))
        .await?;

    assert_eq!(user.email, "grace@example.com");
    assert_eq!(user.gender, "female");
    assert_eq!(user.role, UserRole::User);
    assert!(user.agree_terms);

    Ok(())
}

/// Tests that the e-mail column is unique.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email_at_storage_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(signup("grace@example.com")).await?;

    assert!(repo.create(signup("grace@example.com")).await.is_err());

    Ok(())
}
