use super::*;

/// Tests a partial update.
///
/// Only the columns named in the changes are written.
///
/// Expected: Ok(Some) with the new values and the rest untouched
#[tokio::test]
async fn updates_only_given_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .first_name("Alan")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UserChanges {
                country: Some("UK".to_string()),
                role: Some(UserRole::Admin),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Alan");
    assert_eq!(updated.country, "UK");
    assert_eq!(updated.role, UserRole::Admin);
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests that empty changes leave the account as it is.
///
/// Expected: Ok(Some) equal to the stored account
#[tokio::test]
async fn empty_changes_return_stored_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let unchanged = UserRepository::new(db)
        .update(user.id, UserChanges::default())
        .await?
        .unwrap();

    assert_eq!(unchanged.first_name, user.first_name);
    assert_eq!(unchanged.password, user.password);

    Ok(())
}

/// Tests updating an account that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(
            42,
            UserChanges {
                country: Some("UK".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
