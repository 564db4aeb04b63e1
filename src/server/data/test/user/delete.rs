use super::*;

/// Tests deleting an account.
///
/// Expected: true, then the account can no longer be found
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(repo.get_by_id(user.id).await?.is_none());
    assert!(!repo.delete(user.id).await?);

    Ok(())
}
