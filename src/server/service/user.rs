use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{SignupParams, UpdateUserParams, User, UserChanges},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Registers a new account
    ///
    /// # Returns
    /// - `Ok(User)`: The created account
    /// - `Err(AppError::BadRequest)`: Passwords differ or the e-mail is already registered
    pub async fn signup(&self, params: SignupParams) -> Result<User, AppError> {
        if params.password != params.confirm_password {
            return Err(AppError::BadRequest("Passwords do not match".to_string()));
        }

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            tracing::debug!("Rejected signup for existing e-mail {}", params.email);
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }

        let user = repo.create(params).await?;
        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Checks credentials and returns the matching account
    ///
    /// # Returns
    /// - `Ok(User)`: Credentials match
    /// - `Err(AppError::NotFound)`: No account with that e-mail
    /// - `Err(AppError::Unauthorized)`: Wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.password != password {
            tracing::debug!("Rejected login for user {}", user.id);
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }

        Ok(user)
    }

    /// Applies a partial profile update
    ///
    /// A password change requires a matching confirmation and, unless the request is an
    /// administrator override, the current password.
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(existing) = repo.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let password = match params.new_password {
            Some(new_password) => {
                if params.confirm_password.as_deref() != Some(new_password.as_str()) {
                    return Err(AppError::BadRequest(
                        "New password and confirmation do not match".to_string(),
                    ));
                }
                if !params.admin_override {
                    match params.current_password.as_deref() {
                        None => {
                            return Err(AppError::BadRequest(
                                "Current password is required".to_string(),
                            ))
                        }
                        Some(current) if current != existing.password => {
                            return Err(AppError::Unauthorized(
                                "Current password is incorrect".to_string(),
                            ))
                        }
                        Some(_) => {}
                    }
                }
                Some(new_password)
            }
            None => None,
        };

        let email = match params.email {
            Some(email) if email != existing.email => {
                if repo.find_by_email(&email).await?.is_some() {
                    return Err(AppError::BadRequest("Email already exists".to_string()));
                }
                Some(email)
            }
            _ => None,
        };

        let user = repo
            .update(
                params.id,
                UserChanges {
                    first_name: params.first_name,
                    last_name: params.last_name,
                    country: params.country,
                    dob: params.dob,
                    gender: params.gender,
                    phone: params.phone,
                    email,
                    password,
                    role: params.role,
                    profile_picture: params.profile_picture,
                },
            )
            .await?;

        if let Some(user) = &user {
            tracing::info!("Updated user {}", user.id);
        }

        Ok(user)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted user {}", id);
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::UserRole;
    use test_utils::{builder::TestBuilder, factory};

    fn signup(email: &str) -> SignupParams {
        SignupParams {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            country: "UK".to_string(),
            dob: None,
            gender: "female".to_string(),
            phone: "0771234567".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            agree_terms: true,
            role: UserRole::User,
            profile_picture: String::new(),
        }
    }

    #[tokio::test]
    async fn signup_rejects_duplicate_email() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = UserService::new(db);

        let user = service.signup(signup("ada@example.com")).await?;
        let duplicate = service.signup(signup("ada@example.com")).await;

        assert_eq!(user.role, UserRole::User);
        assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn signup_rejects_mismatched_passwords() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let mut params = signup("ada@example.com");
        params.confirm_password = "different".to_string();

        let result = UserService::new(db).signup(params).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn login_distinguishes_unknown_email_and_wrong_password() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::user::UserFactory::new(db)
            .email("guest@example.com")
            .password("hunter22")
            .build()
            .await?;

        let service = UserService::new(db);

        assert!(service.login("GUEST@example.com", "hunter22").await.is_ok());
        assert!(matches!(
            service.login("guest@example.com", "wrong").await,
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            service.login("nobody@example.com", "hunter22").await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn password_change_requires_current_password() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::UserFactory::new(db)
            .password("hunter22")
            .build()
            .await?;

        let service = UserService::new(db);
        let change = |current: Option<&str>, admin_override: bool| UpdateUserParams {
            id: user.id,
            current_password: current.map(str::to_string),
            new_password: Some("newpass".to_string()),
            confirm_password: Some("newpass".to_string()),
            admin_override,
            ..Default::default()
        };

        assert!(matches!(
            service.update(change(Some("wrong"), false)).await,
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            service.update(change(None, false)).await,
            Err(AppError::BadRequest(_))
        ));

        let updated = service.update(change(None, true)).await?.unwrap();
        assert_eq!(updated.password, "newpass");

        Ok(())
    }

    #[tokio::test]
    async fn email_change_must_stay_unique() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let taken = factory::user::create_user(db).await?;
        let user = factory::user::create_user(db).await?;

        let result = UserService::new(db)
            .update(UpdateUserParams {
                id: user.id,
                email: Some(taken.email.clone()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }
}
