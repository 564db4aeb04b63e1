//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("guest@example.com")
///     .password("secret")
///     .role("admin")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    country: String,
    gender: String,
    email: String,
    password: String,
    role: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Guest"`, last_name: `"{id}"`
    /// - email: `"guest{id}@example.com"` where id is auto-incremented
    /// - password: `"password"`
    /// - role: `"user"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Guest".to_string(),
            last_name: id.to_string(),
            country: "Sri Lanka".to_string(),
            gender: "female".to_string(),
            email: format!("guest{}@example.com", id),
            password: "password".to_string(),
            role: "user".to_string(),
        }
    }

    /// Sets the first name of the user.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the e-mail address, stored lower-cased like the service does.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into().to_lowercase();
        self
    }

    /// Sets the stored password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the role (`"user"` or `"admin"`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            country: ActiveValue::Set(self.country),
            dob: ActiveValue::Set(None),
            gender: ActiveValue::Set(self.gender),
            phone: ActiveValue::Set("0771234567".to_string()),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            agree_terms: ActiveValue::Set(true),
            role: ActiveValue::Set(self.role),
            profile_picture: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
