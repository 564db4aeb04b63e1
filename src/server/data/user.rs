//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. E-mail
//! lookups expect the caller to have lower-cased the address already.

use crate::server::model::user::{SignupParams, User, UserChanges};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on e-mail
    pub async fn create(&self, params: SignupParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            country: ActiveValue::Set(params.country),
            dob: ActiveValue::Set(params.dob),
            gender: ActiveValue::Set(params.gender),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password),
            agree_terms: ActiveValue::Set(params.agree_terms),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            profile_picture: ActiveValue::Set(params.profile_picture),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Gets all users, newest first.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by lower-cased e-mail address.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User with that address
    /// - `Ok(None)` - No account uses the address
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Applies the provided column changes.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };
        if changes == UserChanges::default() {
            return Ok(Some(User::from_entity(user)));
        }

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(first_name) = changes.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(country) = changes.country {
            active_model.country = ActiveValue::Set(country);
        }
        if let Some(dob) = changes.dob {
            active_model.dob = ActiveValue::Set(Some(dob));
        }
        if let Some(gender) = changes.gender {
            active_model.gender = ActiveValue::Set(gender);
        }
        if let Some(phone) = changes.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(email) = changes.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(password) = changes.password {
            active_model.password = ActiveValue::Set(password);
        }
        if let Some(role) = changes.role {
            active_model.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(profile_picture) = changes.profile_picture {
            active_model.profile_picture = ActiveValue::Set(profile_picture);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Deletes a user, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
