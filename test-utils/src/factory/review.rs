//! Review factory for creating test review entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// The author must already exist: reviews reference `user.id`.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    product_id: Option<String>,
    description: String,
    stars: i32,
    created_at: DateTime<Utc>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - stars: `5`
    /// - product_id: `None`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            product_id: None,
            description: "Wonderful stay".to_string(),
            stars: 5,
            created_at: Utc::now(),
        }
    }

    /// Sets the reviewed product.
    pub fn product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    /// Sets the star rating.
    pub fn stars(mut self, stars: i32) -> Self {
        self.stars = stars;
        self
    }

    /// Sets the creation timestamp, used to control ordering in tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            product_id: ActiveValue::Set(self.product_id),
            name: ActiveValue::Set(None),
            description: ActiveValue::Set(self.description),
            stars: ActiveValue::Set(self.stars),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a five-star review for the given user.
pub async fn create_review(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, user_id).build().await
}
