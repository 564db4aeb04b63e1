use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::review::{CreateReviewParams, Review, UpdateReviewParams};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review and returns it with its author
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let review = entity::review::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            product_id: ActiveValue::Set(params.product_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            stars: ActiveValue::Set(params.stars),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(review.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Review with id {} not found after creation",
                review.id
            )))
    }

    /// Gets a review by ID with its author
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let result = entity::prelude::Review::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(review, user)| Review::from_with_author(review, user)))
    }

    /// Gets all reviews with authors, newest first
    pub async fn get_all(&self) -> Result<Vec<Review>, DbErr> {
        let results = entity::prelude::Review::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(review, user)| Review::from_with_author(review, user))
            .collect())
    }

    /// Gets reviews of a product with authors, newest first
    pub async fn get_by_product(&self, product_id: &str) -> Result<Vec<Review>, DbErr> {
        let results = entity::prelude::Review::find()
            .filter(entity::review::Column::ProductId.eq(product_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(review, user)| Review::from_with_author(review, user))
            .collect())
    }

    /// Gets the most recent five-star reviews with authors
    pub async fn get_latest_five_star(&self, limit: u64) -> Result<Vec<Review>, DbErr> {
        let results = entity::prelude::Review::find()
            .filter(entity::review::Column::Stars.eq(5))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::review::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(review, user)| Review::from_with_author(review, user))
            .collect())
    }

    /// Checks whether the user already wrote a review
    pub async fn exists_for_user(&self, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates the provided fields of a review
    ///
    /// Ownership is checked by the caller; `params.user_id` is not written.
    pub async fn update(&self, params: UpdateReviewParams) -> Result<Option<Review>, DbErr> {
        let Some(review) = entity::prelude::Review::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::review::ActiveModel = review.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(Some(name));
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(stars) = params.stars {
            active_model.stars = ActiveValue::Set(stars);
        }

        if active_model.is_changed() {
            active_model.update(self.db).await?;
        }

        self.get_by_id(params.id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
