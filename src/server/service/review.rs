use sea_orm::DatabaseConnection;

use crate::server::{
    data::{review::ReviewRepository, user::UserRepository},
    error::AppError,
    model::review::{CreateReviewParams, Review, UpdateReviewParams},
};

/// Number of reviews shown in the "latest five-star" showcase.
const SHOWCASE_SIZE: u64 = 3;

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Review>, AppError> {
        let repo = ReviewRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_product(&self, product_id: &str) -> Result<Vec<Review>, AppError> {
        let repo = ReviewRepository::new(self.db);

        Ok(repo.get_by_product(product_id).await?)
    }

    pub async fn get_latest_five_star(&self) -> Result<Vec<Review>, AppError> {
        let repo = ReviewRepository::new(self.db);

        Ok(repo.get_latest_five_star(SHOWCASE_SIZE).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, AppError> {
        let repo = ReviewRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Creates the caller's review
    ///
    /// # Returns
    /// - `Ok(Review)`: The created review with author summary
    /// - `Err(AppError::NotFound)`: The author account does not exist
    /// - `Err(AppError::BadRequest)`: The author already wrote a review
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        let users = UserRepository::new(self.db);
        if users.get_by_id(params.user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let repo = ReviewRepository::new(self.db);
        if repo.exists_for_user(params.user_id).await? {
            tracing::debug!("User {} already reviewed", params.user_id);
            return Err(AppError::BadRequest(
                "You have already submitted a review".to_string(),
            ));
        }

        let review = repo.create(params).await?;
        tracing::info!("Created review {} by user {}", review.id, review.user_id);

        Ok(review)
    }

    /// Updates a review on behalf of its author
    ///
    /// # Returns
    /// - `Ok(Some(Review))`: The updated review
    /// - `Ok(None)`: No review with that id
    /// - `Err(AppError::Forbidden)`: Caller is not the author
    pub async fn update(&self, params: UpdateReviewParams) -> Result<Option<Review>, AppError> {
        let repo = ReviewRepository::new(self.db);

        let Some(existing) = repo.get_by_id(params.id).await? else {
            return Ok(None);
        };
        ensure_owner(&existing, params.user_id)?;

        let review = repo.update(params).await?;
        if let Some(review) = &review {
            tracing::info!("Updated review {}", review.id);
        }

        Ok(review)
    }

    /// Deletes a review on behalf of its author, returning whether it existed
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, AppError> {
        let repo = ReviewRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(false);
        };
        ensure_owner(&existing, user_id)?;

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted review {}", id);
        }

        Ok(deleted)
    }
}

fn ensure_owner(review: &Review, user_id: i32) -> Result<(), AppError> {
    if review.user_id != user_id {
        tracing::debug!(
            "User {} attempted to modify review {} owned by {}",
            user_id,
            review.id,
            review.user_id
        );
        return Err(AppError::Forbidden(
            "You can only modify your own review".to_string(),
        ));
    }
    Ok(())
}
