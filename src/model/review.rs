use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Validate, Clone, Debug, ToSchema)]
pub struct CreateReviewDto {
    /// Author; required, a missing id is rejected as unauthenticated.
    pub user_id: Option<i32>,
    pub product_id: Option<String>,
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(range(min = 1, max = 5, message = "Stars must be between 1 and 5"))]
    pub stars: i32,
}

#[derive(Serialize, Deserialize, Validate, Clone, Debug, Default, ToSchema)]
pub struct UpdateReviewDto {
    /// Must match the review's owner.
    pub user_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Stars must be between 1 and 5"))]
    pub stars: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReviewAuthorDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub profile_picture: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub user_id: i32,
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub description: String,
    pub stars: i32,
    pub created_at: DateTime<Utc>,
    /// Present when the author account still exists.
    pub user: Option<ReviewAuthorDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct DeleteReviewParams {
    pub user_id: i32,
}
