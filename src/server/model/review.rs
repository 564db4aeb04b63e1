//! Review domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::review::{CreateReviewDto, ReviewAuthorDto, ReviewDto, UpdateReviewDto};

/// Public summary of the account that wrote a review.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewAuthor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub profile_picture: String,
}

impl ReviewAuthor {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            country: entity.country,
            profile_picture: entity.profile_picture,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub description: String,
    pub stars: i32,
    pub created_at: DateTime<Utc>,
    pub author: Option<ReviewAuthor>,
}

impl Review {
    /// Converts a review row joined with its (optional) author row.
    pub fn from_with_author(
        entity: entity::review::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            product_id: entity.product_id,
            name: entity.name,
            description: entity.description,
            stars: entity.stars,
            created_at: entity.created_at,
            author: author.map(ReviewAuthor::from_entity),
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            user_id: self.user_id,
            product_id: self.product_id,
            name: self.name,
            description: self.description,
            stars: self.stars,
            created_at: self.created_at,
            user: self.author.map(|a| ReviewAuthorDto {
                id: a.id,
                first_name: a.first_name,
                last_name: a.last_name,
                country: a.country,
                profile_picture: a.profile_picture,
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub user_id: i32,
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub description: String,
    pub stars: i32,
}

impl CreateReviewParams {
    /// Returns `None` when the request carries no author.
    pub fn from_dto(dto: CreateReviewDto) -> Option<Self> {
        Some(Self {
            user_id: dto.user_id?,
            product_id: dto.product_id.filter(|p| !p.trim().is_empty()),
            name: dto.name.filter(|n| !n.trim().is_empty()),
            description: dto.description.trim().to_string(),
            stars: dto.stars,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateReviewParams {
    pub id: i32,
    /// Caller claiming ownership of the review.
    pub user_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub stars: Option<i32>,
}

impl UpdateReviewParams {
    pub fn from_dto(id: i32, dto: UpdateReviewDto) -> Self {
        Self {
            id,
            user_id: dto.user_id,
            name: dto.name,
            description: dto
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            stars: dto.stars,
        }
    }
}
