use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        review::{CreateReviewDto, DeleteReviewParams, ReviewDto, UpdateReviewDto},
    },
    server::{
        error::AppError,
        model::review::{CreateReviewParams, Review, UpdateReviewParams},
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

fn into_dtos(reviews: Vec<Review>) -> Vec<ReviewDto> {
    reviews.into_iter().map(|r| r.into_dto()).collect()
}

/// List all reviews with author summaries.
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let reviews = service.get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(reviews))))
}

/// Create a review.
///
/// Each user may write a single review.
///
/// # Returns
/// - `201 Created` - The created review
/// - `400 Bad Request` - Invalid fields or the user already reviewed
/// - `401 Unauthorized` - No `user_id` supplied
/// - `404 Not Found` - Unknown user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Successfully created review", body = ReviewDto),
        (status = 400, description = "Invalid review or duplicate", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateReviewParams::from_dto(payload.clone())
        .ok_or_else(|| AppError::Unauthorized("Login required".to_string()))?;
    payload.validate()?;

    let service = ReviewService::new(&state.db);

    let review = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

/// List reviews of a product.
#[utoipa::path(
    get,
    path = "/api/reviews/product/{product_id}",
    tag = REVIEW_TAG,
    params(
        ("product_id" = String, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Reviews of the product, newest first", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let reviews = service.get_by_product(&product_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(reviews))))
}

/// Latest three five-star reviews.
#[utoipa::path(
    get,
    path = "/api/reviews/top/five-star/latest",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Up to three five-star reviews, newest first", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_latest_five_star_reviews(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let reviews = service.get_latest_five_star().await?;

    Ok((StatusCode::OK, Json(into_dtos(reviews))))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved review", body = ReviewDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(review) => Ok((StatusCode::OK, Json(review.into_dto()))),
        None => Err(AppError::NotFound("Review not found".to_string())),
    }
}

/// Update a review.
///
/// # Access Control
/// - Only the author (`user_id` in the body) may update the review
#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Successfully updated review", body = ReviewDto),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = ReviewService::new(&state.db);

    match service.update(UpdateReviewParams::from_dto(id, payload)).await? {
        Some(review) => Ok((StatusCode::OK, Json(review.into_dto()))),
        None => Err(AppError::NotFound("Review not found".to_string())),
    }
}

/// Delete a review.
///
/// # Access Control
/// - Only the author (`user_id` query parameter) may delete the review
#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID"),
        ("user_id" = i32, Query, description = "ID of the requesting user")
    ),
    responses(
        (status = 200, description = "Successfully deleted review", body = MessageDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteReviewParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    if !service.delete(id, params.user_id).await? {
        return Err(AppError::NotFound("Review not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("Review deleted successfully"))))
}
