use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        inquiry::{
            ConnectionStatusDto, CreateInquiryDto, InquiryDto, UpdateInquiryDto,
            UserUpdateInquiryDto,
        },
    },
    server::{
        error::AppError,
        model::inquiry::{CreateInquiryParams, Inquiry, InquiryChanges},
        service::inquiry::InquiryService,
        state::AppState,
    },
};

/// Tag for grouping inquiry endpoints in OpenAPI documentation
pub static INQUIRY_TAG: &str = "inquiry";

fn into_dtos(inquiries: Vec<Inquiry>) -> Vec<InquiryDto> {
    inquiries.into_iter().map(Inquiry::into_dto).collect()
}

/// List all inquiries, newest first.
#[utoipa::path(
    get,
    path = "/api/inquiries",
    tag = INQUIRY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved inquiries", body = Vec<InquiryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inquiries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db);

    let inquiries = service.get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(inquiries))))
}

/// Create an inquiry.
///
/// Assigns the next inquiry code. Priority defaults from the inquiry type when omitted.
///
/// # Returns
/// - `201 Created` - The stored inquiry
/// - `400 Bad Request` - Blank description, invalid name or e-mail
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/inquiries",
    tag = INQUIRY_TAG,
    request_body = CreateInquiryDto,
    responses(
        (status = 201, description = "Successfully created inquiry", body = InquiryDto),
        (status = 400, description = "Invalid inquiry data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inquiry(
    State(state): State<AppState>,
    Json(payload): Json<CreateInquiryDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = InquiryService::new(&state.db);

    let inquiry = service
        .create(CreateInquiryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(inquiry.into_dto())))
}

/// Storage connectivity check.
#[utoipa::path(
    get,
    path = "/api/inquiries/test",
    tag = INQUIRY_TAG,
    responses(
        (status = 200, description = "Storage reachable", body = ConnectionStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn test_connection(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db);

    let total_inquiries = service.count().await?;

    Ok((
        StatusCode::OK,
        Json(ConnectionStatusDto {
            message: "Inquiry storage is reachable".to_string(),
            total_inquiries,
        }),
    ))
}

/// Latest inquiry of a user.
#[utoipa::path(
    get,
    path = "/api/inquiries/user/{user_id}",
    tag = INQUIRY_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Most recent inquiry of the user", body = InquiryDto),
        (status = 404, description = "User has no inquiries", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_latest_user_inquiry(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db);

    match service.get_latest_by_user(user_id).await? {
        Some(inquiry) => Ok((StatusCode::OK, Json(inquiry.into_dto()))),
        None => Err(AppError::NotFound(
            "No inquiries found for this user".to_string(),
        )),
    }
}

/// All inquiries of a user, newest first.
#[utoipa::path(
    get,
    path = "/api/inquiries/user/{user_id}/all",
    tag = INQUIRY_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Inquiries of the user", body = Vec<InquiryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_inquiries(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db);

    let inquiries = service.get_by_user(user_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(inquiries))))
}

/// Edit one of the user's own inquiries while it is still pending.
///
/// # Returns
/// - `200 OK` - The updated inquiry
/// - `400 Bad Request` - Invalid name or blank description
/// - `403 Forbidden` - The inquiry is no longer pending
/// - `404 Not Found` - No such inquiry for this user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/inquiries/user/{user_id}/{id}",
    tag = INQUIRY_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("id" = i32, Path, description = "Inquiry ID")
    ),
    request_body = UserUpdateInquiryDto,
    responses(
        (status = 200, description = "Successfully updated inquiry", body = InquiryDto),
        (status = 400, description = "Invalid inquiry data", body = ErrorDto),
        (status = 403, description = "Inquiry is no longer pending", body = ErrorDto),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_inquiry(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(i32, i32)>,
    Json(payload): Json<UserUpdateInquiryDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = InquiryService::new(&state.db);

    match service
        .update_for_user(user_id, id, InquiryChanges::from_user_dto(payload))
        .await?
    {
        Some(inquiry) => Ok((StatusCode::OK, Json(inquiry.into_dto()))),
        None => Err(AppError::NotFound("Inquiry not found".to_string())),
    }
}

/// Delete one of the user's own inquiries while it is still pending.
#[utoipa::path(
    delete,
    path = "/api/inquiries/user/{user_id}/{id}",
    tag = INQUIRY_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("id" = i32, Path, description = "Inquiry ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted inquiry", body = MessageDto),
        (status = 403, description = "Inquiry is no longer pending", body = ErrorDto),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user_inquiry(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db);

    if !service.delete_for_user(user_id, id).await? {
        return Err(AppError::NotFound("Inquiry not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Inquiry deleted successfully")),
    ))
}

/// Get an inquiry by ID.
#[utoipa::path(
    get,
    path = "/api/inquiries/{id}",
    tag = INQUIRY_TAG,
    params(
        ("id" = i32, Path, description = "Inquiry ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved inquiry", body = InquiryDto),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inquiry_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(inquiry) => Ok((StatusCode::OK, Json(inquiry.into_dto()))),
        None => Err(AppError::NotFound("Inquiry not found".to_string())),
    }
}

/// Administrator update of an inquiry.
///
/// Any subset of fields may be given. Supplying a non-empty `response` notifies the
/// inquiry's owner.
#[utoipa::path(
    put,
    path = "/api/inquiries/{id}",
    tag = INQUIRY_TAG,
    params(
        ("id" = i32, Path, description = "Inquiry ID")
    ),
    request_body = UpdateInquiryDto,
    responses(
        (status = 200, description = "Successfully updated inquiry", body = InquiryDto),
        (status = 400, description = "Invalid inquiry data", body = ErrorDto),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInquiryDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = InquiryService::new(&state.db);

    match service
        .update(id, InquiryChanges::from_admin_dto(payload))
        .await?
    {
        Some(inquiry) => Ok((StatusCode::OK, Json(inquiry.into_dto()))),
        None => Err(AppError::NotFound("Inquiry not found".to_string())),
    }
}

/// Delete an inquiry.
#[utoipa::path(
    delete,
    path = "/api/inquiries/{id}",
    tag = INQUIRY_TAG,
    params(
        ("id" = i32, Path, description = "Inquiry ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted inquiry", body = MessageDto),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Inquiry not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Inquiry deleted successfully")),
    ))
}
