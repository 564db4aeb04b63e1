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
        notification::{
            CreateNotificationDto, MarkReadDto, NotificationDto, UpdateNotificationDto,
        },
    },
    server::{
        error::AppError,
        model::notification::{CreateNotificationParams, UpdateNotificationParams},
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List notifications for a user.
///
/// Returns visible notifications addressed to the user plus broadcasts, newest first,
/// at most 100. For broadcasts `read` reflects whether this user has read it.
#[utoipa::path(
    get,
    path = "/api/notifications/user/{user_id}",
    tag = NOTIFICATION_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Notifications for the user", body = Vec<NotificationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = NotificationService::new(&state.db);

    let notifications = service.list_for_user(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            notifications
                .into_iter()
                .map(|n| n.into_dto_for(user_id))
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a notification.
///
/// Omitting `user_id` creates a broadcast.
#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Successfully created notification", body = NotificationDto),
        (status = 400, description = "Missing title or message", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_notification(
    State(state): State<AppState>,
    Json(payload): Json<CreateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = NotificationService::new(&state.db);

    let notification = service
        .create(CreateNotificationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}

/// Mark a notification read.
#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    request_body = MarkReadDto,
    responses(
        (status = 200, description = "Notification marked read", body = NotificationDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MarkReadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = NotificationService::new(&state.db);

    match service.mark_read(id, payload.user_id).await? {
        Some(notification) => Ok((
            StatusCode::OK,
            Json(notification.into_dto_for(payload.user_id)),
        )),
        None => Err(AppError::NotFound("Notification not found".to_string())),
    }
}

/// List every notification for administrators.
#[utoipa::path(
    get,
    path = "/api/notifications/admin",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Up to 200 notifications, newest first", body = Vec<NotificationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_notifications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = NotificationService::new(&state.db);

    let notifications = service.list_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            notifications
                .into_iter()
                .map(|n| n.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    put,
    path = "/api/notifications/admin/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    request_body = UpdateNotificationDto,
    responses(
        (status = 200, description = "Successfully updated notification", body = NotificationDto),
        (status = 400, description = "Invalid notification data", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_notification(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = NotificationService::new(&state.db);

    match service
        .update(UpdateNotificationParams::from_dto(id, payload))
        .await?
    {
        Some(notification) => Ok((StatusCode::OK, Json(notification.into_dto()))),
        None => Err(AppError::NotFound("Notification not found".to_string())),
    }
}

#[utoipa::path(
    delete,
    path = "/api/notifications/admin/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted notification", body = MessageDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = NotificationService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Notification not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Notification deleted successfully")),
    ))
}
