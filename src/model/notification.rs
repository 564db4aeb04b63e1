use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Validate, Clone, Debug, ToSchema)]
pub struct CreateNotificationDto {
    /// `None` broadcasts to every user.
    pub user_id: Option<i32>,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
}

fn default_kind() -> String {
    "general".to_string()
}

#[derive(Serialize, Deserialize, Validate, Clone, Debug, Default, ToSchema)]
pub struct UpdateNotificationDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: Option<String>,
    pub visible: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct MarkReadDto {
    pub user_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub user_id: Option<i32>,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    /// Read flag from the requesting user's point of view.
    pub read: bool,
    pub visible: bool,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
    /// Users that have read a broadcast notification.
    pub read_by: Vec<i32>,
    pub created_at: DateTime<Utc>,
}
