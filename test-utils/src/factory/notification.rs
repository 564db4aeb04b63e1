//! Notification factory for creating test notification entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications with customizable fields.
///
/// Defaults to a visible, unread broadcast notification.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    title: String,
    visible: bool,
    metadata: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: None,
            title: "Spa news".to_string(),
            visible: true,
            metadata: None,
            created_at: Utc::now(),
        }
    }

    /// Targets the notification at a single user.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets whether customers can see the notification.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Attaches JSON metadata, such as the booking or inquiry the notice refers to.
    pub fn metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Sets the creation timestamp, used to control ordering in tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the notification entity into the database.
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            kind: ActiveValue::Set("custom".to_string()),
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set("Test message".to_string()),
            read: ActiveValue::Set(false),
            visible: ActiveValue::Set(self.visible),
            metadata: ActiveValue::Set(self.metadata),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a broadcast notification with default values.
pub async fn create_notification(
    db: &DatabaseConnection,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db).build().await
}
