//! Notification domain models and parameters.
//!
//! A notification without `user_id` is a broadcast. Broadcasts track their readers in
//! `read_by` instead of the single `read` flag.

use chrono::{DateTime, Utc};

use crate::model::notification::{CreateNotificationDto, NotificationDto, UpdateNotificationDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: Option<i32>,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub visible: bool,
    pub metadata: Option<serde_json::Value>,
    pub read_by: Vec<i32>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model, read_by: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            title: entity.title,
            message: entity.message,
            read: entity.read,
            visible: entity.visible,
            metadata: entity.metadata,
            read_by,
            created_at: entity.created_at,
        }
    }

    pub fn is_broadcast(&self) -> bool {
        self.user_id.is_none()
    }

    /// Whether `viewer` has read the notification.
    pub fn is_read_by(&self, viewer: i32) -> bool {
        if self.is_broadcast() {
            self.read_by.contains(&viewer)
        } else {
            self.read
        }
    }

    /// Converts to a DTO with `read` resolved for `viewer`.
    pub fn into_dto_for(self, viewer: i32) -> NotificationDto {
        let read = self.is_read_by(viewer);
        NotificationDto { read, ..self.into_dto() }
    }

    /// Converts to a DTO with the stored `read` flag, as seen by administrators.
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            user_id: self.user_id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            read: self.read,
            visible: self.visible,
            metadata: self.metadata,
            read_by: self.read_by,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateNotificationParams {
    pub user_id: Option<i32>,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub metadata: Option<serde_json::Value>,
}

impl CreateNotificationParams {
    pub fn from_dto(dto: CreateNotificationDto) -> Self {
        Self {
            user_id: dto.user_id,
            kind: dto.kind,
            title: dto.title.trim().to_string(),
            message: dto.message.trim().to_string(),
            metadata: dto.metadata,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateNotificationParams {
    pub id: i32,
    pub title: Option<String>,
    pub message: Option<String>,
    pub visible: Option<bool>,
}

impl UpdateNotificationParams {
    pub fn from_dto(id: i32, dto: UpdateNotificationDto) -> Self {
        Self {
            id,
            title: dto.title.map(|t| t.trim().to_string()),
            message: dto.message.map(|m| m.trim().to_string()),
            visible: dto.visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(user_id: Option<i32>, read: bool, read_by: Vec<i32>) -> Notification {
        Notification {
            id: 1,
            user_id,
            kind: "custom".to_string(),
            title: "Title".to_string(),
            message: "Message".to_string(),
            read,
            visible: true,
            metadata: None,
            read_by,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn broadcast_read_state_is_per_user() {
        let broadcast = notification(None, false, vec![7]);

        assert!(broadcast.is_read_by(7));
        assert!(!broadcast.is_read_by(8));
        assert!(!broadcast.clone().into_dto_for(8).read);
        assert!(broadcast.into_dto_for(7).read);
    }

    #[test]
    fn targeted_read_state_uses_flag() {
        assert!(notification(Some(3), true, Vec::new()).is_read_by(3));
        assert!(!notification(Some(3), false, Vec::new()).is_read_by(3));
    }
}
