use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{CreateNotificationParams, Notification, UpdateNotificationParams},
};

/// Most notifications returned to a customer.
const USER_FEED_LIMIT: u64 = 100;
/// Most notifications returned to an administrator.
const ADMIN_FEED_LIMIT: u64 = 200;

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Visible notifications for a user, including broadcasts, newest first
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Notification>, AppError> {
        let repo = NotificationRepository::new(self.db);

        Ok(repo.list_for_user(user_id, USER_FEED_LIMIT).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Notification>, AppError> {
        let repo = NotificationRepository::new(self.db);

        Ok(repo.list_all(ADMIN_FEED_LIMIT).await?)
    }

    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo.create(params).await?;
        match notification.user_id {
            Some(user_id) => tracing::info!(
                "Created notification {} for user {}",
                notification.id,
                user_id
            ),
            None => tracing::info!("Created broadcast notification {}", notification.id),
        }

        Ok(notification)
    }

    /// Marks a notification read for a user
    ///
    /// Targeted notifications flip their `read` flag; broadcasts record the reader once.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))`: The notification as seen after the change
    /// - `Ok(None)`: No notification with that id
    pub async fn mark_read(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Notification>, AppError> {
        let repo = NotificationRepository::new(self.db);

        let Some(notification) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        if notification.is_broadcast() {
            repo.add_reader(id, user_id).await?;
        } else {
            repo.set_read(id).await?;
        }

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn update(
        &self,
        params: UpdateNotificationParams,
    ) -> Result<Option<Notification>, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo.update(params).await?;
        if let Some(notification) = &notification {
            tracing::info!("Updated notification {}", notification.id);
        }

        Ok(notification)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = NotificationRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted notification {}", id);
        }

        Ok(deleted)
    }
}
