use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::notification::{
    CreateNotificationParams, Notification, UpdateNotificationParams,
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let notification = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            kind: ActiveValue::Set(params.kind),
            title: ActiveValue::Set(params.title),
            message: ActiveValue::Set(params.message),
            read: ActiveValue::Set(false),
            visible: ActiveValue::Set(true),
            metadata: ActiveValue::Set(params.metadata),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(notification, Vec::new()))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Notification>, DbErr> {
        let Some(notification) = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut readers = self.readers_of(&[id]).await?;

        Ok(Some(Notification::from_entity(
            notification,
            readers.remove(&id).unwrap_or_default(),
        )))
    }

    /// Gets visible notifications addressed to the user or broadcast, newest first
    pub async fn list_for_user(&self, user_id: i32, limit: u64) -> Result<Vec<Notification>, DbErr> {
        let notifications = entity::prelude::Notification::find()
            .filter(entity::notification::Column::Visible.eq(true))
            .filter(
                Condition::any()
                    .add(entity::notification::Column::UserId.eq(user_id))
                    .add(entity::notification::Column::UserId.is_null()),
            )
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.with_readers(notifications).await
    }

    /// Gets every notification regardless of visibility, newest first
    pub async fn list_all(&self, limit: u64) -> Result<Vec<Notification>, DbErr> {
        let notifications = entity::prelude::Notification::find()
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.with_readers(notifications).await
    }

    async fn with_readers(
        &self,
        notifications: Vec<entity::notification::Model>,
    ) -> Result<Vec<Notification>, DbErr> {
        let broadcast_ids: Vec<i32> = notifications
            .iter()
            .filter(|n| n.user_id.is_none())
            .map(|n| n.id)
            .collect();

        let mut readers = self.readers_of(&broadcast_ids).await?;

        Ok(notifications
            .into_iter()
            .map(|n| {
                let read_by = readers.remove(&n.id).unwrap_or_default();
                Notification::from_entity(n, read_by)
            })
            .collect())
    }

    /// Reader ids per notification, ascending
    async fn readers_of(&self, ids: &[i32]) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let reads = entity::prelude::NotificationRead::find()
            .filter(entity::notification_read::Column::NotificationId.is_in(ids.iter().copied()))
            .order_by_asc(entity::notification_read::Column::UserId)
            .all(self.db)
            .await?;

        let mut readers: HashMap<i32, Vec<i32>> = HashMap::new();
        for read in reads {
            readers
                .entry(read.notification_id)
                .or_default()
                .push(read.user_id);
        }

        Ok(readers)
    }

    /// Sets the read flag of a targeted notification
    pub async fn set_read(&self, id: i32) -> Result<(), DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::Unchanged(id),
            read: ActiveValue::Set(true),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Records that a user read a broadcast; repeated calls are no-ops
    pub async fn add_reader(&self, notification_id: i32, user_id: i32) -> Result<(), DbErr> {
        let existing = entity::prelude::NotificationRead::find_by_id((notification_id, user_id))
            .one(self.db)
            .await?;

        if existing.is_none() {
            entity::notification_read::ActiveModel {
                notification_id: ActiveValue::Set(notification_id),
                user_id: ActiveValue::Set(user_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn update(
        &self,
        params: UpdateNotificationParams,
    ) -> Result<Option<Notification>, DbErr> {
        let Some(notification) = entity::prelude::Notification::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::notification::ActiveModel = notification.into();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(message) = params.message {
            active_model.message = ActiveValue::Set(message);
        }
        if let Some(visible) = params.visible {
            active_model.visible = ActiveValue::Set(visible);
        }

        if active_model.is_changed() {
            active_model.update(self.db).await?;
        }

        self.get_by_id(params.id).await
    }

    /// Deletes a notification and its read markers
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::NotificationRead::delete_many()
            .filter(entity::notification_read::Column::NotificationId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Notification::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
