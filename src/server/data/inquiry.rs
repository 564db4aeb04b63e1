use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::inquiry::{
    format_inquiry_code, parse_inquiry_code, CreateInquiryParams, Inquiry, InquiryChanges,
};

pub struct InquiryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InquiryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Next free inquiry code, one past the highest existing sequence number
    pub async fn next_code(&self) -> Result<String, DbErr> {
        let codes: Vec<String> = entity::prelude::Inquiry::find()
            .select_only()
            .column(entity::inquiry::Column::InquiryCode)
            .into_tuple()
            .all(self.db)
            .await?;

        let highest = codes
            .iter()
            .filter_map(|code| parse_inquiry_code(code))
            .max()
            .unwrap_or(0);

        Ok(format_inquiry_code(highest + 1))
    }

    pub async fn create(
        &self,
        inquiry_code: String,
        params: CreateInquiryParams,
    ) -> Result<Inquiry, DbErr> {
        let now = Utc::now();
        let inquiry = entity::inquiry::ActiveModel {
            inquiry_code: ActiveValue::Set(inquiry_code),
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            priority: ActiveValue::Set(params.priority.as_str().to_string()),
            response: ActiveValue::Set(params.response),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Inquiry::from_entity(inquiry))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Inquiry>, DbErr> {
        let inquiry = entity::prelude::Inquiry::find_by_id(id).one(self.db).await?;

        Ok(inquiry.map(Inquiry::from_entity))
    }

    /// Gets all inquiries, newest first
    pub async fn get_all(&self) -> Result<Vec<Inquiry>, DbErr> {
        let inquiries = entity::prelude::Inquiry::find()
            .order_by_desc(entity::inquiry::Column::CreatedAt)
            .order_by_desc(entity::inquiry::Column::Id)
            .all(self.db)
            .await?;

        Ok(inquiries.into_iter().map(Inquiry::from_entity).collect())
    }

    /// Gets all inquiries of a user, newest first
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Inquiry>, DbErr> {
        let inquiries = entity::prelude::Inquiry::find()
            .filter(entity::inquiry::Column::UserId.eq(user_id))
            .order_by_desc(entity::inquiry::Column::CreatedAt)
            .order_by_desc(entity::inquiry::Column::Id)
            .all(self.db)
            .await?;

        Ok(inquiries.into_iter().map(Inquiry::from_entity).collect())
    }

    pub async fn get_latest_by_user(&self, user_id: i32) -> Result<Option<Inquiry>, DbErr> {
        let inquiry = entity::prelude::Inquiry::find()
            .filter(entity::inquiry::Column::UserId.eq(user_id))
            .order_by_desc(entity::inquiry::Column::CreatedAt)
            .order_by_desc(entity::inquiry::Column::Id)
            .one(self.db)
            .await?;

        Ok(inquiry.map(Inquiry::from_entity))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Inquiry::find().count(self.db).await
    }

    /// Applies changes and refreshes `updated_at`
    pub async fn update(&self, id: i32, changes: InquiryChanges) -> Result<Option<Inquiry>, DbErr> {
        let Some(inquiry) = entity::prelude::Inquiry::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::inquiry::ActiveModel = inquiry.into();
        if let Some(name) = changes.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = changes.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = changes.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(kind) = changes.kind {
            active_model.kind = ActiveValue::Set(kind.as_str().to_string());
        }
        if let Some(description) = changes.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(status) = changes.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(priority) = changes.priority {
            active_model.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(response) = changes.response {
            active_model.response = ActiveValue::Set(response);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(Inquiry::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Inquiry::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
