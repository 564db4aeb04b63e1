//! Inquiry factory for creating test inquiry entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test inquiries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let inquiry = InquiryFactory::new(&db)
///     .user_id(Some(user.id))
///     .status("responded")
///     .build()
///     .await?;
/// ```
pub struct InquiryFactory<'a> {
    db: &'a DatabaseConnection,
    inquiry_code: String,
    user_id: Option<i32>,
    kind: String,
    description: String,
    status: String,
    priority: String,
}

impl<'a> InquiryFactory<'a> {
    /// Creates a new InquiryFactory with default values.
    ///
    /// Defaults:
    /// - inquiry_code: `"INQ{id:03}"` where id is auto-incremented
    /// - user_id: `None`
    /// - kind: `"general"`, status: `"pending"`, priority: `"low"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            inquiry_code: format!("INQ{:03}", id),
            user_id: None,
            kind: "general".to_string(),
            description: format!("Inquiry {}", id),
            status: "pending".to_string(),
            priority: "low".to_string(),
        }
    }

    /// Sets the human readable inquiry code.
    pub fn inquiry_code(mut self, code: impl Into<String>) -> Self {
        self.inquiry_code = code.into();
        self
    }

    /// Sets the owning user.
    pub fn user_id(mut self, user_id: Option<i32>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the inquiry kind.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the workflow status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the inquiry entity into the database.
    pub async fn build(self) -> Result<entity::inquiry::Model, DbErr> {
        let now = Utc::now();
        entity::inquiry::ActiveModel {
            inquiry_code: ActiveValue::Set(self.inquiry_code),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set("Test Guest".to_string()),
            email: ActiveValue::Set("guest@example.com".to_string()),
            phone: ActiveValue::Set(String::new()),
            kind: ActiveValue::Set(self.kind),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            priority: ActiveValue::Set(self.priority),
            response: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inquiry with default values.
pub async fn create_inquiry(db: &DatabaseConnection) -> Result<entity::inquiry::Model, DbErr> {
    InquiryFactory::new(db).build().await
}
