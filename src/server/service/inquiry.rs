use sea_orm::{DatabaseConnection, SqlErr};
use serde_json::json;

use crate::{
    model::inquiry::InquiryStatus,
    server::{
        data::{inquiry::InquiryRepository, notification::NotificationRepository},
        error::AppError,
        model::{
            inquiry::{CreateInquiryParams, Inquiry, InquiryChanges},
            notification::CreateNotificationParams,
        },
    },
};

/// Notification kind raised when staff respond to an inquiry.
pub const INQUIRY_RESPONDED_KIND: &str = "inquiry_responded";
/// Characters of the response quoted in the notification message.
const RESPONSE_PREVIEW_CHARS: usize = 120;
/// Inserts attempted when concurrent requests race for the same inquiry code.
const CODE_ATTEMPTS: usize = 5;

pub struct InquiryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InquiryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Inquiry>, AppError> {
        let repo = InquiryRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Number of stored inquiries, used as a storage connectivity probe
    pub async fn count(&self) -> Result<u64, AppError> {
        let repo = InquiryRepository::new(self.db);

        Ok(repo.count().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Inquiry>, AppError> {
        let repo = InquiryRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_latest_by_user(&self, user_id: i32) -> Result<Option<Inquiry>, AppError> {
        let repo = InquiryRepository::new(self.db);

        Ok(repo.get_latest_by_user(user_id).await?)
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Inquiry>, AppError> {
        let repo = InquiryRepository::new(self.db);

        Ok(repo.get_by_user(user_id).await?)
    }

    /// Stores a new inquiry under the next free inquiry code
    ///
    /// # Returns
    /// - `Ok(Inquiry)`: The stored inquiry
    /// - `Err(AppError::BadRequest)`: The description is blank
    pub async fn create(&self, params: CreateInquiryParams) -> Result<Inquiry, AppError> {
        if params.description.is_empty() {
            return Err(AppError::BadRequest("Description is required".to_string()));
        }

        let repo = InquiryRepository::new(self.db);

        let mut attempt = 1;
        loop {
            let code = repo.next_code().await?;
            match repo.create(code.clone(), params.clone()).await {
                Ok(inquiry) => {
                    tracing::info!("Created inquiry {} ({})", inquiry.inquiry_code, inquiry.id);
                    return Ok(inquiry);
                }
                Err(err)
                    if attempt < CODE_ATTEMPTS
                        && matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
                {
                    tracing::debug!("Inquiry code {} already taken, retrying", code);
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Applies an administrator update
    ///
    /// A non-empty response notifies the inquiry's owner. Failing to notify does not fail
    /// the update.
    pub async fn update(
        &self,
        id: i32,
        changes: InquiryChanges,
    ) -> Result<Option<Inquiry>, AppError> {
        if changes.description.as_deref() == Some("") {
            return Err(AppError::BadRequest("Description is required".to_string()));
        }

        let repo = InquiryRepository::new(self.db);

        let response = changes.response.clone().filter(|r| !r.is_empty());

        let Some(inquiry) = repo.update(id, changes).await? else {
            return Ok(None);
        };
        tracing::info!("Updated inquiry {}", inquiry.inquiry_code);

        if let (Some(response), Some(user_id)) = (response, inquiry.user_id) {
            if let Err(err) = self.notify_response(&inquiry, user_id, &response).await {
                tracing::error!(
                    "Failed to notify user {} about inquiry {}: {}",
                    user_id,
                    inquiry.inquiry_code,
                    err
                );
            }
        }

        Ok(Some(inquiry))
    }

    async fn notify_response(
        &self,
        inquiry: &Inquiry,
        user_id: i32,
        response: &str,
    ) -> Result<(), AppError> {
        let preview: String = response.chars().take(RESPONSE_PREVIEW_CHARS).collect();

        NotificationRepository::new(self.db)
            .create(CreateNotificationParams {
                user_id: Some(user_id),
                kind: INQUIRY_RESPONDED_KIND.to_string(),
                title: "Your inquiry has been responded".to_string(),
                message: format!("Inquiry {}: {}", inquiry.inquiry_code, preview),
                metadata: Some(json!({
                    "inquiry_id": inquiry.id,
                    "inquiry_code": inquiry.inquiry_code,
                })),
            })
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = InquiryRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted inquiry {}", id);
        }

        Ok(deleted)
    }

    /// Loads an inquiry owned by `user_id` that is still pending
    ///
    /// # Returns
    /// - `Ok(Some(Inquiry))`: Owned and pending
    /// - `Ok(None)`: No inquiry with that id for that user
    /// - `Err(AppError::Forbidden)`: The inquiry is no longer pending
    async fn get_pending_owned(&self, user_id: i32, id: i32) -> Result<Option<Inquiry>, AppError> {
        let repo = InquiryRepository::new(self.db);

        let Some(inquiry) = repo.get_by_id(id).await? else {
            return Ok(None);
        };
        if inquiry.user_id != Some(user_id) {
            return Ok(None);
        }
        if inquiry.status != InquiryStatus::Pending {
            return Err(AppError::Forbidden(format!(
                "Inquiry {} can no longer be changed",
                inquiry.inquiry_code
            )));
        }

        Ok(Some(inquiry))
    }

    /// Customer edit of their own pending inquiry
    pub async fn update_for_user(
        &self,
        user_id: i32,
        id: i32,
        changes: InquiryChanges,
    ) -> Result<Option<Inquiry>, AppError> {
        if self.get_pending_owned(user_id, id).await?.is_none() {
            return Ok(None);
        }
        if changes.description.as_deref() == Some("") {
            return Err(AppError::BadRequest("Description is required".to_string()));
        }

        let repo = InquiryRepository::new(self.db);

        Ok(repo.update(id, changes).await?)
    }

    /// Customer removal of their own pending inquiry
    pub async fn delete_for_user(&self, user_id: i32, id: i32) -> Result<bool, AppError> {
        if self.get_pending_owned(user_id, id).await?.is_none() {
            return Ok(false);
        }

        self.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inquiry::{InquiryKind, InquiryPriority};
    use test_utils::{builder::TestBuilder, factory};

    fn params(user_id: Option<i32>, kind: InquiryKind) -> CreateInquiryParams {
        CreateInquiryParams {
            user_id,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            kind,
            description: "Do you offer airport pickup?".to_string(),
            status: InquiryStatus::Pending,
            priority: crate::server::model::inquiry::default_priority(kind),
            response: String::new(),
        }
    }

    #[tokio::test]
    async fn create_assigns_next_code() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_inquiry_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::inquiry::InquiryFactory::new(db)
            .inquiry_code("INQ041")
            .build()
            .await?;

        let inquiry = InquiryService::new(db)
            .create(params(None, InquiryKind::Complaint))
            .await?;

        assert_eq!(inquiry.inquiry_code, "INQ042");
        assert_eq!(inquiry.priority, InquiryPriority::High);
        assert_eq!(inquiry.status, InquiryStatus::Pending);

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_blank_description() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_inquiry_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let mut blank = params(None, InquiryKind::General);
        blank.description = String::new();

        let result = InquiryService::new(db).create(blank).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn response_notifies_owner() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_inquiry_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let service = InquiryService::new(db);
        let inquiry = service
            .create(params(Some(user.id), InquiryKind::Booking))
            .await?;

        let updated = service
            .update(
                inquiry.id,
                InquiryChanges {
                    status: Some(InquiryStatus::Responded),
                    response: Some("Yes, pickup is included.".to_string()),
                    ..Default::default()
                },
            )
            .await?
            .unwrap();

        assert_eq!(updated.status, InquiryStatus::Responded);

        let feed = NotificationRepository::new(db)
            .list_for_user(user.id, 10)
            .await?;
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].kind, INQUIRY_RESPONDED_KIND);
        assert_eq!(
            feed[0].message,
            format!("Inquiry {}: Yes, pickup is included.", inquiry.inquiry_code)
        );
        assert_eq!(
            feed[0].metadata,
            Some(json!({ "inquiry_id": inquiry.id, "inquiry_code": inquiry.inquiry_code }))
        );

        Ok(())
    }

    #[tokio::test]
    async fn empty_response_sends_no_notification() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_inquiry_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let inquiry = factory::inquiry::InquiryFactory::new(db)
            .user_id(Some(user.id))
            .build()
            .await?;

        InquiryService::new(db)
            .update(
                inquiry.id,
                InquiryChanges {
                    response: Some(String::new()),
                    ..Default::default()
                },
            )
            .await?;

        let feed = NotificationRepository::new(db)
            .list_for_user(user.id, 10)
            .await?;
        assert!(feed.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn users_cannot_change_answered_inquiries() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_inquiry_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let pending = factory::inquiry::InquiryFactory::new(db)
            .user_id(Some(user.id))
            .build()
            .await?;
        let answered = factory::inquiry::InquiryFactory::new(db)
            .user_id(Some(user.id))
            .status("responded")
            .build()
            .await?;

        let service = InquiryService::new(db);
        let edit = || InquiryChanges {
            description: Some("Updated question".to_string()),
            ..Default::default()
        };

        let edited = service
            .update_for_user(user.id, pending.id, edit())
            .await?
            .unwrap();
        assert_eq!(edited.description, "Updated question");

        assert!(matches!(
            service.update_for_user(user.id, answered.id, edit()).await,
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            service.delete_for_user(user.id, answered.id).await,
            Err(AppError::Forbidden(_))
        ));
        assert!(!service.delete_for_user(user.id + 1, pending.id).await?);
        assert!(service.delete_for_user(user.id, pending.id).await?);

        Ok(())
    }
}
