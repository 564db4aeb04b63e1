//! Inquiry domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::inquiry::{
    CreateInquiryDto, InquiryDto, InquiryKind, InquiryPriority, InquiryStatus, UpdateInquiryDto,
    UserUpdateInquiryDto,
};

/// Prefix of every human readable inquiry code.
pub const INQUIRY_CODE_PREFIX: &str = "INQ";

/// Formats the code for a sequence number, e.g. `7` becomes `"INQ007"`.
pub fn format_inquiry_code(sequence: u32) -> String {
    format!("{}{:03}", INQUIRY_CODE_PREFIX, sequence)
}

/// Sequence number encoded in a code, `None` for codes not produced by `format_inquiry_code`.
pub fn parse_inquiry_code(code: &str) -> Option<u32> {
    code.strip_prefix(INQUIRY_CODE_PREFIX)?.parse().ok()
}

/// Priority assumed when the client does not pick one.
pub fn default_priority(kind: InquiryKind) -> InquiryPriority {
    match kind {
        InquiryKind::Complaint | InquiryKind::Booking => InquiryPriority::High,
        InquiryKind::Product | InquiryKind::Support => InquiryPriority::Medium,
        InquiryKind::General | InquiryKind::Feedback => InquiryPriority::Low,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub id: i32,
    pub inquiry_code: String,
    pub user_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub kind: InquiryKind,
    pub description: String,
    pub status: InquiryStatus,
    pub priority: InquiryPriority,
    pub response: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Inquiry {
    /// Converts an entity model; unrecognized stored values fall back to the defaults.
    pub fn from_entity(entity: entity::inquiry::Model) -> Self {
        let kind = entity.kind.parse().unwrap_or_default();
        Self {
            id: entity.id,
            inquiry_code: entity.inquiry_code,
            user_id: entity.user_id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            kind,
            description: entity.description,
            status: entity.status.parse().unwrap_or_default(),
            priority: entity
                .priority
                .parse()
                .unwrap_or_else(|_| default_priority(kind)),
            response: entity.response,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> InquiryDto {
        InquiryDto {
            id: self.id,
            inquiry_code: self.inquiry_code,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            kind: self.kind,
            description: self.description,
            status: self.status,
            priority: self.priority,
            response: self.response,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateInquiryParams {
    pub user_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub kind: InquiryKind,
    pub description: String,
    pub status: InquiryStatus,
    pub priority: InquiryPriority,
    pub response: String,
}

impl CreateInquiryParams {
    pub fn from_dto(dto: CreateInquiryDto) -> Self {
        let kind = dto.kind.unwrap_or_default();
        Self {
            user_id: dto.user_id,
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            phone: dto.phone.trim().to_string(),
            kind,
            description: dto.description.trim().to_string(),
            status: dto.status.unwrap_or_default(),
            priority: dto.priority.unwrap_or_else(|| default_priority(kind)),
            response: dto.response.unwrap_or_default(),
        }
    }
}

/// Column changes for an inquiry; `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub kind: Option<InquiryKind>,
    pub description: Option<String>,
    pub status: Option<InquiryStatus>,
    pub priority: Option<InquiryPriority>,
    pub response: Option<String>,
}

impl InquiryChanges {
    pub fn from_admin_dto(dto: UpdateInquiryDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            email: dto.email.map(|e| e.trim().to_lowercase()),
            phone: dto.phone.map(|p| p.trim().to_string()),
            kind: dto.kind,
            description: dto.description.map(|d| d.trim().to_string()),
            status: dto.status,
            priority: dto.priority,
            response: dto.response.map(|r| r.trim().to_string()),
        }
    }

    /// Customers may only edit the name and description of their own inquiry.
    pub fn from_user_dto(dto: UserUpdateInquiryDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description.map(|d| d.trim().to_string()),
            ..Default::default()
        }
    }
}
