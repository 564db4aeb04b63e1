use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::api::{validate_name, validate_optional_email};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InquiryKind {
    #[default]
    General,
    Booking,
    Product,
    Complaint,
    Feedback,
    Support,
}

impl InquiryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Booking => "booking",
            Self::Product => "product",
            Self::Complaint => "complaint",
            Self::Feedback => "feedback",
            Self::Support => "support",
        }
    }
}

impl FromStr for InquiryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Self::General),
            "booking" => Ok(Self::Booking),
            "product" => Ok(Self::Product),
            "complaint" => Ok(Self::Complaint),
            "feedback" => Ok(Self::Feedback),
            "support" => Ok(Self::Support),
            other => Err(format!("Unknown inquiry kind '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    Pending,
    Responded,
    Closed,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Responded => "responded",
            Self::Closed => "closed",
        }
    }
}

impl FromStr for InquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "responded" => Ok(Self::Responded),
            "closed" => Ok(Self::Closed),
            other => Err(format!("Unknown inquiry status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InquiryPriority {
    Low,
    Medium,
    High,
}

impl InquiryPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for InquiryPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("Unknown inquiry priority '{}'", other)),
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Validate, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateInquiryDto {
    pub user_id: Option<i32>,
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "type", default)]
    pub kind: Option<InquiryKind>,
    #[serde(default)]
    pub description: String,
    pub status: Option<InquiryStatus>,
    pub priority: Option<InquiryPriority>,
    pub response: Option<String>,
}

#[derive(Serialize, Deserialize, Validate, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateInquiryDto {
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<InquiryStatus>,
    pub priority: Option<InquiryPriority>,
    pub response: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<InquiryKind>,
}

#[derive(Serialize, Deserialize, Validate, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UserUpdateInquiryDto {
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct InquiryDto {
    pub id: i32,
    pub inquiry_code: String,
    pub user_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub kind: InquiryKind,
    pub description: String,
    pub status: InquiryStatus,
    pub priority: InquiryPriority,
    pub response: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConnectionStatusDto {
    pub message: String,
    pub total_inquiries: u64,
}
