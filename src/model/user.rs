use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(format!("Unknown role '{}'", other)),
        }
    }
}

/// Public view of an account. The password is never serialized.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub dob: Option<NaiveDate>,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub agree_terms: bool,
    pub role: UserRole,
    pub profile_picture: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Validate, Clone, Debug, ToSchema)]
pub struct SignupDto {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[serde(default)]
    pub country: String,
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub phone: String,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub agree_terms: bool,
    pub role: Option<UserRole>,
    pub profile_picture: Option<String>,
}

#[derive(Serialize, Deserialize, Validate, Clone, Debug, ToSchema)]
pub struct LoginDto {
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Validate, Clone, Debug, Default, ToSchema)]
pub struct UpdateUserDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: Option<String>,
    pub profile_picture: Option<String>,
    pub role: Option<UserRole>,
    pub current_password: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
    /// Lets an administrator replace the password without the current one.
    #[serde(default)]
    pub admin_override: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub user: UserDto,
}
