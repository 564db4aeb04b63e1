//! User domain models and parameters.
//!
//! Accounts are identified by a lower-cased e-mail address. Passwords are kept on the
//! domain model for credential checks and are dropped when converting to a DTO.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::user::{SignupDto, UpdateUserDto, UserDto, UserRole};

/// Stored account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub dob: Option<NaiveDate>,
    /// Lower-case as stored.
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub agree_terms: bool,
    pub role: UserRole,
    pub profile_picture: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model at the repository boundary.
    ///
    /// Unknown stored roles fall back to `UserRole::User`.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            country: entity.country,
            dob: entity.dob,
            gender: entity.gender,
            phone: entity.phone,
            email: entity.email,
            password: entity.password,
            agree_terms: entity.agree_terms,
            role: entity.role.parse().unwrap_or_default(),
            profile_picture: entity.profile_picture,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            country: self.country,
            dob: self.dob,
            gender: capitalize(&self.gender),
            phone: self.phone,
            email: self.email,
            agree_terms: self.agree_terms,
            role: self.role,
            profile_picture: self.profile_picture,
            created_at: self.created_at,
        }
    }
}

/// Upper-cases the first character, e.g. `"female"` becomes `"Female"`.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parameters for registering an account.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub dob: Option<NaiveDate>,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
    pub role: UserRole,
    pub profile_picture: String,
}

impl SignupParams {
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            country: dto.country.trim().to_string(),
            dob: dto.dob,
            gender: dto.gender.trim().to_lowercase(),
            phone: dto.phone.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
            confirm_password: dto.confirm_password,
            agree_terms: dto.agree_terms,
            role: dto.role.unwrap_or_default(),
            profile_picture: dto.profile_picture.unwrap_or_default(),
        }
    }
}

/// Partial profile update as requested by the client.
///
/// Blank strings are treated as "not provided".
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub profile_picture: Option<String>,
    pub role: Option<UserRole>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
    pub admin_override: bool,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            first_name: non_blank(dto.first_name),
            last_name: non_blank(dto.last_name),
            country: non_blank(dto.country),
            dob: dto.dob,
            gender: non_blank(dto.gender).map(|g| g.to_lowercase()),
            phone: non_blank(dto.phone),
            email: non_blank(dto.email).map(|e| e.to_lowercase()),
            profile_picture: non_blank(dto.profile_picture),
            role: dto.role,
            current_password: dto.current_password.filter(|p| !p.is_empty()),
            new_password: dto.new_password.filter(|p| !p.is_empty()),
            confirm_password: dto.confirm_password,
            admin_override: dto.admin_override,
        }
    }
}

/// Column changes applied by the repository; `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub profile_picture: Option<String>,
}
