use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{ValidateEmail, ValidationError};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Names may only contain letters and spaces; empty is allowed.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        Ok(())
    } else {
        Err(ValidationError::new("name")
            .with_message("Name can only contain letters and spaces".into()))
    }
}

/// Accepts an empty string or a `local@domain.tld` shaped address.
pub fn validate_optional_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email")
            .with_message("Please provide a valid email address".into()))
    }
}
