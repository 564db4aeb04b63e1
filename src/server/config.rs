use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_ROOM_COUNT: i32 = 12;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Number of rooms in the inventory, numbered `1..=room_count`.
    pub room_count: i32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            room_count: match std::env::var("ROOM_COUNT") {
                Ok(value) => parse_room_count(&value)?,
                Err(_) => DEFAULT_ROOM_COUNT,
            },
        })
    }
}

fn parse_room_count(value: &str) -> Result<i32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "ROOM_COUNT".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let count: i32 = value
        .trim()
        .parse()
        .map_err(|_| invalid("expected a whole number"))?;

    if count < 1 {
        return Err(invalid("at least one room is required"));
    }

    Ok(count)
}
