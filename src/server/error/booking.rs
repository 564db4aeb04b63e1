use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Booking rule violations raised by the availability and pricing engine or the
/// booking service.
#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    /// Every room is occupied for at least one night of the requested stay.
    #[error("No rooms available for the selected dates")]
    NoRoomAvailable,

    /// The explicitly requested room overlaps an existing reservation.
    #[error("Room {0} is not available for the selected dates")]
    RoomUnavailable(i32),

    /// The requested room number lies outside `1..=room_count`.
    #[error("Room {room} does not exist, rooms are numbered 1 to {room_count}")]
    RoomOutOfRange { room: i32, room_count: i32 },

    /// The package literal is not one of the recognized packages.
    #[error("Unknown package type '{0}'")]
    UnknownPackageType(String),

    /// The package is recognized but has no entry in the pricing table.
    #[error("No pricing is configured for package '{0}'")]
    UnpricedPackage(String),

    #[error("Guest count must be 1 or 2, got {0}")]
    InvalidGuestCount(i32),

    #[error("Package duration must be at least 1 day, got {0}")]
    InvalidDuration(i32),

    /// The package requires a longer stay than requested.
    #[error("{package} requires a minimum stay of {minimum} days")]
    MinimumDurationNotMet { package: String, minimum: i32 },

    #[error("Check-out date must be after check-in date")]
    InvalidDateRange,
}

/// Converts booking errors into HTTP responses.
///
/// # Returns
/// - 409 Conflict - For `NoRoomAvailable` and `RoomUnavailable`
/// - 400 Bad Request - For every other variant
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NoRoomAvailable | Self::RoomUnavailable(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
