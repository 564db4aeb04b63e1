use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{
            AvailabilityDto, AvailableRoomsDto, BookingDto, BookingStatsDto, CheckAvailabilityDto,
            CreateBookingDto, PricingDto, UnavailableDatesDto, UpdateBookingDto,
        },
    },
    server::{
        error::AppError,
        model::booking::{CreateBookingParams, UpdateBookingParams},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

#[derive(Deserialize, IntoParams)]
pub struct UnavailableDatesParams {
    /// Length of the planned stay in days (default: 7)
    #[serde(default = "default_package_duration")]
    pub package_duration: i32,
}

fn default_package_duration() -> i32 {
    7
}

#[derive(Deserialize, IntoParams)]
pub struct AvailableRoomsParams {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

#[derive(Deserialize, IntoParams)]
pub struct PricingParams {
    pub package_type: Option<String>,
    pub duration: Option<i32>,
    /// Number of guests (default: 1)
    pub guest_count: Option<i32>,
    /// First night of the stay; today's month decides the season when omitted
    pub check_in: Option<NaiveDate>,
}

/// List all bookings.
///
/// # Returns
/// - `200 OK` - Bookings, newest first (empty list when there are none)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = Vec<BookingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.booking);

    let bookings = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(bookings.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a booking.
///
/// Validates the stay, assigns the requested room (or the lowest free room when none
/// is requested), prices the stay and stores it.
///
/// # Returns
/// - `201 Created` - The stored booking
/// - `400 Bad Request` - Invalid guest, package, duration or room
/// - `409 Conflict` - No room free for the stay, or the requested room is taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 409, description = "No room available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = BookingService::new(&state.db, &state.booking);

    let params = CreateBookingParams::try_from_dto(payload)?;

    let booking = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Booking statistics for the dashboard.
#[utoipa::path(
    get,
    path = "/api/bookings/stats",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Successfully computed statistics", body = BookingStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.booking);

    let stats = service.stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Dates on which a stay of the given length cannot start.
#[utoipa::path(
    get,
    path = "/api/bookings/unavailable-dates",
    tag = BOOKING_TAG,
    params(UnavailableDatesParams),
    responses(
        (status = 200, description = "Sorted unavailable check-in dates", body = UnavailableDatesDto),
        (status = 400, description = "Invalid duration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unavailable_dates(
    State(state): State<AppState>,
    Query(params): Query<UnavailableDatesParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.booking);

    let unavailable_dates = service.unavailable_dates(params.package_duration).await?;

    Ok((StatusCode::OK, Json(UnavailableDatesDto { unavailable_dates })))
}

/// Check whether a stay can be booked.
#[utoipa::path(
    post,
    path = "/api/bookings/check-availability",
    tag = BOOKING_TAG,
    request_body = CheckAvailabilityDto,
    responses(
        (status = 200, description = "Availability for the stay", body = AvailabilityDto),
        (status = 400, description = "Invalid duration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_availability(
    State(state): State<AppState>,
    Json(payload): Json<CheckAvailabilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.booking);

    let availability = service
        .check_availability(payload.check_in, payload.package_duration)
        .await?;

    Ok((StatusCode::OK, Json(availability.into_dto())))
}

/// List rooms free for a date range.
#[utoipa::path(
    get,
    path = "/api/bookings/available-rooms",
    tag = BOOKING_TAG,
    params(AvailableRoomsParams),
    responses(
        (status = 200, description = "Free rooms, ascending", body = AvailableRoomsDto),
        (status = 400, description = "Missing or inverted dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_rooms(
    State(state): State<AppState>,
    Query(params): Query<AvailableRoomsParams>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(check_in), Some(check_out)) = (params.check_in, params.check_out) else {
        return Err(AppError::BadRequest(
            "Check-in and check-out dates are required".to_string(),
        ));
    };

    let service = BookingService::new(&state.db, &state.booking);

    let rooms = service.available_rooms(check_in, check_out).await?;

    Ok((StatusCode::OK, Json(rooms.into_dto())))
}

/// Quote the price of a stay.
#[utoipa::path(
    get,
    path = "/api/bookings/pricing",
    tag = BOOKING_TAG,
    params(PricingParams),
    responses(
        (status = 200, description = "Price quote", body = PricingDto),
        (status = 400, description = "Unknown or unpriced package, or missing parameters", body = ErrorDto)
    ),
)]
pub async fn get_pricing(
    State(state): State<AppState>,
    Query(params): Query<PricingParams>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(package_type), Some(duration)) = (params.package_type, params.duration) else {
        return Err(AppError::BadRequest(
            "Package type and duration are required".to_string(),
        ));
    };

    let service = BookingService::new(&state.db, &state.booking);

    let pricing = service.quote(
        &package_type,
        duration,
        params.guest_count.unwrap_or(1),
        params.check_in,
    )?;

    Ok((StatusCode::OK, Json(pricing.into_dto())))
}

/// Get a booking by ID.
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booking", body = BookingDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.booking);

    match service.get_by_id(id).await? {
        Some(booking) => Ok((StatusCode::OK, Json(booking.into_dto()))),
        None => Err(AppError::NotFound("Booking not found".to_string())),
    }
}

/// Update a booking.
///
/// Re-validates and re-prices the stay. The room is reassigned to the lowest room
/// free for the new dates, ignoring the booking's own current reservation.
///
/// # Returns
/// - `200 OK` - The updated booking
/// - `400 Bad Request` - Invalid booking data
/// - `404 Not Found` - No booking with that ID
/// - `409 Conflict` - No room free for the new stay
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Successfully updated booking", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "No room available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = BookingService::new(&state.db, &state.booking);

    let params = UpdateBookingParams::try_from_dto(id, payload)?;

    match service.update(params).await? {
        Some(booking) => Ok((StatusCode::OK, Json(booking.into_dto()))),
        None => Err(AppError::NotFound("Booking not found".to_string())),
    }
}

/// Delete a booking.
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted booking", body = MessageDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.booking);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Booking not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Booking deleted successfully")),
    ))
}
