use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

use crate::model::api::validate_optional_email;

fn default_guest_count() -> i32 {
    1
}

#[derive(Serialize, Deserialize, Validate, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBookingDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    /// One of the package literals, e.g. `"14 Days Wellness"`.
    pub package_type: String,
    pub package_duration: i32,
    pub check_in: NaiveDate,
    #[serde(default = "default_guest_count")]
    pub guest_count: i32,
    /// Requested room; the lowest free room is assigned when omitted.
    pub room_number: Option<i32>,
}

#[derive(Serialize, Deserialize, Validate, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateBookingDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    pub package_type: String,
    pub package_duration: i32,
    pub check_in: NaiveDate,
    #[serde(default = "default_guest_count")]
    pub guest_count: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub package_type: String,
    pub package_duration: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_count: i32,
    pub room_number: i32,
    pub package_price: f64,
    pub discount: f64,
    pub total_price: f64,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CheckAvailabilityDto {
    pub check_in: NaiveDate,
    pub package_duration: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailabilityDto {
    pub available: bool,
    pub available_rooms: Vec<i32>,
    pub available_count: usize,
    pub total_rooms: i32,
    pub check_out: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailableRoomsDto {
    pub available_rooms: Vec<i32>,
    pub total_rooms: i32,
    pub available_count: usize,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UnavailableDatesDto {
    pub unavailable_dates: Vec<NaiveDate>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PricingDto {
    pub package_price: f64,
    pub total_price: f64,
    pub discount: f64,
    /// Human readable season tally, e.g. `"Season (14 days in season, 0 days off-season)"`.
    pub season: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomOccupancyDto {
    pub occupied: i32,
    pub available: i32,
    pub total: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingStatsDto {
    pub total_bookings: u64,
    /// Booking count per package literal.
    pub package_stats: BTreeMap<String, u64>,
    pub room_occupancy: RoomOccupancyDto,
    /// Bookings checking in during the current calendar month.
    pub monthly_bookings: u64,
    pub total_revenue: f64,
}
