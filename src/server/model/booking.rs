//! Booking domain models and parameters.
//!
//! Covers stored bookings, the occupancy view consumed by the availability engine,
//! the package catalogue and the derived pricing and availability results.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::{
    model::booking::{
        AvailabilityDto, AvailableRoomsDto, BookingDto, BookingStatsDto, CreateBookingDto,
        PricingDto, RoomOccupancyDto, UpdateBookingDto,
    },
    server::error::booking::BookingError,
};

/// Payment status assigned to every new booking.
pub const PAYMENT_PENDING: &str = "Pending";

/// Longest stay, in days, that can be booked, checked or quoted.
pub const MAX_PACKAGE_DURATION: i32 = 365;

/// End of a stay of `duration` days starting on `check_in`.
///
/// # Returns
/// - `Ok(NaiveDate)`: The exclusive check-out date
/// - `Err(BookingError::InvalidDuration)`: Duration outside `1..=MAX_PACKAGE_DURATION`
///   or past the end of the calendar
pub fn stay_end(check_in: NaiveDate, duration: i32) -> Result<NaiveDate, BookingError> {
    if !(1..=MAX_PACKAGE_DURATION).contains(&duration) {
        return Err(BookingError::InvalidDuration(duration));
    }
    check_in
        .checked_add_signed(Duration::days(duration as i64))
        .ok_or(BookingError::InvalidDuration(duration))
}

/// Wellness retreat packages offered by the spa.
///
/// Serialized as the exact literals shown to customers, e.g. `"14 Days Wellness"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageType {
    Rejuvenation7,
    Wellness14,
    DetoxHealing21,
    WeekendRefresh,
    SeniorWellness,
    CouplesRetreat,
}

impl PackageType {
    pub const ALL: [PackageType; 6] = [
        Self::Rejuvenation7,
        Self::Wellness14,
        Self::DetoxHealing21,
        Self::WeekendRefresh,
        Self::SeniorWellness,
        Self::CouplesRetreat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rejuvenation7 => "7 Days Rejuvenation",
            Self::Wellness14 => "14 Days Wellness",
            Self::DetoxHealing21 => "21 Days Detox & Healing",
            Self::WeekendRefresh => "Weekend Refresh (3 Days)",
            Self::SeniorWellness => "Senior Wellness (10 Days)",
            Self::CouplesRetreat => "Couple's Retreat (5–7 Days)",
        }
    }

    /// Shortest stay in days the package can be booked for.
    pub fn minimum_duration(&self) -> i32 {
        match self {
            Self::CouplesRetreat => 5,
            _ => 1,
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageType {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|package| package.as_str() == s)
            .ok_or_else(|| BookingError::UnknownPackageType(s.to_string()))
    }
}

/// A stored booking.
///
/// `package_type` keeps the stored literal rather than a parsed `PackageType` so rows
/// written before a package was retired still load.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
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

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            package_type: entity.package_type,
            package_duration: entity.package_duration,
            check_in: entity.check_in,
            check_out: entity.check_out,
            guest_count: entity.guest_count,
            room_number: entity.room_number,
            package_price: entity.package_price,
            discount: entity.discount,
            total_price: entity.total_price,
            payment_status: entity.payment_status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            package_type: self.package_type,
            package_duration: self.package_duration,
            check_in: self.check_in,
            check_out: self.check_out,
            guest_count: self.guest_count,
            room_number: self.room_number,
            package_price: self.package_price,
            discount: self.discount,
            total_price: self.total_price,
            payment_status: self.payment_status,
            created_at: self.created_at,
        }
    }

    pub fn occupancy(&self) -> RoomOccupancy {
        RoomOccupancy {
            booking_id: self.id,
            room_number: self.room_number,
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }
}

/// The slice of a booking the availability engine works on.
///
/// The room is held for the half-open interval `[check_in, check_out)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomOccupancy {
    pub booking_id: i32,
    pub room_number: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl RoomOccupancy {
    pub fn from_entity(entity: &entity::booking::Model) -> Self {
        Self {
            booking_id: entity.id,
            room_number: entity.room_number,
            check_in: entity.check_in,
            check_out: entity.check_out,
        }
    }
}

/// Requested stay shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct StayRequest {
    pub package_type: PackageType,
    pub package_duration: i32,
    pub check_in: NaiveDate,
    pub guest_count: i32,
}

impl StayRequest {
    /// Check-out is always derived from the package duration.
    pub fn check_out(&self) -> Result<NaiveDate, BookingError> {
        stay_end(self.check_in, self.package_duration)
    }
}

/// Parameters for creating a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookingParams {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub stay: StayRequest,
    /// Explicit room choice; `None` lets the engine assign the lowest free room.
    pub room_number: Option<i32>,
}

impl CreateBookingParams {
    /// Converts the request DTO, rejecting unknown package literals.
    pub fn try_from_dto(dto: CreateBookingDto) -> Result<Self, BookingError> {
        Ok(Self {
            name: dto.name.trim().to_string(),
            email: normalize_email(dto.email),
            phone: dto.phone.trim().to_string(),
            stay: StayRequest {
                package_type: dto.package_type.parse()?,
                package_duration: dto.package_duration,
                check_in: dto.check_in,
                guest_count: dto.guest_count,
            },
            room_number: dto.room_number,
        })
    }
}

/// Parameters for updating a booking. The room is reassigned by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBookingParams {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub stay: StayRequest,
}

impl UpdateBookingParams {
    pub fn try_from_dto(id: i32, dto: UpdateBookingDto) -> Result<Self, BookingError> {
        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            email: normalize_email(dto.email),
            phone: dto.phone.trim().to_string(),
            stay: StayRequest {
                package_type: dto.package_type.parse()?,
                package_duration: dto.package_duration,
                check_in: dto.check_in,
                guest_count: dto.guest_count,
            },
        })
    }
}

fn normalize_email(email: Option<String>) -> Option<String> {
    email
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
}

/// Fully resolved row written by the repository on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub package_type: PackageType,
    pub package_duration: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_count: i32,
    pub room_number: i32,
    pub pricing: PricingResult,
}

/// Price quote for a stay.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    pub package_price: f64,
    pub total_price: f64,
    pub discount: f64,
    /// Human readable season label.
    pub season: String,
}

impl PricingResult {
    pub fn into_dto(self) -> PricingDto {
        PricingDto {
            package_price: self.package_price,
            total_price: self.total_price,
            discount: self.discount,
            season: self.season,
        }
    }
}

/// Availability of a stay identified by check-in and duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    pub available_rooms: Vec<i32>,
    pub total_rooms: i32,
    pub check_out: NaiveDate,
}

impl Availability {
    pub fn into_dto(self) -> AvailabilityDto {
        AvailabilityDto {
            available: !self.available_rooms.is_empty(),
            available_count: self.available_rooms.len(),
            available_rooms: self.available_rooms,
            total_rooms: self.total_rooms,
            check_out: self.check_out,
        }
    }
}

/// Free rooms for an explicit date range.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailableRooms {
    pub available_rooms: Vec<i32>,
    pub total_rooms: i32,
}

impl AvailableRooms {
    pub fn into_dto(self) -> AvailableRoomsDto {
        AvailableRoomsDto {
            available_count: self.available_rooms.len(),
            available_rooms: self.available_rooms,
            total_rooms: self.total_rooms,
        }
    }
}

/// Dashboard figures over all bookings.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingStats {
    pub total_bookings: u64,
    pub package_stats: BTreeMap<String, u64>,
    /// Rooms holding a guest on the reference day.
    pub occupied_rooms: i32,
    pub total_rooms: i32,
    pub monthly_bookings: u64,
    pub total_revenue: f64,
}

impl BookingStats {
    pub fn into_dto(self) -> BookingStatsDto {
        BookingStatsDto {
            total_bookings: self.total_bookings,
            package_stats: self.package_stats,
            room_occupancy: RoomOccupancyDto {
                occupied: self.occupied_rooms,
                available: self.total_rooms - self.occupied_rooms,
                total: self.total_rooms,
            },
            monthly_bookings: self.monthly_bookings,
            total_revenue: self.total_revenue,
        }
    }
}
