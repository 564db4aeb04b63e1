//! Booking fixtures for creating in-memory test data.

use chrono::{NaiveDate, TimeZone, Utc};
use entity::booking;

/// Default test package literal.
pub const DEFAULT_PACKAGE: &str = "14 Days Wellness";

/// Default room number.
pub const DEFAULT_ROOM_NUMBER: i32 = 3;

/// Creates a booking entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - package: `"14 Days Wellness"`, 14 days from 2024-12-01, 2 guests
/// - room_number: `3`
/// - prices: 1800 package, 360 discount, 3240 total
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let booking = fixture::booking::entity();
/// assert_eq!(booking.room_number, 3);
/// ```
pub fn entity() -> booking::Model {
    let check_in = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
    booking::Model {
        id: 1,
        name: "Test Guest".to_string(),
        email: Some("guest@example.com".to_string()),
        phone: "0771234567".to_string(),
        package_type: DEFAULT_PACKAGE.to_string(),
        package_duration: 14,
        check_in,
        check_out: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
        guest_count: 2,
        room_number: DEFAULT_ROOM_NUMBER,
        package_price: 1800.0,
        discount: 360.0,
        total_price: 3240.0,
        payment_status: "Pending".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 11, 1, 9, 0, 0).unwrap(),
    }
}
