//! Booking factory for creating test booking entities.
//!
//! Bookings are inserted as-is: the factory does not run availability checks, so
//! tests can set up any occupancy pattern, including deliberately conflicting ones.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db)
///     .room_number(4)
///     .stay(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 7)
///     .guest_count(2)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    package_type: String,
    package_duration: i32,
    check_in: NaiveDate,
    guest_count: i32,
    room_number: i32,
    package_price: f64,
    total_price: f64,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - package: `"7 Days Rejuvenation"` for 7 days, priced off-season (750)
    /// - check_in: 30 days from today
    /// - guest_count: `1`
    /// - room_number: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: "Test Guest".to_string(),
            package_type: "7 Days Rejuvenation".to_string(),
            package_duration: 7,
            check_in: Utc::now().date_naive() + Duration::days(30),
            guest_count: 1,
            room_number: 1,
            package_price: 750.0,
            total_price: 750.0,
        }
    }

    /// Sets the guest name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the package literal.
    pub fn package_type(mut self, package_type: impl Into<String>) -> Self {
        self.package_type = package_type.into();
        self
    }

    /// Sets check-in and duration; check-out is derived as `check_in + days`.
    pub fn stay(mut self, check_in: NaiveDate, days: i32) -> Self {
        self.check_in = check_in;
        self.package_duration = days;
        self
    }

    /// Sets the number of guests.
    pub fn guest_count(mut self, guest_count: i32) -> Self {
        self.guest_count = guest_count;
        self
    }

    /// Sets the assigned room.
    pub fn room_number(mut self, room_number: i32) -> Self {
        self.room_number = room_number;
        self
    }

    /// Sets the stored total price (package price is left untouched).
    pub fn total_price(mut self, total_price: f64) -> Self {
        self.total_price = total_price;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(None),
            phone: ActiveValue::Set("0771234567".to_string()),
            package_type: ActiveValue::Set(self.package_type),
            package_duration: ActiveValue::Set(self.package_duration),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(
                self.check_in + Duration::days(self.package_duration as i64),
            ),
            guest_count: ActiveValue::Set(self.guest_count),
            room_number: ActiveValue::Set(self.room_number),
            package_price: ActiveValue::Set(self.package_price),
            discount: ActiveValue::Set(0.0),
            total_price: ActiveValue::Set(self.total_price),
            payment_status: ActiveValue::Set("Pending".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values.
pub async fn create_booking(db: &DatabaseConnection) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db).build().await
}

/// Fills rooms `1..=room_count` for the same stay.
///
/// # Arguments
/// - `db` - Database connection
/// - `room_count` - Number of rooms to occupy, starting at room 1
/// - `check_in` - First night of every stay
/// - `days` - Length of every stay
///
/// # Returns
/// - `Ok(Vec<entity::booking::Model>)` - One booking per room, ascending room number
/// - `Err(DbErr)` - Database error during insert
pub async fn fill_rooms(
    db: &DatabaseConnection,
    room_count: i32,
    check_in: NaiveDate,
    days: i32,
) -> Result<Vec<entity::booking::Model>, DbErr> {
    let mut bookings = Vec::with_capacity(room_count as usize);
    for room in 1..=room_count {
        bookings.push(
            BookingFactory::new(db)
                .room_number(room)
                .stay(check_in, days)
                .build()
                .await?,
        );
    }
    Ok(bookings)
}
