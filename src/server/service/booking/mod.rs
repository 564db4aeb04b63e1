//! Booking orchestration over the availability and pricing engine.
//!
//! Room assignment is a fetch-decide-persist sequence. Create and update run it while
//! holding `BookingContext::write_lock`, so two requests in this process never pick
//! the same free room.

pub mod availability;
pub mod pricing;

use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::Mutex;

use crate::server::{
    data::booking::BookingRepository,
    error::{booking::BookingError, AppError},
    model::booking::{
        Availability, AvailableRooms, Booking, BookingRecord, BookingStats, CreateBookingParams,
        stay_end, PackageType, PricingResult, StayRequest, UpdateBookingParams,
        MAX_PACKAGE_DURATION,
    },
};

use self::{availability::AvailabilityEngine, pricing::PricingTable};

/// Engine configuration and the room assignment lock, shared through application state.
#[derive(Clone)]
pub struct BookingContext {
    pub availability: AvailabilityEngine,
    pub pricing: Arc<PricingTable>,
    write_lock: Arc<Mutex<()>>,
}

impl BookingContext {
    pub fn new(room_count: i32) -> Self {
        Self {
            availability: AvailabilityEngine::new(room_count),
            pricing: Arc::new(PricingTable::default()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// Rejects stays the spa cannot host regardless of occupancy.
fn validate_stay(stay: &StayRequest) -> Result<(), BookingError> {
    if !(1..=2).contains(&stay.guest_count) {
        return Err(BookingError::InvalidGuestCount(stay.guest_count));
    }
    validate_duration(stay.package_duration)?;
    let minimum = stay.package_type.minimum_duration();
    if stay.package_duration < minimum {
        return Err(BookingError::MinimumDurationNotMet {
            package: stay.package_type.to_string(),
            minimum,
        });
    }
    Ok(())
}

fn validate_duration(duration: i32) -> Result<(), BookingError> {
    if !(1..=MAX_PACKAGE_DURATION).contains(&duration) {
        return Err(BookingError::InvalidDuration(duration));
    }
    Ok(())
}

/// Aggregates dashboard figures relative to `today`.
pub fn compute_stats(bookings: &[Booking], room_count: i32, today: NaiveDate) -> BookingStats {
    let mut package_stats = BTreeMap::new();
    for booking in bookings {
        *package_stats.entry(booking.package_type.clone()).or_insert(0) += 1;
    }

    let occupied_rooms = bookings
        .iter()
        .filter(|b| b.check_in <= today && today < b.check_out)
        .map(|b| b.room_number)
        .collect::<std::collections::BTreeSet<_>>()
        .len() as i32;

    let monthly_bookings = bookings
        .iter()
        .filter(|b| b.check_in.year() == today.year() && b.check_in.month() == today.month())
        .count() as u64;

    BookingStats {
        total_bookings: bookings.len() as u64,
        package_stats,
        occupied_rooms: occupied_rooms.min(room_count),
        total_rooms: room_count,
        monthly_bookings,
        total_revenue: bookings.iter().map(|b| b.total_price).sum(),
    }
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    ctx: &'a BookingContext,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, ctx: &'a BookingContext) -> Self {
        Self { db, ctx }
    }

    /// Creates a booking, assigning the requested room or the lowest free one
    ///
    /// # Returns
    /// - `Ok(Booking)`: The stored booking with its room and price
    /// - `Err(AppError::BookingErr)`: Invalid stay, unpriced package or no free room
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        validate_stay(&params.stay)?;

        if let Some(room) = params.room_number {
            if !self.ctx.availability.contains_room(room) {
                return Err(BookingError::RoomOutOfRange {
                    room,
                    room_count: self.ctx.availability.room_count(),
                }
                .into());
            }
        }

        let check_in = params.stay.check_in;
        let check_out = params.stay.check_out()?;
        let pricing = self.quote_stay(&params.stay)?;

        let repo = BookingRepository::new(self.db);

        let _guard = self.ctx.write_lock.lock().await;
        let reservations = repo.get_occupancies_between(check_in, check_out).await?;

        let room_number = match params.room_number {
            Some(room) => {
                if !self
                    .ctx
                    .availability
                    .is_room_free(&reservations, room, check_in, check_out)
                {
                    tracing::debug!("Room {} is taken from {} to {}", room, check_in, check_out);
                    return Err(BookingError::RoomUnavailable(room).into());
                }
                room
            }
            None => self
                .ctx
                .availability
                .find_available_room(&reservations, check_in, check_out, None)
                .ok_or(BookingError::NoRoomAvailable)?,
        };

        let booking = repo
            .create(BookingRecord {
                name: params.name,
                email: params.email,
                phone: params.phone,
                package_type: params.stay.package_type,
                package_duration: params.stay.package_duration,
                check_in,
                check_out,
                guest_count: params.stay.guest_count,
                room_number,
                pricing,
            })
            .await?;

        tracing::info!(
            "Created booking {} in room {} from {} to {}",
            booking.id,
            booking.room_number,
            booking.check_in,
            booking.check_out
        );

        Ok(booking)
    }

    /// Updates a booking and reassigns its room for the new stay
    ///
    /// The booking's own reservation is ignored while searching, so it may keep its room.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))`: The updated booking
    /// - `Ok(None)`: No booking with that id
    pub async fn update(&self, params: UpdateBookingParams) -> Result<Option<Booking>, AppError> {
        validate_stay(&params.stay)?;

        let check_in = params.stay.check_in;
        let check_out = params.stay.check_out()?;
        let pricing = self.quote_stay(&params.stay)?;

        let repo = BookingRepository::new(self.db);

        let _guard = self.ctx.write_lock.lock().await;
        if repo.get_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        let reservations = repo.get_occupancies_between(check_in, check_out).await?;
        let room_number = self
            .ctx
            .availability
            .find_available_room(&reservations, check_in, check_out, Some(params.id))
            .ok_or(BookingError::NoRoomAvailable)?;

        let booking = repo
            .update(
                params.id,
                BookingRecord {
                    name: params.name,
                    email: params.email,
                    phone: params.phone,
                    package_type: params.stay.package_type,
                    package_duration: params.stay.package_duration,
                    check_in,
                    check_out,
                    guest_count: params.stay.guest_count,
                    room_number,
                    pricing,
                },
            )
            .await?;

        if let Some(booking) = &booking {
            tracing::info!("Updated booking {} (room {})", booking.id, booking.room_number);
        }

        Ok(booking)
    }

    /// Deletes a booking, returning whether it existed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = BookingRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted booking {}", id);
        }

        Ok(deleted)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, AppError> {
        let repo = BookingRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Booking>, AppError> {
        let repo = BookingRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Reports which rooms can host a stay starting on `check_in`
    pub async fn check_availability(
        &self,
        check_in: NaiveDate,
        package_duration: i32,
    ) -> Result<Availability, AppError> {
        let check_out = stay_end(check_in, package_duration)?;
        let rooms = self.available_rooms(check_in, check_out).await?;

        Ok(Availability {
            available_rooms: rooms.available_rooms,
            total_rooms: rooms.total_rooms,
            check_out,
        })
    }

    /// Lists free rooms for an explicit date range
    pub async fn available_rooms(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<AvailableRooms, AppError> {
        if check_out <= check_in {
            return Err(BookingError::InvalidDateRange.into());
        }

        let repo = BookingRepository::new(self.db);
        let reservations = repo.get_occupancies_between(check_in, check_out).await?;

        Ok(AvailableRooms {
            available_rooms: self
                .ctx
                .availability
                .list_available_rooms(&reservations, check_in, check_out),
            total_rooms: self.ctx.availability.room_count(),
        })
    }

    /// Check-in dates on which a stay of `package_duration` days cannot be placed
    pub async fn unavailable_dates(&self, package_duration: i32) -> Result<Vec<NaiveDate>, AppError> {
        validate_duration(package_duration)?;

        let repo = BookingRepository::new(self.db);
        let reservations = repo.get_occupancies().await?;

        Ok(self
            .ctx
            .availability
            .list_unavailable_dates(&reservations, package_duration)
            .into_iter()
            .collect())
    }

    /// Prices a stay without booking it
    pub fn quote(
        &self,
        package_type: &str,
        duration: i32,
        guest_count: i32,
        check_in: Option<NaiveDate>,
    ) -> Result<PricingResult, AppError> {
        let package: PackageType = package_type.parse()?;
        validate_duration(duration)?;

        Ok(self
            .ctx
            .pricing
            .calculate_pricing(package, duration, guest_count, check_in)?)
    }

    pub async fn stats(&self) -> Result<BookingStats, AppError> {
        let repo = BookingRepository::new(self.db);
        let bookings = repo.get_all().await?;

        Ok(compute_stats(
            &bookings,
            self.ctx.availability.room_count(),
            Utc::now().date_naive(),
        ))
    }

    fn quote_stay(&self, stay: &StayRequest) -> Result<PricingResult, BookingError> {
        self.ctx.pricing.calculate_pricing(
            stay.package_type,
            stay.package_duration,
            stay.guest_count,
            Some(stay.check_in),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory, fixture};

    fn stay(package_type: PackageType, package_duration: i32, guest_count: i32) -> StayRequest {
        StayRequest {
            package_type,
            package_duration,
            check_in: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            guest_count,
        }
    }

    #[test]
    fn accepts_one_or_two_guests() {
        assert!(validate_stay(&stay(PackageType::Wellness14, 14, 1)).is_ok());
        assert!(validate_stay(&stay(PackageType::Wellness14, 14, 2)).is_ok());
        assert_eq!(
            validate_stay(&stay(PackageType::Wellness14, 14, 3)),
            Err(BookingError::InvalidGuestCount(3))
        );
    }

    #[test]
    fn rejects_empty_stays() {
        assert_eq!(
            validate_stay(&stay(PackageType::WeekendRefresh, 0, 1)),
            Err(BookingError::InvalidDuration(0))
        );
    }

    #[test]
    fn couples_retreat_needs_five_days() {
        assert!(matches!(
            validate_stay(&stay(PackageType::CouplesRetreat, 4, 2)),
            Err(BookingError::MinimumDurationNotMet { minimum: 5, .. })
        ));
        assert!(validate_stay(&stay(PackageType::CouplesRetreat, 5, 2)).is_ok());
    }

    #[test]
    fn stats_count_current_occupancy_and_month() {
        let base = Booking::from_entity(fixture::booking::entity());
        let mut other = base.clone();
        other.id = 2;
        other.room_number = 7;
        other.package_type = "7 Days Rejuvenation".to_string();
        other.check_in = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
        other.check_out = NaiveDate::from_ymd_opt(2024, 11, 27).unwrap();
        other.total_price = 950.0;

        let today = NaiveDate::from_ymd_opt(2024, 12, 3).unwrap();
        let stats = compute_stats(&[base, other], 12, today);

        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.package_stats.get("14 Days Wellness"), Some(&1));
        assert_eq!(stats.package_stats.get("7 Days Rejuvenation"), Some(&1));
        assert_eq!(stats.occupied_rooms, 1);
        assert_eq!(stats.monthly_bookings, 1);
        assert_eq!(stats.total_revenue, 4190.0);

        let dto = stats.into_dto();
        assert_eq!(dto.room_occupancy.available, 11);
    }

    fn request(check_in: NaiveDate, room_number: Option<i32>) -> CreateBookingParams {
        CreateBookingParams {
            name: "Ada Guest".to_string(),
            email: None,
            phone: "0771234567".to_string(),
            stay: StayRequest {
                package_type: PackageType::Rejuvenation7,
                package_duration: 7,
                check_in,
                guest_count: 1,
            },
            room_number,
        }
    }

    #[tokio::test]
    async fn create_assigns_lowest_free_room() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let ctx = BookingContext::new(12);
        let check_in = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        factory::booking::BookingFactory::new(db)
            .room_number(1)
            .stay(check_in, 7)
            .build()
            .await?;

        let booking = BookingService::new(db, &ctx)
            .create(request(check_in, None))
            .await?;

        assert_eq!(booking.room_number, 2);
        assert_eq!(booking.check_out, NaiveDate::from_ymd_opt(2024, 7, 8).unwrap());
        assert_eq!(booking.package_price, 750.0);
        assert_eq!(booking.payment_status, "Pending");

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_taken_room() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let ctx = BookingContext::new(12);
        let check_in = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        factory::booking::BookingFactory::new(db)
            .room_number(5)
            .stay(check_in + Duration::days(3), 7)
            .build()
            .await?;

        let service = BookingService::new(db, &ctx);
        let taken = service.create(request(check_in, Some(5))).await;
        let out_of_range = service.create(request(check_in, Some(13))).await;

        assert!(matches!(
            taken,
            Err(AppError::BookingErr(BookingError::RoomUnavailable(5)))
        ));
        assert!(matches!(
            out_of_range,
            Err(AppError::BookingErr(BookingError::RoomOutOfRange { room: 13, .. }))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn create_fails_when_inventory_is_full() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let ctx = BookingContext::new(3);
        let check_in = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        factory::booking::fill_rooms(db, 3, check_in, 7).await?;

        let result = BookingService::new(db, &ctx)
            .create(request(check_in + Duration::days(6), None))
            .await;

        assert!(matches!(
            result,
            Err(AppError::BookingErr(BookingError::NoRoomAvailable))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_own_room_and_reprices() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let ctx = BookingContext::new(1);
        let check_in = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();

        let existing = factory::booking::BookingFactory::new(db)
            .room_number(1)
            .stay(check_in, 7)
            .build()
            .await?;

        let updated = BookingService::new(db, &ctx)
            .update(UpdateBookingParams {
                id: existing.id,
                name: "Ada Guest".to_string(),
                email: Some("ada@example.com".to_string()),
                phone: "0771234567".to_string(),
                stay: StayRequest {
                    package_type: PackageType::Wellness14,
                    package_duration: 14,
                    check_in,
                    guest_count: 2,
                },
            })
            .await?
            .unwrap();

        assert_eq!(updated.room_number, 1);
        assert_eq!(updated.total_price, 3240.0);
        assert_eq!(updated.discount, 360.0);
        assert_eq!(updated.check_out, NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());

        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_booking_returns_none() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let ctx = BookingContext::new(12);

        let result = BookingService::new(db, &ctx)
            .update(UpdateBookingParams {
                id: 99,
                name: "Nobody".to_string(),
                email: None,
                phone: "0".to_string(),
                stay: stay(PackageType::WeekendRefresh, 3, 1),
            })
            .await?;

        assert!(result.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn availability_reports_free_rooms() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let ctx = BookingContext::new(4);
        let check_in = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        factory::booking::fill_rooms(db, 2, check_in, 7).await?;

        let service = BookingService::new(db, &ctx);
        let availability = service.check_availability(check_in, 7).await?;
        let later = service
            .available_rooms(check_in + Duration::days(7), check_in + Duration::days(9))
            .await?;

        assert_eq!(availability.available_rooms, vec![3, 4]);
        assert_eq!(availability.check_out, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(later.available_rooms, vec![1, 2, 3, 4]);
        assert!(matches!(
            service.available_rooms(check_in, check_in).await,
            Err(AppError::BookingErr(BookingError::InvalidDateRange))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn unavailable_dates_cover_fully_booked_week() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let ctx = BookingContext::new(12);
        let check_in = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        factory::booking::fill_rooms(db, 12, check_in, 7).await?;

        let dates = BookingService::new(db, &ctx).unavailable_dates(7).await?;

        assert_eq!(dates.len(), 7);
        assert_eq!(dates.first(), Some(&check_in));
        assert_eq!(dates.last(), Some(&NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()));

        Ok(())
    }

    #[tokio::test]
    async fn quote_rejects_unknown_and_unpriced_packages() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let ctx = BookingContext::new(12);
        let service = BookingService::new(db, &ctx);

        assert!(matches!(
            service.quote("Moon Retreat", 7, 1, None),
            Err(AppError::BookingErr(BookingError::UnknownPackageType(_)))
        ));
        assert!(matches!(
            service.quote("Couple's Retreat (5–7 Days)", 5, 2, None),
            Err(AppError::BookingErr(BookingError::UnpricedPackage(_)))
        ));
    }

    #[test]
    fn rejects_stays_longer_than_a_year() {
        assert!(validate_stay(&stay(PackageType::DetoxHealing21, MAX_PACKAGE_DURATION, 1)).is_ok());
        assert_eq!(
            validate_stay(&stay(PackageType::DetoxHealing21, MAX_PACKAGE_DURATION + 1, 1)),
            Err(BookingError::InvalidDuration(MAX_PACKAGE_DURATION + 1))
        );
    }

    #[tokio::test]
    async fn oversized_durations_are_rejected_everywhere() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let ctx = BookingContext::new(12);
        let check_in = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();

        // A stored booking makes the unavailable-dates scan walk real candidates.
        factory::booking::BookingFactory::new(db)
            .stay(check_in, 7)
            .build()
            .await?;

        let service = BookingService::new(db, &ctx);
        let mut params = request(check_in, None);
        params.stay.package_duration = i32::MAX;

        assert!(matches!(
            service.create(params).await,
            Err(AppError::BookingErr(BookingError::InvalidDuration(i32::MAX)))
        ));
        assert!(matches!(
            service.check_availability(check_in, i32::MAX).await,
            Err(AppError::BookingErr(BookingError::InvalidDuration(i32::MAX)))
        ));
        assert!(matches!(
            service.unavailable_dates(i32::MAX).await,
            Err(AppError::BookingErr(BookingError::InvalidDuration(i32::MAX)))
        ));
        assert!(matches!(
            service.quote("7 Days Rejuvenation", i32::MAX, 1, Some(check_in)),
            Err(AppError::BookingErr(BookingError::InvalidDuration(i32::MAX)))
        ));

        Ok(())
    }
}
