use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select,
};

use crate::server::model::booking::{Booking, BookingRecord, RoomOccupancy, PAYMENT_PENDING};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a booking with a pending payment status
    pub async fn create(&self, record: BookingRecord) -> Result<Booking, DbErr> {
        let booking = entity::booking::ActiveModel {
            name: ActiveValue::Set(record.name),
            email: ActiveValue::Set(record.email),
            phone: ActiveValue::Set(record.phone),
            package_type: ActiveValue::Set(record.package_type.as_str().to_string()),
            package_duration: ActiveValue::Set(record.package_duration),
            check_in: ActiveValue::Set(record.check_in),
            check_out: ActiveValue::Set(record.check_out),
            guest_count: ActiveValue::Set(record.guest_count),
            room_number: ActiveValue::Set(record.room_number),
            package_price: ActiveValue::Set(record.pricing.package_price),
            discount: ActiveValue::Set(record.pricing.discount),
            total_price: ActiveValue::Set(record.pricing.total_price),
            payment_status: ActiveValue::Set(PAYMENT_PENDING.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(booking))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(booking.map(Booking::from_entity))
    }

    /// Gets all bookings, newest first
    pub async fn get_all(&self) -> Result<Vec<Booking>, DbErr> {
        let bookings = entity::prelude::Booking::find()
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(bookings.into_iter().map(Booking::from_entity).collect())
    }

    /// Loads the occupancy snapshot of every booking
    pub async fn get_occupancies(&self) -> Result<Vec<RoomOccupancy>, DbErr> {
        let bookings = self.occupancy_query().all(self.db).await?;

        Ok(bookings.iter().map(RoomOccupancy::from_entity).collect())
    }

    /// Loads the occupancy snapshot of bookings overlapping `[check_in, check_out)`
    pub async fn get_occupancies_between(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<RoomOccupancy>, DbErr> {
        let bookings = self
            .occupancy_query()
            .filter(entity::booking::Column::CheckIn.lt(check_out))
            .filter(entity::booking::Column::CheckOut.gt(check_in))
            .all(self.db)
            .await?;

        Ok(bookings.iter().map(RoomOccupancy::from_entity).collect())
    }

    fn occupancy_query(&self) -> Select<entity::booking::Entity> {
        entity::prelude::Booking::find()
            .order_by_asc(entity::booking::Column::CheckIn)
            .order_by_asc(entity::booking::Column::RoomNumber)
    }

    /// Overwrites the guest, stay, room and price columns of a booking
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The updated booking
    /// - `Ok(None)` - No booking with that id
    pub async fn update(&self, id: i32, record: BookingRecord) -> Result<Option<Booking>, DbErr> {
        let Some(booking) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.name = ActiveValue::Set(record.name);
        active_model.email = ActiveValue::Set(record.email);
        active_model.phone = ActiveValue::Set(record.phone);
        active_model.package_type = ActiveValue::Set(record.package_type.as_str().to_string());
        active_model.package_duration = ActiveValue::Set(record.package_duration);
        active_model.check_in = ActiveValue::Set(record.check_in);
        active_model.check_out = ActiveValue::Set(record.check_out);
        active_model.guest_count = ActiveValue::Set(record.guest_count);
        active_model.room_number = ActiveValue::Set(record.room_number);
        active_model.package_price = ActiveValue::Set(record.pricing.package_price);
        active_model.discount = ActiveValue::Set(record.pricing.discount);
        active_model.total_price = ActiveValue::Set(record.pricing.total_price);

        let updated = active_model.update(self.db).await?;

        Ok(Some(Booking::from_entity(updated)))
    }

    /// Deletes a booking
    ///
    /// # Returns
    /// - `Ok(true)` - A booking was removed
    /// - `Ok(false)` - No booking with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
