use crate::server::{
    data::booking::BookingRepository,
    model::booking::{BookingRecord, PackageType, PricingResult},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_occupancies_between;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(check_in: NaiveDate, days: i32, room_number: i32) -> BookingRecord {
    BookingRecord {
        name: "Ada Lovelace".to_string(),
        email: Some("ada@example.com".to_string()),
        phone: "0771234567".to_string(),
        package_type: PackageType::Rejuvenation7,
        package_duration: days,
        check_in,
        check_out: check_in + chrono::Duration::days(days as i64),
        guest_count: 2,
        room_number,
        pricing: PricingResult {
            package_price: 950.0,
            total_price: 1710.0,
            discount: 190.0,
            season: "Season (7 days in season, 0 days off-season)".to_string(),
        },
    }
}
