//! Seasonal package pricing.
//!
//! The season runs from November through April inclusive; May through October is
//! off-season. A stay is priced at the season rate when more of its nights fall in
//! season than out of it.

use chrono::{Datelike, NaiveDate, Utc};
use std::collections::HashMap;

use crate::server::{
    error::booking::BookingError,
    model::booking::{PackageType, PricingResult},
};

/// Discount applied to the doubled base price of a two guest stay, in percent.
const TWO_GUEST_DISCOUNT_PERCENT: f64 = 10.0;

pub fn is_season_month(month: u32) -> bool {
    month >= 11 || month <= 4
}

/// Counts the nights of `[start, start + duration)` in and out of season.
///
/// # Returns
/// - `(season_days, off_season_days)`
pub fn season_tally(start: NaiveDate, duration: i32) -> (i32, i32) {
    start
        .iter_days()
        .take(duration.max(0) as usize)
        .fold((0, 0), |(season, off), day| {
            if is_season_month(day.month()) {
                (season + 1, off)
            } else {
                (season, off + 1)
            }
        })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalPrice {
    pub season: f64,
    pub off_season: f64,
}

/// Base package prices for one guest.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingTable {
    prices: HashMap<PackageType, SeasonalPrice>,
}

impl Default for PricingTable {
    fn default() -> Self {
        let prices = [
            (PackageType::Rejuvenation7, 950.0, 750.0),
            (PackageType::Wellness14, 1800.0, 1450.0),
            (PackageType::DetoxHealing21, 2500.0, 2100.0),
            (PackageType::WeekendRefresh, 450.0, 350.0),
            (PackageType::SeniorWellness, 1600.0, 1250.0),
        ]
        .into_iter()
        .map(|(package, season, off_season)| (package, SeasonalPrice { season, off_season }))
        .collect();

        Self { prices }
    }
}

impl PricingTable {
    pub fn price_of(&self, package: PackageType) -> Option<SeasonalPrice> {
        self.prices.get(&package).copied()
    }

    /// Quotes a stay, classifying the season against today's date when no check-in is given.
    pub fn calculate_pricing(
        &self,
        package: PackageType,
        duration: i32,
        guest_count: i32,
        check_in: Option<NaiveDate>,
    ) -> Result<PricingResult, BookingError> {
        self.calculate_pricing_on(
            package,
            duration,
            guest_count,
            check_in,
            Utc::now().date_naive(),
        )
    }

    /// Same as [`calculate_pricing`](Self::calculate_pricing) with an explicit reference day.
    pub fn calculate_pricing_on(
        &self,
        package: PackageType,
        duration: i32,
        guest_count: i32,
        check_in: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<PricingResult, BookingError> {
        let (in_season, season) = match check_in {
            Some(start) => {
                let (season_days, off_days) = season_tally(start, duration);
                if season_days > off_days {
                    (
                        true,
                        format!(
                            "Season ({} days in season, {} days off-season)",
                            season_days, off_days
                        ),
                    )
                } else {
                    (
                        false,
                        format!(
                            "Off-Season ({} days off-season, {} days in season)",
                            off_days, season_days
                        ),
                    )
                }
            }
            None if is_season_month(today.month()) => (true, "Season (Nov-Apr)".to_string()),
            None => (false, "Off-Season (May-Oct)".to_string()),
        };

        let price = self
            .price_of(package)
            .ok_or_else(|| BookingError::UnpricedPackage(package.to_string()))?;
        let package_price = if in_season {
            price.season
        } else {
            price.off_season
        };

        let (total_price, discount) = if guest_count == 2 {
            let doubled = package_price * 2.0;
            let discount = doubled * TWO_GUEST_DISCOUNT_PERCENT / 100.0;
            (doubled - discount, discount)
        } else {
            (package_price, 0.0)
        };

        Ok(PricingResult {
            package_price,
            total_price,
            discount,
            season,
        })
    }
}
