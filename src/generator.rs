//! Deterministic synthetic fares.
//!
//! Every fare is derived from the calendar fields of its own date, so the same
//! date always yields the same fare regardless of where the series starts or
//! how many times it is generated.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;

use crate::config::{
    BASE_FARE, DEFAULT_HORIZON_DAYS, DISCOUNT_MULTIPLIER, DISCOUNT_SEED_CUTOFF, MONTH_SEED_STRIDE,
    SEED_MODULUS, UNAVAILABLE_SEED_CUTOFF, VARIATION_FACTOR, VARIATION_MODULUS, WEEKEND_MULTIPLIER,
};
use crate::models::{Fare, FareSeries};

/// Derives synthetic per-day fares over a date range.
pub struct FareSeriesGenerator;

impl FareSeriesGenerator {
    /// `(day_of_month + month_index * 31) % 100`, with a zero-based month index.
    pub fn seed(date: NaiveDate) -> u32 {
        (date.day() + date.month0() * MONTH_SEED_STRIDE) % SEED_MODULUS
    }

    /// Friday, Saturday and Sunday departures carry the weekend multiplier.
    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun)
    }

    /// Base fare before the weekend and discount multipliers, in `[6000, 14999]`.
    ///
    /// Returns `None` for days without flights.
    pub fn base_fare(date: NaiveDate) -> Option<u32> {
        let seed = Self::seed(date);
        if seed < UNAVAILABLE_SEED_CUTOFF {
            return None;
        }
        Some(BASE_FARE + (seed * VARIATION_FACTOR) % VARIATION_MODULUS)
    }

    /// Fare for a single date.
    pub fn fare_for(date: NaiveDate) -> Fare {
        let base = match Self::base_fare(date) {
            Some(base) => base,
            None => return Fare::Unavailable,
        };

        let weekend = if Self::is_weekend(date) {
            WEEKEND_MULTIPLIER
        } else {
            1.0
        };
        let discount = if Self::seed(date) % 10 < DISCOUNT_SEED_CUTOFF {
            DISCOUNT_MULTIPLIER
        } else {
            1.0
        };

        Fare::Available((base as f64 * weekend * discount).round() as u32)
    }

    /// Generate fares for every day in `[start, start + horizon_days]`.
    ///
    /// The range is inclusive, so a horizon of `n` yields `n + 1` entries. A
    /// negative horizon yields an empty series.
    pub fn generate(start: NaiveDate, horizon_days: i64) -> FareSeries {
        let mut fares = BTreeMap::new();
        let mut day = Some(start);

        for _ in 0..=horizon_days {
            let Some(date) = day else { break };
            fares.insert(date, Self::fare_for(date));
            day = date.succ_opt();
        }

        log::debug!(
            "Generated {} synthetic fares from {} (horizon {} days)",
            fares.len(),
            start,
            horizon_days
        );
        FareSeries::from_generated(fares)
    }

    /// Generate the default 90-day horizon starting at `today`.
    pub fn generate_default(today: NaiveDate) -> FareSeries {
        Self::generate(today, DEFAULT_HORIZON_DAYS)
    }
}
