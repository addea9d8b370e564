use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FareCalendarError, Result};
use crate::models::SelectionMode;

// ---------------------------------------------------------------------------
// Synthetic fare formula
// ---------------------------------------------------------------------------

/// Seeds are reduced modulo this value.
pub const SEED_MODULUS: u32 = 100;
/// Weight of the zero-based month index in the seed.
pub const MONTH_SEED_STRIDE: u32 = 31;
/// Seeds below this cutoff have no flights (roughly 10% of days).
pub const UNAVAILABLE_SEED_CUTOFF: u32 = 10;

pub const VARIATION_FACTOR: u32 = 137;
pub const VARIATION_MODULUS: u32 = 9000;
pub const BASE_FARE: u32 = 6000;

/// Applied on Friday, Saturday and Sunday departures.
pub const WEEKEND_MULTIPLIER: f64 = 1.3;

/// Applied when `seed % 10` falls below [`DISCOUNT_SEED_CUTOFF`] (roughly 30% of priced days).
pub const DISCOUNT_MULTIPLIER: f64 = 0.8;
pub const DISCOUNT_SEED_CUTOFF: u32 = 3;

// ---------------------------------------------------------------------------
// Deal classification
// ---------------------------------------------------------------------------

/// A day is a good deal when its fare sits in the bottom 30% of the observed range.
pub const GOOD_DEAL_RATIO: f64 = 0.3;

// ---------------------------------------------------------------------------
// View defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_HORIZON_DAYS: i64 = 90;
pub const DEFAULT_MONTHS_VISIBLE: usize = 1;
pub const DEFAULT_STRIP_WIDTH: usize = 7;

/// Upper bound on `months_visible`.
pub const MAX_MONTHS_VISIBLE: usize = 12;
/// Upper bound on `strip_width`.
pub const MAX_STRIP_WIDTH: usize = 366;

/// Extension used for fare series fixture files.
pub const FIXTURE_EXTENSION: &str = "json";

pub fn fixture_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, FIXTURE_EXTENSION))
}

// ---------------------------------------------------------------------------
// CalendarOptions: Per-view configuration
// ---------------------------------------------------------------------------

/// Text direction of the host page. Only affects column order on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// First column of each week row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

/// Options for one calendar view.
///
/// Deserializes from camelCase JSON; missing fields take their defaults:
///
/// ```rust
/// use fare_calendar::config::CalendarOptions;
/// use fare_calendar::SelectionMode;
///
/// let opts = CalendarOptions::from_json_str(r#"{"mode": "range", "monthsVisible": 2}"#).unwrap();
/// assert_eq!(opts.mode, SelectionMode::Range);
/// assert_eq!(opts.strip_width, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarOptions {
    pub mode: SelectionMode,
    pub months_visible: usize,
    /// Month shown first; defaults to the month containing today.
    pub initial_month: Option<NaiveDate>,
    pub direction: Direction,
    pub week_start: WeekStart,
    /// Number of days in the compact single-row strip.
    pub strip_width: usize,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Single,
            months_visible: DEFAULT_MONTHS_VISIBLE,
            initial_month: None,
            direction: Direction::Ltr,
            week_start: WeekStart::Sunday,
            strip_width: DEFAULT_STRIP_WIDTH,
        }
    }
}

impl CalendarOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let opts: Self = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_MONTHS_VISIBLE).contains(&self.months_visible) {
            return Err(FareCalendarError::InvalidArgument(format!(
                "monthsVisible must be between 1 and {}, got {}",
                MAX_MONTHS_VISIBLE, self.months_visible
            )));
        }
        if !(1..=MAX_STRIP_WIDTH).contains(&self.strip_width) {
            return Err(FareCalendarError::InvalidArgument(format!(
                "stripWidth must be between 1 and {}, got {}",
                MAX_STRIP_WIDTH, self.strip_width
            )));
        }
        Ok(())
    }
}
