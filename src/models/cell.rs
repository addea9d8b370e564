use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::fare::Fare;
use super::selection::SelectionMark;
use crate::config::Direction;

// ---------------------------------------------------------------------------
// DayKind: Price classification of a day
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// No flights; rendered as a neutral placeholder.
    Unavailable,
    Normal,
    GoodDeal,
}

// ---------------------------------------------------------------------------
// DayCell: One rendered day
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub fare: Fare,
    pub kind: DayKind,
    pub disabled: bool,
    pub mark: SelectionMark,
    pub is_today: bool,
}

impl DayCell {
    pub fn is_selectable(&self) -> bool {
        !self.disabled
    }
}

// ---------------------------------------------------------------------------
// MonthGrid: Week rows for one month
// ---------------------------------------------------------------------------

/// A month laid out in week rows of seven columns, in logical (left-to-right)
/// order starting from the configured first weekday. Columns outside the month
/// are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    /// First day of the month.
    pub month: NaiveDate,
    pub direction: Direction,
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

impl MonthGrid {
    pub fn year(&self) -> i32 {
        self.month.year()
    }

    /// Month number, 1 through 12.
    pub fn month_number(&self) -> u32 {
        self.month.month()
    }

    /// Every day cell of the month in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.iter().flatten())
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days().find(|cell| cell.date == date)
    }

    /// Week rows in on-screen column order; right-to-left layouts mirror each row.
    pub fn display_weeks(&self) -> Vec<[Option<DayCell>; 7]> {
        self.weeks
            .iter()
            .map(|week| {
                let mut row = *week;
                if self.direction == Direction::Rtl {
                    row.reverse();
                }
                row
            })
            .collect()
    }
}
