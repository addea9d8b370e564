//! Month grid and day strip layout.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::config::{Direction, WeekStart, MAX_STRIP_WIDTH};
use crate::models::{DayCell, MonthGrid};

// ---------------------------------------------------------------------------
// Month arithmetic
// ---------------------------------------------------------------------------

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    shift_months(first_of_month(date), 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// First day of the month `months` away from the month containing `date`.
pub fn shift_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let first = first_of_month(date);
    if months >= 0 {
        first.checked_add_months(Months::new(months as u32))
    } else {
        first.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

/// Column of `date` in a week row starting on `week_start`.
pub fn column_of(date: NaiveDate, week_start: WeekStart) -> usize {
    let day = date.weekday().num_days_from_monday() as usize;
    let start = week_start.weekday().num_days_from_monday() as usize;
    (7 + day - start) % 7
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Lay out the month containing `month` in week rows, building each cell with `cell`.
pub fn build_month<F>(
    month: NaiveDate,
    week_start: WeekStart,
    direction: Direction,
    cell: F,
) -> MonthGrid
where
    F: Fn(NaiveDate) -> DayCell,
{
    let first = first_of_month(month);
    let last = last_of_month(month);

    let mut weeks: Vec<[Option<DayCell>; 7]> = Vec::new();
    let mut row: [Option<DayCell>; 7] = [None; 7];
    let mut day = Some(first);

    while let Some(date) = day.filter(|d| *d <= last) {
        let col = column_of(date, week_start);
        row[col] = Some(cell(date));
        if col == 6 {
            weeks.push(row);
            row = [None; 7];
        }
        day = date.succ_opt();
    }
    if row.iter().any(Option::is_some) {
        weeks.push(row);
    }

    MonthGrid {
        month: first,
        direction,
        weeks,
    }
}

/// Dates of a `width`-day strip centred on `focus`, shifted to stay inside `bounds`.
///
/// When the bounds are narrower than `width`, the strip covers exactly the bounds.
/// `width` is capped at [`MAX_STRIP_WIDTH`].
pub fn strip_dates(
    focus: NaiveDate,
    width: usize,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Vec<NaiveDate> {
    let width = width.min(MAX_STRIP_WIDTH) as i64;
    let mut start = focus
        .checked_sub_signed(Duration::days(width / 2))
        .unwrap_or(focus);
    let mut len = width;

    if let Some((first, last)) = bounds {
        let span = (last - first).num_days() + 1;
        len = width.min(span);
        let latest_start = last
            .checked_sub_signed(Duration::days(len - 1))
            .unwrap_or(first);
        if start > latest_start {
            start = latest_start;
        }
        if start < first {
            start = first;
        }
    }

    (0..len)
        .map_while(|offset| start.checked_add_signed(Duration::days(offset)))
        .collect()
}
