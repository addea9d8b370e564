//! Shared fixtures for the fare calendar integration tests.
//!
//! Provides a date shorthand, a recording observer whose events stay readable
//! after it is moved into a calendar, and small hand-written fare series.

#![allow(dead_code)]

use chrono::NaiveDate;
use fare_calendar::{CalendarObserver, Fare, FareSeries, Selection};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Install a test logger once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ---------------------------------------------------------------------------
// Recording observer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    DateSelect(NaiveDate, Fare),
    SelectionChange(Selection),
    MonthChange(NaiveDate),
    FocusChange(NaiveDate),
}

/// Observer that appends every notification to a shared log.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn date_selects(&self) -> Vec<(NaiveDate, Fare)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::DateSelect(d, f) => Some((d, f)),
                _ => None,
            })
            .collect()
    }

    pub fn selection_changes(&self) -> Vec<Selection> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::SelectionChange(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl CalendarObserver for Recorder {
    fn on_date_select(&mut self, date: NaiveDate, fare: Fare) {
        self.events.borrow_mut().push(Event::DateSelect(date, fare));
    }

    fn on_selection_change(&mut self, selection: &Selection) {
        self.events
            .borrow_mut()
            .push(Event::SelectionChange(*selection));
    }

    fn on_visible_month_change(&mut self, first_month: NaiveDate) {
        self.events.borrow_mut().push(Event::MonthChange(first_month));
    }

    fn on_focus_change(&mut self, focus: NaiveDate) {
        self.events.borrow_mut().push(Event::FocusChange(focus));
    }
}

// ---------------------------------------------------------------------------
// Sample series
// ---------------------------------------------------------------------------

/// The two-day fixture used across the selection tests.
pub fn two_day_series() -> FareSeries {
    FareSeries::from_json_str(r#"{"2025-06-01": null, "2025-06-02": 8220}"#).unwrap()
}

/// Ten days in June 2025 with a known price spread.
///
/// Priced range is 5000..=15000, so the deal threshold is 8000.
pub fn spread_series() -> FareSeries {
    FareSeries::from_fares(vec![
        (date(2025, 6, 1), Fare::Available(5000)),
        (date(2025, 6, 2), Fare::Available(8000)),
        (date(2025, 6, 3), Fare::Available(8001)),
        (date(2025, 6, 4), Fare::Unavailable),
        (date(2025, 6, 5), Fare::Available(15000)),
        (date(2025, 6, 6), Fare::Available(12000)),
        (date(2025, 6, 7), Fare::Unavailable),
        (date(2025, 6, 8), Fare::Available(7000)),
        (date(2025, 6, 9), Fare::Available(9500)),
        (date(2025, 6, 10), Fare::Available(6400)),
    ])
    .unwrap()
}

/// Write `contents` to `<dir>/<name>.json`.
pub fn write_fixture(dir: &std::path::Path, name: &str, contents: &str) {
    let mut file = std::fs::File::create(dir.join(format!("{}.json", name))).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
}
