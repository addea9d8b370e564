//! Fare calendar core for flight search.
//!
//! Derives a synthetic per-day fare series, lays it out as a navigable month
//! grid or a compact day strip, marks good deals, and runs single-date or
//! date-range selection, reporting every pick to the host through a
//! [`CalendarObserver`].
//!
//! # Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fare_calendar::{Fare, FareCalendar, SelectionMode};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//! let mut calendar = FareCalendar::builder()
//!     .mode(SelectionMode::Range)
//!     .today(today)
//!     .disable_before(today)
//!     .on_date_select(|date, fare: Fare| println!("{} -> {}", date, fare))
//!     .build()
//!     .unwrap();
//!
//! calendar.select(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
//! calendar.select(NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
//! assert_eq!(calendar.selection().to_string(), "2025-06-03..2025-06-10");
//! ```

pub mod config;
pub mod deals;
pub mod error;
pub mod fixtures;
pub mod generator;
pub mod grid;
pub mod models;
pub mod observer;
pub mod selection;

pub use config::CalendarOptions;
pub use deals::DealThreshold;
pub use error::{FareCalendarError, Result};
pub use fixtures::FixtureStore;
pub use generator::FareSeriesGenerator;
pub use models::{
    DateRange, DayCell, DayKind, Fare, FareEntry, FareSeries, FareSummary, MonthGrid, Selection,
    SelectionMark, SelectionMode,
};
pub use observer::{CalendarObserver, OnDateSelect, OnSelectionChange};
pub use selection::SelectionState;

use chrono::NaiveDate;
use std::fmt;
use std::rc::Rc;

use config::{Direction, WeekStart};

type DisabledPredicate = Box<dyn Fn(NaiveDate) -> bool>;

// ---------------------------------------------------------------------------
// FareCalendarBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`FareCalendar`].
///
/// Use [`FareCalendar::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](FareCalendarBuilder::build) to create the view.
#[derive(Default)]
pub struct FareCalendarBuilder {
    options: CalendarOptions,
    series: Option<Rc<FareSeries>>,
    disabled: Option<DisabledPredicate>,
    observers: Vec<Box<dyn CalendarObserver>>,
    today: Option<NaiveDate>,
}

impl FareCalendarBuilder {
    /// Replace all view options at once.
    pub fn options(mut self, options: CalendarOptions) -> Self {
        self.options = options;
        self
    }

    /// Single-date or range selection. Defaults to single.
    pub fn mode(mut self, mode: SelectionMode) -> Self {
        self.options.mode = mode;
        self
    }

    /// Number of months rendered side by side. Must be at least 1.
    pub fn months_visible(mut self, months: usize) -> Self {
        self.options.months_visible = months;
        self
    }

    /// Month to show first (any day in it). Also seeds the strip focus.
    pub fn initial_month(mut self, date: NaiveDate) -> Self {
        self.options.initial_month = Some(date);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.options.direction = direction;
        self
    }

    pub fn week_start(mut self, week_start: WeekStart) -> Self {
        self.options.week_start = week_start;
        self
    }

    /// Number of days in the compact strip. Must be at least 1.
    pub fn strip_width(mut self, width: usize) -> Self {
        self.options.strip_width = width;
        self
    }

    /// Use a caller-supplied series instead of generating one.
    pub fn series(mut self, series: FareSeries) -> Self {
        self.series = Some(Rc::new(series));
        self
    }

    /// Use a series shared with other views.
    pub fn shared_series(mut self, series: Rc<FareSeries>) -> Self {
        self.series = Some(series);
        self
    }

    /// Days for which `predicate` returns true cannot be selected.
    pub fn disabled<F>(mut self, predicate: F) -> Self
    where
        F: Fn(NaiveDate) -> bool + 'static,
    {
        self.disabled = Some(Box::new(predicate));
        self
    }

    /// Disable every day before `date`.
    pub fn disable_before(self, date: NaiveDate) -> Self {
        self.disabled(move |d| d < date)
    }

    pub fn observer<O: CalendarObserver + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn on_date_select<F>(self, f: F) -> Self
    where
        F: FnMut(NaiveDate, Fare) + 'static,
    {
        self.observer(OnDateSelect(f))
    }

    pub fn on_selection_change<F>(self, f: F) -> Self
    where
        F: FnMut(&Selection) + 'static,
    {
        self.observer(OnSelectionChange(f))
    }

    /// Override the current date. Defaults to the local date at build time.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Validate the options and build the view.
    ///
    /// Without a caller-supplied series, a 90-day series starting today is
    /// generated.
    pub fn build(self) -> Result<FareCalendar> {
        self.options.validate()?;

        let today = self
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let (series, generated) = resolve_series(self.series, today);
        let anchor = self.options.initial_month.unwrap_or(today);

        let mut calendar = FareCalendar {
            deals: DealThreshold::from_series(&series),
            selection: SelectionState::new(self.options.mode),
            options: self.options,
            series,
            generated,
            disabled: self.disabled,
            observers: self.observers,
            today,
            first_visible: grid::first_of_month(anchor),
            focus: anchor,
        };
        calendar.clamp_view();
        Ok(calendar)
    }
}

fn resolve_series(series: Option<Rc<FareSeries>>, today: NaiveDate) -> (Rc<FareSeries>, bool) {
    match series {
        Some(series) => (series, false),
        None => {
            log::debug!("No fare series supplied; generating from {}", today);
            (Rc::new(FareSeriesGenerator::generate_default(today)), true)
        }
    }
}

// ---------------------------------------------------------------------------
// FareCalendar
// ---------------------------------------------------------------------------

/// One calendar view over a fare series.
///
/// Owns its selection state and visible window. All operations are
/// synchronous and infallible; observers are notified before the triggering
/// call returns.
pub struct FareCalendar {
    options: CalendarOptions,
    series: Rc<FareSeries>,
    generated: bool,
    deals: DealThreshold,
    selection: SelectionState,
    disabled: Option<DisabledPredicate>,
    observers: Vec<Box<dyn CalendarObserver>>,
    today: NaiveDate,
    first_visible: NaiveDate,
    focus: NaiveDate,
}

/// Fares at the endpoints of the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedFares {
    pub first: Option<FareEntry>,
    pub second: Option<FareEntry>,
    /// Sum of both legs when every selected endpoint has a fare and the sum
    /// fits in a `u32`.
    pub total: Option<u32>,
}

impl FareCalendar {
    /// Create a new builder for configuring a calendar.
    pub fn builder() -> FareCalendarBuilder {
        FareCalendarBuilder::default()
    }

    // -- Series and pricing --------------------------------------------------

    pub fn series(&self) -> &FareSeries {
        &self.series
    }

    /// The active series as a shareable handle.
    pub fn shared_series(&self) -> Rc<FareSeries> {
        Rc::clone(&self.series)
    }

    /// True if the active series was generated rather than supplied.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Replace the active series; `None` falls back to a generated one.
    ///
    /// The deal threshold is recomputed and the visible window and strip focus
    /// are pulled back inside the new bounds. The selection is kept.
    pub fn set_series(&mut self, series: Option<Rc<FareSeries>>) {
        let (series, generated) = resolve_series(series, self.today);
        self.deals = DealThreshold::from_series(&series);
        self.series = series;
        self.generated = generated;
        self.clamp_view();
    }

    pub fn deal_threshold(&self) -> DealThreshold {
        self.deals
    }

    /// Fare for `date`; dates outside the series have no flights.
    pub fn fare(&self, date: NaiveDate) -> Fare {
        self.series.fare(date)
    }

    pub fn is_good_deal(&self, date: NaiveDate) -> bool {
        self.deals.is_good_deal(self.fare(date))
    }

    pub fn day_kind(&self, date: NaiveDate) -> DayKind {
        self.deals.classify(self.fare(date))
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.disabled.as_ref().is_some_and(|predicate| predicate(date))
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    // -- Selection -----------------------------------------------------------

    /// Register another observer.
    pub fn add_observer<O: CalendarObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Activate a day cell.
    ///
    /// Disabled days are ignored and `false` is returned. Otherwise
    /// `on_date_select` fires with the day's fare (possibly unavailable), the
    /// selection advances, and `on_selection_change` fires if a selection was
    /// committed.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        if self.is_disabled(date) {
            log::trace!("Ignoring activation of disabled day {}", date);
            return false;
        }

        let fare = self.fare(date);
        for observer in self.observers.iter_mut() {
            observer.on_date_select(date, fare);
        }

        if let Some(committed) = self.selection.activate(date) {
            for observer in self.observers.iter_mut() {
                observer.on_selection_change(&committed);
            }
        }
        true
    }

    /// The selection to render (the controlled value, if one is set).
    pub fn selection(&self) -> Selection {
        *self.selection.current()
    }

    /// Install or clear a host-controlled selection.
    ///
    /// Fails with [`FareCalendarError::InvalidArgument`] if the value does not
    /// match the calendar's mode or is an inverted range.
    pub fn set_controlled(&mut self, value: Option<Selection>) -> Result<()> {
        self.selection.set_controlled(value)
    }

    pub fn is_controlled(&self) -> bool {
        self.selection.is_controlled()
    }

    /// Reset the internally tracked selection without notifying observers.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Fares of the selected endpoints, summed as an outbound plus return quote.
    pub fn selected_fares(&self) -> SelectedFares {
        let (first, second) = self.selection().endpoints();
        let entry = |date: NaiveDate| FareEntry {
            date,
            fare: self.fare(date),
        };
        let first = first.map(entry);
        let second = second.map(entry);

        let total = match (first, second) {
            (Some(a), Some(b)) => a
                .fare
                .amount()
                .zip(b.fare.amount())
                .and_then(|(x, y)| x.checked_add(y)),
            (Some(a), None) => a.fare.amount(),
            _ => None,
        };

        SelectedFares {
            first,
            second,
            total,
        }
    }

    // -- Month grid ----------------------------------------------------------

    /// First day of each visible month.
    pub fn visible_months(&self) -> Vec<NaiveDate> {
        (0..self.options.months_visible as i32)
            .filter_map(|offset| grid::shift_months(self.first_visible, offset))
            .collect()
    }

    /// Laid-out grids for every visible month.
    pub fn months(&self) -> Vec<MonthGrid> {
        self.visible_months()
            .into_iter()
            .map(|month| {
                grid::build_month(
                    month,
                    self.options.week_start,
                    self.options.direction,
                    |date| self.day_cell(date),
                )
            })
            .collect()
    }

    /// Earliest and latest allowed first visible month.
    fn month_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let (first, last) = self.series.bounds()?;
        let earliest = grid::first_of_month(first);
        let trailing = self.options.months_visible as i32 - 1;
        let latest = grid::shift_months(last, -trailing)
            .unwrap_or(earliest)
            .max(earliest);
        Some((earliest, latest))
    }

    pub fn can_go_next_month(&self) -> bool {
        self.month_bounds()
            .is_some_and(|(_, latest)| self.first_visible < latest)
    }

    pub fn can_go_prev_month(&self) -> bool {
        self.month_bounds()
            .is_some_and(|(earliest, _)| self.first_visible > earliest)
    }

    /// Advance the grid by one month. Returns `false` (and changes nothing)
    /// once the last visible month reaches the end of the series.
    pub fn next_month(&mut self) -> bool {
        if !self.can_go_next_month() {
            return false;
        }
        self.move_window(1)
    }

    /// Move the grid back by one month. Returns `false` (and changes nothing)
    /// at the start of the series.
    pub fn prev_month(&mut self) -> bool {
        if !self.can_go_prev_month() {
            return false;
        }
        self.move_window(-1)
    }

    fn move_window(&mut self, months: i32) -> bool {
        let Some(month) = grid::shift_months(self.first_visible, months) else {
            return false;
        };
        self.first_visible = month;
        for observer in self.observers.iter_mut() {
            observer.on_visible_month_change(month);
        }
        true
    }

    // -- Day strip -----------------------------------------------------------

    /// Focused day of the compact strip.
    pub fn focus(&self) -> NaiveDate {
        self.focus
    }

    /// Move the strip focus forward one day, clamped to the series end.
    pub fn next_day(&mut self) -> bool {
        self.move_focus(self.focus.succ_opt())
    }

    /// Move the strip focus back one day, clamped to the series start.
    pub fn prev_day(&mut self) -> bool {
        self.move_focus(self.focus.pred_opt())
    }

    fn move_focus(&mut self, target: Option<NaiveDate>) -> bool {
        let in_bounds = |d: &NaiveDate| {
            self.series
                .bounds()
                .is_some_and(|(first, last)| first <= *d && *d <= last)
        };
        let Some(target) = target.filter(in_bounds) else {
            return false;
        };
        self.focus = target;
        for observer in self.observers.iter_mut() {
            observer.on_focus_change(target);
        }
        true
    }

    /// Cells of the compact strip around the focused day.
    pub fn day_strip(&self) -> Vec<DayCell> {
        grid::strip_dates(self.focus, self.options.strip_width, self.series.bounds())
            .into_iter()
            .map(|date| self.day_cell(date))
            .collect()
    }

    // -- Cells ---------------------------------------------------------------

    /// Render state of a single day.
    pub fn day_cell(&self, date: NaiveDate) -> DayCell {
        let fare = self.fare(date);
        DayCell {
            date,
            fare,
            kind: self.deals.classify(fare),
            disabled: self.is_disabled(date),
            mark: self.selection.current().mark(date),
            is_today: date == self.today,
        }
    }

    /// Pull the visible window and focus inside the series bounds.
    fn clamp_view(&mut self) {
        if let Some((earliest, latest)) = self.month_bounds() {
            self.first_visible = self.first_visible.clamp(earliest, latest);
        }
        if let Some((first, last)) = self.series.bounds() {
            self.focus = self.focus.clamp(first, last);
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for FareCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = match self.series.bounds() {
            Some((first, last)) => format!("{}..{}", first, last),
            None => "empty".to_string(),
        };
        write!(
            f,
            "FareCalendar(mode={}, series={}, generated={}, month={}, selection={})",
            self.options.mode,
            range,
            self.generated,
            self.first_visible.format("%Y-%m"),
            self.selection()
        )
    }
}
