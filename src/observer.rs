//! Outbound notifications from a calendar view to its host.

use chrono::NaiveDate;

use crate::models::{Fare, Selection};

/// Receives calendar events. Every method defaults to a no-op, so hosts only
/// implement what they listen for.
///
/// All methods are invoked synchronously from the call that triggered them.
pub trait CalendarObserver {
    /// A selectable day was activated. `fare` may be [`Fare::Unavailable`].
    fn on_date_select(&mut self, _date: NaiveDate, _fare: Fare) {}

    /// The committed selection changed. In range mode this only fires once
    /// both endpoints are set.
    fn on_selection_change(&mut self, _selection: &Selection) {}

    /// The month grid moved; `first_month` is the first day of the first visible month.
    fn on_visible_month_change(&mut self, _first_month: NaiveDate) {}

    /// The focused day of the compact strip moved.
    fn on_focus_change(&mut self, _focus: NaiveDate) {}
}

/// Adapts a closure into a [`CalendarObserver::on_date_select`] listener.
pub struct OnDateSelect<F>(pub F);

impl<F: FnMut(NaiveDate, Fare)> CalendarObserver for OnDateSelect<F> {
    fn on_date_select(&mut self, date: NaiveDate, fare: Fare) {
        (self.0)(date, fare)
    }
}

/// Adapts a closure into a [`CalendarObserver::on_selection_change`] listener.
pub struct OnSelectionChange<F>(pub F);

impl<F: FnMut(&Selection)> CalendarObserver for OnSelectionChange<F> {
    fn on_selection_change(&mut self, selection: &Selection) {
        (self.0)(selection)
    }
}
