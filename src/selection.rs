//! Single-date and range selection state.
//!
//! Range mode cycles through three states with no terminal one:
//!
//! ```text
//! Empty --select(d)--> PartialFrom(d)
//! PartialFrom(a) --select(d)--> Complete(min(a, d), max(a, d))   commits
//! Complete --select(d)--> PartialFrom(d)                          discards the old range
//! ```

use chrono::NaiveDate;

use crate::error::{FareCalendarError, Result};
use crate::models::{DateRange, Selection, SelectionMode};

/// The selection that activating `date` produces from `current`.
pub fn next_selection(current: &Selection, date: NaiveDate) -> Selection {
    match current {
        Selection::Single { .. } => Selection::single(date),
        Selection::Range(range) => match (range.from, range.to) {
            (Some(from), None) => Selection::Range(DateRange::between(from, date)),
            _ => Selection::Range(DateRange::starting(date)),
        },
    }
}

/// Whether moving from `previous` to `next` commits a new selection.
fn commits(previous: &Selection, next: &Selection) -> bool {
    match next {
        Selection::Single { .. } => previous != next,
        Selection::Range(range) => range.is_complete(),
    }
}

// ---------------------------------------------------------------------------
// SelectionState
// ---------------------------------------------------------------------------

/// Selection owned by one calendar view.
///
/// When the host supplies a controlled value, [`current`](Self::current) echoes
/// it unchanged until the host replaces or clears it. Activations still advance
/// the internal state so a range can be completed across two clicks, and the
/// resulting commits are reported to the host to apply.
#[derive(Debug, Clone)]
pub struct SelectionState {
    mode: SelectionMode,
    internal: Selection,
    controlled: Option<Selection>,
}

impl SelectionState {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            internal: Selection::empty(mode),
            controlled: None,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// The selection to render.
    pub fn current(&self) -> &Selection {
        self.controlled.as_ref().unwrap_or(&self.internal)
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Install or clear a host-controlled selection.
    ///
    /// A new controlled value also becomes the base for the next activation,
    /// discarding any half-finished range.
    pub fn set_controlled(&mut self, value: Option<Selection>) -> Result<()> {
        if let Some(selection) = value {
            if selection.mode() != self.mode {
                return Err(FareCalendarError::InvalidArgument(format!(
                    "controlled selection is in {} mode but the calendar is in {} mode",
                    selection.mode(),
                    self.mode
                )));
            }
            if let Selection::Range(DateRange {
                from: Some(from),
                to: Some(to),
            }) = selection
            {
                if from > to {
                    return Err(FareCalendarError::InvalidArgument(format!(
                        "range start {} is after its end {}",
                        from, to
                    )));
                }
            }
            self.internal = selection;
        }
        self.controlled = value;
        Ok(())
    }

    /// Apply a day activation. Returns the committed selection, if any.
    pub fn activate(&mut self, date: NaiveDate) -> Option<Selection> {
        let base = match self.controlled {
            Some(controlled) if !self.internal.is_partial() => controlled,
            _ => self.internal,
        };
        let next = next_selection(&base, date);
        log::trace!("Selection {} -> {} on {}", base, next, date);

        self.internal = next;
        commits(&base, &next).then_some(next)
    }

    /// Reset the internally tracked selection. A controlled value is left alone.
    pub fn clear(&mut self) {
        self.internal = Selection::empty(self.mode);
    }
}
