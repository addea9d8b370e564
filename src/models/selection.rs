use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SelectionMode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Single => write!(f, "single"),
            SelectionMode::Range => write!(f, "range"),
        }
    }
}

// ---------------------------------------------------------------------------
// DateRange: Range-mode selection endpoints
// ---------------------------------------------------------------------------

/// Range selection. Whenever both endpoints are set, `from <= to`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// A complete range, with endpoints swapped if needed.
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            from: Some(a.min(b)),
            to: Some(a.max(b)),
        }
    }

    /// A range with only its start set.
    pub fn starting(from: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn is_partial(&self) -> bool {
        self.from.is_some() && self.to.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= date && date <= to,
            (Some(from), None) => from == date,
            _ => false,
        }
    }

    /// Number of nights between the endpoints of a complete range.
    pub fn nights(&self) -> Option<i64> {
        Some((self.to? - self.from?).num_days())
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Selection {
    Single { date: Option<NaiveDate> },
    Range(DateRange),
}

impl Selection {
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single { date: None },
            SelectionMode::Range => Selection::Range(DateRange::default()),
        }
    }

    pub fn single(date: NaiveDate) -> Self {
        Selection::Single { date: Some(date) }
    }

    pub fn range(from: NaiveDate, to: NaiveDate) -> Self {
        Selection::Range(DateRange::between(from, to))
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single { .. } => SelectionMode::Single,
            Selection::Range(_) => SelectionMode::Range,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single { date } => date.is_none(),
            Selection::Range(range) => range.is_empty(),
        }
    }

    /// True for a range with a start but no end yet.
    pub fn is_partial(&self) -> bool {
        matches!(self, Selection::Range(range) if range.is_partial())
    }

    /// The selected endpoints; a single selection only has a first one.
    pub fn endpoints(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match self {
            Selection::Single { date } => (*date, None),
            Selection::Range(range) => (range.from, range.to),
        }
    }

    /// How `date` should be highlighted under this selection.
    pub fn mark(&self, date: NaiveDate) -> SelectionMark {
        match self {
            Selection::Single { date: Some(selected) } if *selected == date => SelectionMark::Selected,
            Selection::Single { .. } => SelectionMark::None,
            Selection::Range(range) => match (range.from, range.to) {
                (Some(from), Some(to)) if from == date && to == date => SelectionMark::Selected,
                (Some(from), _) if from == date => SelectionMark::RangeStart,
                (_, Some(to)) if to == date => SelectionMark::RangeEnd,
                (Some(from), Some(to)) if from < date && date < to => SelectionMark::InRange,
                _ => SelectionMark::None,
            },
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show(date: Option<NaiveDate>) -> String {
            date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
        }
        match self {
            Selection::Single { date } => write!(f, "{}", show(*date)),
            Selection::Range(range) => write!(f, "{}..{}", show(range.from), show(range.to)),
        }
    }
}

// ---------------------------------------------------------------------------
// SelectionMark: Per-cell highlight
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMark {
    None,
    Selected,
    RangeStart,
    RangeEnd,
    InRange,
}
