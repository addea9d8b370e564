use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Fare: Price for one departure day, or no flights at all
// ---------------------------------------------------------------------------

/// Fare for a single day in one implicit currency unit.
///
/// Serialized as a positive integer, or `null` when the day has no flights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum Fare {
    Available(u32),
    Unavailable,
}

impl Fare {
    pub fn amount(self) -> Option<u32> {
        match self {
            Fare::Available(amount) => Some(amount),
            Fare::Unavailable => None,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Fare::Available(_))
    }
}

impl From<Option<u32>> for Fare {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(amount) => Fare::Available(amount),
            None => Fare::Unavailable,
        }
    }
}

impl From<Fare> for Option<u32> {
    fn from(fare: Fare) -> Self {
        fare.amount()
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fare::Available(amount) => write!(f, "{}", amount),
            Fare::Unavailable => write!(f, "no flights available"),
        }
    }
}

// ---------------------------------------------------------------------------
// FareEntry: One day of a fare series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareEntry {
    pub date: NaiveDate,
    pub fare: Fare,
}
