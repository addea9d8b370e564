//! Good-deal classification against the active fare series.

use crate::config::GOOD_DEAL_RATIO;
use crate::models::{DayKind, Fare, FareSeries};

/// Price band derived from a series: `threshold = min + (max - min) * 0.3`.
///
/// Unavailable days are excluded from `min` and `max`. A series with no priced
/// days yields all zeros and classifies nothing as a deal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DealThreshold {
    pub min: u32,
    pub max: u32,
    pub threshold: f64,
}

impl DealThreshold {
    pub fn from_series(series: &FareSeries) -> Self {
        let mut priced = series.available_fares().peekable();
        if priced.peek().is_none() {
            return Self::default();
        }

        let (min, max) = priced.fold((u32::MAX, u32::MIN), |(lo, hi), fare| {
            (lo.min(fare), hi.max(fare))
        });
        Self {
            min,
            max,
            threshold: min as f64 + (max - min) as f64 * GOOD_DEAL_RATIO,
        }
    }

    /// True if at least one priced day contributed to the band.
    pub fn has_fares(&self) -> bool {
        self.max > 0
    }

    pub fn is_good_deal(&self, fare: Fare) -> bool {
        match fare {
            Fare::Available(amount) => self.has_fares() && amount as f64 <= self.threshold,
            Fare::Unavailable => false,
        }
    }

    pub fn classify(&self, fare: Fare) -> DayKind {
        match fare {
            Fare::Unavailable => DayKind::Unavailable,
            _ if self.is_good_deal(fare) => DayKind::GoodDeal,
            Fare::Available(_) => DayKind::Normal,
        }
    }
}
