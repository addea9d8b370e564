use chrono::NaiveDate;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::fare::{Fare, FareEntry};
use crate::error::{FareCalendarError, Result};

// ---------------------------------------------------------------------------
// FareSeries: Date-ordered fares over a calendar horizon
// ---------------------------------------------------------------------------

/// Immutable date-to-fare mapping backing a calendar view.
///
/// The JSON form is an object keyed by ISO `YYYY-MM-DD` dates whose values are
/// positive integers or `null`:
///
/// ```rust
/// use fare_calendar::FareSeries;
///
/// let series = FareSeries::from_json_str(r#"{"2025-06-01": null, "2025-06-02": 8220}"#).unwrap();
/// assert_eq!(series.len(), 2);
/// ```
///
/// Each date appears at most once, including in JSON input. A supplied series
/// may skip days; dates inside the bounds without an entry read as
/// [`Fare::Unavailable`], the same as dates outside them. Generated series are
/// always contiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "BTreeMap<NaiveDate, Fare>")]
pub struct FareSeries {
    fares: BTreeMap<NaiveDate, Fare>,
}

impl FareSeries {
    /// Build a series from caller-supplied fares.
    ///
    /// Fails with [`FareCalendarError::InvalidSeries`] if a date appears twice
    /// or a fare is zero.
    pub fn from_fares<I>(fares: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NaiveDate, Fare)>,
    {
        let mut map = BTreeMap::new();
        for (date, fare) in fares {
            insert_unique(&mut map, date, fare)?;
        }
        Self::try_from(map)
    }

    /// Parse a series from its JSON object form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the series to its JSON object form.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Generator output is valid by construction and skips validation.
    pub(crate) fn from_generated(fares: BTreeMap<NaiveDate, Fare>) -> Self {
        Self { fares }
    }

    /// Fare for `date`; dates outside the series have no flights.
    pub fn fare(&self, date: NaiveDate) -> Fare {
        self.get(date).unwrap_or(Fare::Unavailable)
    }

    /// Fare for `date`, or `None` if the series does not cover it.
    pub fn get(&self, date: NaiveDate) -> Option<Fare> {
        self.fares.get(&date).copied()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.fares.contains_key(&date)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.fares.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.fares.keys().next_back().copied()
    }

    /// Inclusive `(first, last)` dates, or `None` for an empty series.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.first_date()?, self.last_date()?))
    }

    pub fn len(&self) -> usize {
        self.fares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fares.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FareEntry> + '_ {
        self.fares
            .iter()
            .map(|(&date, &fare)| FareEntry { date, fare })
    }

    /// All priced amounts, in date order.
    pub fn available_fares(&self) -> impl Iterator<Item = u32> + '_ {
        self.fares.values().filter_map(|fare| fare.amount())
    }

    /// True when every day between the first and last date has exactly one entry.
    pub fn is_contiguous(&self) -> bool {
        match self.bounds() {
            Some((first, last)) => (last - first).num_days() + 1 == self.fares.len() as i64,
            None => true,
        }
    }

    /// Aggregate statistics over the series.
    pub fn summary(&self) -> FareSummary {
        let priced: Vec<u32> = self.available_fares().collect();
        let avg_fare = if priced.is_empty() {
            None
        } else {
            Some(priced.iter().map(|&f| f as f64).sum::<f64>() / priced.len() as f64)
        };

        FareSummary {
            min_fare: priced.iter().min().copied(),
            max_fare: priced.iter().max().copied(),
            avg_fare,
            first_date: self.first_date(),
            last_date: self.last_date(),
            priced_days: priced.len(),
            unavailable_days: self.fares.len() - priced.len(),
        }
    }

    /// The `limit` cheapest priced days, ordered by ascending fare then date.
    pub fn cheapest(&self, limit: usize) -> Vec<FareEntry> {
        let mut priced: Vec<FareEntry> = self.iter().filter(|e| e.fare.is_available()).collect();
        priced.sort_by_key(|e| (e.fare.amount(), e.date));
        priced.truncate(limit);
        priced
    }
}

impl TryFrom<BTreeMap<NaiveDate, Fare>> for FareSeries {
    type Error = FareCalendarError;

    fn try_from(fares: BTreeMap<NaiveDate, Fare>) -> Result<Self> {
        if let Some((date, _)) = fares.iter().find(|(_, fare)| **fare == Fare::Available(0)) {
            return Err(FareCalendarError::InvalidSeries(format!(
                "fare for {} must be positive",
                date
            )));
        }
        Ok(Self { fares })
    }
}

impl From<FareSeries> for BTreeMap<NaiveDate, Fare> {
    fn from(series: FareSeries) -> Self {
        series.fares
    }
}

fn insert_unique(fares: &mut BTreeMap<NaiveDate, Fare>, date: NaiveDate, fare: Fare) -> Result<()> {
    if fares.insert(date, fare).is_some() {
        return Err(FareCalendarError::InvalidSeries(format!(
            "duplicate fare for {}",
            date
        )));
    }
    Ok(())
}

// Decoded entry by entry so a repeated date key is an error instead of
// silently overwriting the earlier fare.
impl<'de> Deserialize<'de> for FareSeries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FareSeriesVisitor)
    }
}

struct FareSeriesVisitor;

impl<'de> Visitor<'de> for FareSeriesVisitor {
    type Value = FareSeries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping ISO dates to fares")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<FareSeries, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut fares = BTreeMap::new();
        while let Some((date, fare)) = access.next_entry::<NaiveDate, Fare>()? {
            insert_unique(&mut fares, date, fare).map_err(de::Error::custom)?;
        }
        FareSeries::try_from(fares).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// FareSummary: Aggregated statistics for a series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FareSummary {
    pub min_fare: Option<u32>,
    pub max_fare: Option<u32>,
    pub avg_fare: Option<f64>,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub priced_days: usize,
    pub unavailable_days: usize,
}
