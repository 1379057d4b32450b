//! Date range utilities
//!
//! Bounds are plain calendar dates pinned to UTC so that the set of selectable
//! years never depends on the local timezone of the caller.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Serialize, Deserialize};

use crate::navigation::YearBounds;
use crate::{GridError, Result};

/// A calendar date normalized to UTC midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateBound(NaiveDate);

impl DateBound {
    /// Create a date from calendar fields
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| GridError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// January 1st of `year`, if representable
    pub fn year_start(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1).map(Self)
    }

    /// Today's date in UTC
    pub fn today() -> Self {
        normalize_to_utc(&Utc::now())
    }

    /// Earliest date offered when the host supplies no lower bound
    pub fn min_date() -> Self {
        Self(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN))
    }

    /// Latest date offered when the host supplies no upper bound
    pub fn max_date() -> Self {
        Self(NaiveDate::from_ymd_opt(2100, 12, 31).unwrap_or(NaiveDate::MAX))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Move the date to `year`, keeping month and day where possible
    ///
    /// Feb 29 falls back to Feb 28 in non-leap years.
    pub fn with_year(&self, year: i32) -> Self {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, self.month(), 28))
            .map(Self)
            .unwrap_or(*self)
    }
}

impl From<NaiveDate> for DateBound {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateBound {
    type Err = GridError;

    /// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self(date));
        }
        DateTime::parse_from_rfc3339(s)
            .map(|dt| normalize_to_utc(&dt))
            .map_err(|_| GridError::InvalidDate(s.to_string()))
    }
}

/// Strip time-of-day and offset, keeping the UTC calendar date
pub fn normalize_to_utc<Tz: TimeZone>(date: &DateTime<Tz>) -> DateBound {
    DateBound(date.with_timezone(&Utc).date_naive())
}

/// The given date, or today in UTC
pub fn resolve_date(date: Option<DateBound>) -> DateBound {
    date.unwrap_or_else(DateBound::today)
}

/// Ordered, contiguous list of selectable years
///
/// Never empty: it can only be built from validated [`YearBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearList {
    bounds: YearBounds,
}

impl YearList {
    pub fn new(bounds: YearBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }

    pub fn first(&self) -> i32 {
        self.bounds.min()
    }

    pub fn last(&self) -> i32 {
        self.bounds.max()
    }

    pub fn len(&self) -> usize {
        self.bounds.span()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, year: i32) -> bool {
        self.bounds.contains(year)
    }

    /// Index of `year` within the list
    pub fn position(&self, year: i32) -> Option<usize> {
        self.contains(year)
            .then(|| (i64::from(year) - i64::from(self.first())) as usize)
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<i32> {
        self.first()..=self.last()
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }
}

impl IntoIterator for YearList {
    type Item = i32;
    type IntoIter = std::ops::RangeInclusive<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build the list of years between two bounds, inclusive
pub fn build_year_list(min: DateBound, max: DateBound) -> Result<YearList> {
    YearBounds::new(min.year(), max.year()).map(YearList::new)
}
