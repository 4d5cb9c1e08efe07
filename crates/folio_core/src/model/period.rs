//! Calendar periods attached to catalog items.
//!
//! # Responsibility
//! - Parse and render the `YYYY-MM` / `present` textual keys.
//! - Validate start/end ordering for concrete spans.
//!
//! # Invariants
//! - `YearMonth` ordering is calendar ordering, which matches lexicographic
//!   ordering of the zero-padded `YYYY-MM` form.
//! - `PeriodEnd::Present` is later than any concrete month.
//! - A `PeriodSpan` never has a concrete `end` earlier than `start`.

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Textual sentinel for an ongoing period.
pub const PRESENT_KEY: &str = "present";

static YEAR_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("valid year-month regex"));

/// Period parse and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// Key is not shaped like `YYYY-MM`.
    MalformedKey(String),
    /// Month component outside `01..=12`.
    MonthOutOfRange(u8),
    /// Concrete end precedes start.
    ReversedSpan { start: YearMonth, end: YearMonth },
}

impl Display for PeriodError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedKey(value) => {
                write!(f, "period key `{value}` is not in YYYY-MM form")
            }
            Self::MonthOutOfRange(month) => write!(f, "month {month} is outside 1..=12"),
            Self::ReversedSpan { start, end } => {
                write!(f, "period end ({end}) must be >= start ({start})")
            }
        }
    }
}

impl Error for PeriodError {}

/// Calendar year-month, the sortable key of a period boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: u16,
    month: u8,
}

impl YearMonth {
    /// Creates a year-month after checking the month range.
    pub fn new(year: u16, month: u8) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Truncates any chrono date to its year-month.
    pub fn from_date(date: &impl Datelike) -> Self {
        Self {
            year: u16::try_from(date.year()).unwrap_or(0),
            month: date.month() as u8,
        }
    }

    pub fn year(self) -> u16 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }

    /// Year label used for timeline markers (`2024`).
    pub fn year_label(self) -> String {
        format!("{:04}", self.year)
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = PeriodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let captures = YEAR_MONTH_RE
            .captures(value)
            .ok_or_else(|| PeriodError::MalformedKey(value.to_string()))?;
        let year = captures[1]
            .parse::<u16>()
            .map_err(|_| PeriodError::MalformedKey(value.to_string()))?;
        let month = captures[2]
            .parse::<u8>()
            .map_err(|_| PeriodError::MalformedKey(value.to_string()))?;
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// End boundary of a period: a concrete month or the ongoing sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodEnd {
    Date(YearMonth),
    Present,
}

impl PeriodEnd {
    /// Resolves `Present` against the caller-supplied current month.
    pub fn resolve(self, now: YearMonth) -> YearMonth {
        match self {
            Self::Date(value) => value,
            Self::Present => now,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

impl Ord for PeriodEnd {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Present, Self::Present) => Ordering::Equal,
            (Self::Present, Self::Date(_)) => Ordering::Greater,
            (Self::Date(_), Self::Present) => Ordering::Less,
            (Self::Date(left), Self::Date(right)) => left.cmp(right),
        }
    }
}

impl PartialOrd for PeriodEnd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for PeriodEnd {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(value) => write!(f, "{value}"),
            Self::Present => f.write_str(PRESENT_KEY),
        }
    }
}

impl FromStr for PeriodEnd {
    type Err = PeriodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == PRESENT_KEY {
            return Ok(Self::Present);
        }
        value.parse().map(Self::Date)
    }
}

impl Serialize for PeriodEnd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PeriodEnd {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Sortable start/end pair for chronologically ordered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriodSpan")]
pub struct PeriodSpan {
    start: YearMonth,
    end: PeriodEnd,
}

#[derive(Deserialize)]
struct RawPeriodSpan {
    start: YearMonth,
    end: PeriodEnd,
}

impl TryFrom<RawPeriodSpan> for PeriodSpan {
    type Error = PeriodError;

    fn try_from(value: RawPeriodSpan) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end)
    }
}

impl PeriodSpan {
    /// Creates a span, rejecting a concrete end earlier than `start`.
    pub fn new(start: YearMonth, end: PeriodEnd) -> Result<Self, PeriodError> {
        if let PeriodEnd::Date(end_date) = end {
            if end_date < start {
                return Err(PeriodError::ReversedSpan {
                    start,
                    end: end_date,
                });
            }
        }
        Ok(Self { start, end })
    }

    /// Parses a span from its two textual keys.
    pub fn parse(start: &str, end: &str) -> Result<Self, PeriodError> {
        Self::new(start.parse()?, end.parse()?)
    }

    pub fn start(&self) -> YearMonth {
        self.start
    }

    pub fn end(&self) -> PeriodEnd {
        self.end
    }

    pub fn is_ongoing(&self) -> bool {
        self.end.is_present()
    }
}
