use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Calendar month in `YYYY-MM` form, the granularity of every dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// For literal months known to be valid.
    pub(crate) const fn from_parts(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a YYYY-MM month")]
pub struct InvalidMonth(pub String);

impl FromStr for YearMonth {
    type Err = InvalidMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 7 {
            return Err(InvalidMonth(s.to_string()));
        }
        let date = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .map_err(|_| InvalidMonth(s.to_string()))?;
        Ok(Self {
            year: date.year(),
            month: date.month(),
        })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
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

/// Inclusive range of months picked on a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    start: YearMonth,
    end: YearMonth,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error(transparent)]
    Month(#[from] InvalidMonth),

    #[error("range start {start} is after its end {end}")]
    Reversed { start: YearMonth, end: YearMonth },

    #[error("both ends of a month range are required")]
    HalfOpen,
}

impl MonthRange {
    pub fn new(start: YearMonth, end: YearMonth) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range from optional query values; no bound at all means no range.
    pub fn from_query(from: Option<&str>, to: Option<&str>) -> Result<Option<Self>, RangeError> {
        match (from, to) {
            (None, None) => Ok(None),
            (Some(from), Some(to)) => Ok(Some(Self::new(from.parse()?, to.parse()?)?)),
            _ => Err(RangeError::HalfOpen),
        }
    }

    pub fn start(&self) -> YearMonth {
        self.start
    }

    pub fn end(&self) -> YearMonth {
        self.end
    }

    pub fn contains(&self, month: YearMonth) -> bool {
        self.start <= month && month <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_padded_months() {
        let month: YearMonth = "2025-02".parse().unwrap();
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 2);
        assert_eq!(month.to_string(), "2025-02");
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("2025-2".parse::<YearMonth>().is_err());
        assert!("2025-02-01".parse::<YearMonth>().is_err());
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = MonthRange::from_query(Some("2025-01"), Some("2025-02"))
            .unwrap()
            .unwrap();
        assert!(range.contains("2025-01".parse().unwrap()));
        assert!(range.contains("2025-02".parse().unwrap()));
        assert!(!range.contains("2025-03".parse().unwrap()));
        assert!(!range.contains("2024-12".parse().unwrap()));
    }

    #[test]
    fn reversed_and_half_open_ranges_are_rejected() {
        assert!(matches!(
            MonthRange::from_query(Some("2025-03"), Some("2025-01")),
            Err(RangeError::Reversed { .. })
        ));
        assert_eq!(
            MonthRange::from_query(Some("2025-03"), None),
            Err(RangeError::HalfOpen)
        );
        assert_eq!(MonthRange::from_query(None, None), Ok(None));
    }
}
