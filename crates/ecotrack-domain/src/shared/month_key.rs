use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// Calendar month key, rendered as `YYYY-MM`.
///
/// Ordering follows the calendar, so keys can be compared and sorted directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidInput(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        if !(0..=9999).contains(&year) {
            return Err(DomainError::InvalidInput(format!(
                "Year must have four digits, got {}",
                year
            )));
        }
        Ok(Self { year, month })
    }

    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self::from_date(instant.date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn as_str(&self) -> String {
        self.to_string()
    }

    /// The month immediately before this one
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidInput(format!("Invalid month key: '{}'", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_key_formatting() {
        let key = MonthKey::from_datetime(Utc.with_ymd_and_hms(2024, 7, 4, 12, 0, 0).unwrap());
        assert_eq!(key.to_string(), "2024-07");
    }

    #[test]
    fn test_month_key_parse() {
        let key: MonthKey = "2023-11".parse().unwrap();
        assert_eq!(key.year(), 2023);
        assert_eq!(key.month(), 11);

        assert!("2023-13".parse::<MonthKey>().is_err());
        assert!("2023-1".parse::<MonthKey>().is_err());
        assert!("november".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_month_key_previous_wraps_year() {
        let key = MonthKey::new(2024, 1).unwrap();
        assert_eq!(key.previous(), MonthKey::new(2023, 12).unwrap());
    }

    #[test]
    fn test_month_key_serde_as_string() {
        let key = MonthKey::new(2025, 2).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2025-02\"");

        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<MonthKey>("\"2025-00\"").is_err());
    }

    #[test]
    fn test_month_key_ordering() {
        let a: MonthKey = "2023-12".parse().unwrap();
        let b: MonthKey = "2024-01".parse().unwrap();
        assert!(a < b);
    }
}
