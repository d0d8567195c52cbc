//! Date type for bond period calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A calendar date for bond calculations.
///
/// Newtype around `chrono::NaiveDate` that adds the period counting the
/// engine relies on: calendar days, whole months and whole years between
/// two dates.
///
/// # Example
///
/// ```rust
/// use bondscope_core::types::Date;
///
/// let start = Date::from_ymd(2020, 1, 31).unwrap();
/// let end = Date::from_ymd(2020, 2, 29).unwrap();
///
/// // Jan 31 -> Feb 29 is not a complete month
/// assert_eq!(start.months_between(&end), 0);
/// assert_eq!(start.days_between(&end), 29);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date in local time.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date. Negative values move backward.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Counts complete months from `self` to `other`.
    ///
    /// A month only counts once the day-of-month has been reached again, so
    /// 2020-01-15 to 2020-03-14 is one month. Negative when `other` is
    /// earlier than `self`.
    #[must_use]
    pub fn months_between(&self, other: &Date) -> i64 {
        let start = i64::from(self.year()) * 12 + i64::from(self.month());
        let end = i64::from(other.year()) * 12 + i64::from(other.month());
        let mut months = end - start;
        let days = i64::from(other.day()) - i64::from(self.day());

        if months > 0 && days < 0 {
            months -= 1;
        } else if months < 0 && days > 0 {
            months += 1;
        }
        months
    }

    /// Counts complete years from `self` to `other`.
    #[must_use]
    pub fn years_between(&self, other: &Date) -> i64 {
        self.months_between(other) / 12
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_date_creation() {
        let date = d(2025, 6, 15);
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2025-06-15").unwrap();
        assert_eq!(date, d(2025, 6, 15));
        assert!(Date::parse("15/06/2025").is_err());
        assert!(Date::parse("2025-6-15x").is_err());
        assert_eq!("2020-01-01".parse::<Date>().unwrap(), d(2020, 1, 1));
    }

    #[test]
    fn test_days_between() {
        assert_eq!(d(2025, 1, 1).days_between(&d(2025, 1, 31)), 30);
        assert_eq!(d(2020, 1, 1).days_between(&d(2035, 12, 31)), 5843);
    }

    #[test]
    fn test_months_between_whole_months() {
        assert_eq!(d(2020, 1, 1).months_between(&d(2026, 1, 1)), 72);
        assert_eq!(d(2020, 1, 1).months_between(&d(2035, 12, 31)), 191);
        assert_eq!(d(2020, 1, 15).months_between(&d(2020, 3, 14)), 1);
        assert_eq!(d(2020, 1, 15).months_between(&d(2020, 3, 15)), 2);
    }

    #[test]
    fn test_months_between_end_of_month() {
        assert_eq!(d(2020, 1, 31).months_between(&d(2020, 2, 29)), 0);
        assert_eq!(d(2020, 1, 31).months_between(&d(2020, 3, 31)), 2);
    }

    #[test]
    fn test_months_between_reversed() {
        assert_eq!(d(2020, 3, 14).months_between(&d(2020, 1, 15)), -1);
        assert_eq!(d(2020, 1, 1).months_between(&d(2020, 1, 1)), 0);
    }

    #[test]
    fn test_years_between() {
        assert_eq!(d(2020, 1, 1).years_between(&d(2035, 12, 31)), 15);
        assert_eq!(d(2020, 1, 1).years_between(&d(2026, 1, 1)), 6);
        assert_eq!(d(2020, 1, 2).years_between(&d(2026, 1, 1)), 5);
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = d(2025, 1, 1);
        let d2 = d1 + 10;
        assert_eq!(d2.day(), 11);
        assert_eq!((d2 - 5).day(), 6);
        assert_eq!(d2 - d1, 10);
        assert_eq!(d1 - 1, d(2024, 12, 31));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", d(2025, 6, 5)), "2025-06-05");
    }

    #[test]
    fn test_serde() {
        let date = d(2025, 6, 15);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    proptest! {
        #[test]
        fn months_between_is_antisymmetric(a in 0i64..20_000, b in 0i64..20_000) {
            let base = d(1990, 1, 1);
            let x = base.add_days(a);
            let y = base.add_days(b);
            prop_assert_eq!(x.months_between(&y), -y.months_between(&x));
        }

        #[test]
        fn months_between_never_exceeds_days(a in 0i64..20_000, span in 0i64..20_000) {
            let x = d(1990, 1, 1).add_days(a);
            let y = x.add_days(span);
            let months = x.months_between(&y);
            prop_assert!(months >= 0);
            prop_assert!(months * 28 <= span);
        }
    }
}
