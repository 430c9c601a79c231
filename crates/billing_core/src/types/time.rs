//! Calendar dates for billing computations.
//!
//! This module provides `Date`, a type-safe wrapper around
//! `chrono::NaiveDate` with the month- and week-oriented arithmetic the
//! billing engine relies on: calendar month boundaries, day stepping, an
//! absolute week index for cyclic planning templates, and inclusive month
//! spans.
//!
//! # Examples
//!
//! ```
//! use billing_core::types::Date;
//!
//! let date = Date::from_ymd(2024, 8, 21).unwrap();
//! assert_eq!(date.first_of_month(), Date::from_ymd(2024, 8, 1).unwrap());
//! assert_eq!(date.end_of_month(), Date::from_ymd(2024, 8, 31).unwrap());
//! ```

use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and standard date arithmetic, plus the
/// calendar-month and template-week helpers used throughout the billing
/// engine.
///
/// # Examples
///
/// ```
/// use billing_core::types::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2024)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::Date;
    ///
    /// let date = Date::from_ymd(2024, 6, 15).unwrap();
    ///
    /// // Invalid date returns error
    /// let invalid = Date::from_ymd(2024, 2, 30);
    /// assert!(invalid.is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// let invalid = Date::parse("not-a-date");
    /// assert!(invalid.is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the first day of this date's calendar month.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::Date;
    ///
    /// let date = Date::from_ymd(2024, 8, 21).unwrap();
    /// assert_eq!(date.first_of_month(), Date::from_ymd(2024, 8, 1).unwrap());
    /// ```
    pub fn first_of_month(&self) -> Date {
        Date(self.0.with_day(1).expect("day 1 is valid in every month"))
    }

    /// Returns the last day of this date's calendar month.
    ///
    /// # Panics
    ///
    /// Panics if the month arithmetic overflows chrono's supported range
    /// (far beyond any realistic contract date).
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 10).unwrap();
    /// assert_eq!(date.end_of_month(), Date::from_ymd(2024, 2, 29).unwrap());
    /// ```
    pub fn end_of_month(&self) -> Date {
        let first_of_next =
            self.0.with_day(1).expect("day 1 is valid in every month") + Months::new(1);
        Date(
            first_of_next
                .pred_opt()
                .expect("a month start always has a predecessor"),
        )
    }

    /// Returns the next calendar day.
    ///
    /// # Panics
    ///
    /// Panics at the end of chrono's supported date range.
    pub fn next_day(&self) -> Date {
        Date(
            self.0
                .succ_opt()
                .expect("date arithmetic overflowed chrono's range"),
        )
    }

    /// Returns the previous calendar day.
    ///
    /// # Panics
    ///
    /// Panics at the start of chrono's supported date range.
    pub fn prev_day(&self) -> Date {
        Date(
            self.0
                .pred_opt()
                .expect("date arithmetic underflowed chrono's range"),
        )
    }

    /// Returns this date shifted forward by whole calendar months.
    ///
    /// # Panics
    ///
    /// Panics if the month arithmetic overflows chrono's supported range.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::Date;
    ///
    /// let date = Date::from_ymd(2024, 9, 1).unwrap();
    /// assert_eq!(date.add_months(3), Date::from_ymd(2024, 12, 1).unwrap());
    /// ```
    pub fn add_months(&self, months: u32) -> Date {
        Date(self.0 + Months::new(months))
    }

    /// Returns the absolute week index of this date.
    ///
    /// Weeks run Monday to Sunday and are counted from the proleptic
    /// Gregorian epoch (0001-01-01, a Monday), so the index is continuous
    /// across year boundaries. ISO week-of-year numbers reset at year end
    /// and must not be used for cyclic template resolution.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::Date;
    ///
    /// let mon = Date::from_ymd(2024, 12, 30).unwrap();
    /// let next_mon = Date::from_ymd(2025, 1, 6).unwrap();
    /// assert_eq!(next_mon.absolute_week_index(), mon.absolute_week_index() + 1);
    /// ```
    pub fn absolute_week_index(&self) -> i64 {
        (i64::from(self.0.num_days_from_ce()) - 1).div_euclid(7)
    }

    /// Returns the day-of-week index, Monday = 0 through Sunday = 6.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::Date;
    ///
    /// let wed = Date::from_ymd(2024, 8, 21).unwrap();
    /// assert_eq!(wed.weekday_index(), 2);
    /// ```
    pub fn weekday_index(&self) -> usize {
        self.0.weekday().num_days_from_monday() as usize
    }

    /// Returns the number of distinct calendar months spanned from this
    /// date through `end`, inclusive.
    ///
    /// Returns 0 when `end` falls in a month before this date's month.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::Date;
    ///
    /// let start = Date::from_ymd(2024, 9, 1).unwrap();
    /// let end = Date::from_ymd(2025, 2, 28).unwrap();
    /// assert_eq!(start.months_spanned(end), 6);
    /// ```
    pub fn months_spanned(&self, end: Date) -> u32 {
        let from = i64::from(self.year()) * 12 + i64::from(self.month()) - 1;
        let to = i64::from(end.year()) * 12 + i64::from(end.month()) - 1;
        (to - from + 1).max(0) as u32
    }

    /// Returns whether this date falls in the same calendar month as `other`.
    pub fn same_month(&self, other: Date) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
