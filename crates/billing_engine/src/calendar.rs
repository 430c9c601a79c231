//! Calendar exceptions and day-range counting.
//!
//! This module provides:
//! - [`ClosedPeriod`]: an inclusive range of facility closure dates
//! - [`CalendarExceptions`]: the contract's holidays and closure periods
//! - [`DayRangeCount`]: active and excluded day tallies over a date range
//! - [`count_range`]: the day-range counter itself

use std::collections::BTreeSet;

use billing_core::types::Date;
use billing_models::planning::PlanningCycle;

use crate::error::QuoteError;

/// An inclusive range of dates during which the facility is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosedPeriod {
    start: Date,
    end: Date,
}

impl ClosedPeriod {
    /// Creates a closure period.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::InvalidDateRange` when `end` precedes `start`.
    pub fn new(start: Date, end: Date) -> Result<Self, QuoteError> {
        if end < start {
            return Err(QuoteError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first closed day.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the last closed day.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns whether `date` falls inside the period.
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Calendar-specific exceptions to the planning template: public holidays
/// and facility closure periods.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarExceptions {
    holidays: BTreeSet<Date>,
    closures: Vec<ClosedPeriod>,
}

impl CalendarExceptions {
    /// Creates the exception set.
    pub fn new(holidays: impl IntoIterator<Item = Date>, closures: Vec<ClosedPeriod>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
            closures,
        }
    }

    /// Creates an empty exception set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns whether `date` is a holiday.
    #[inline]
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Returns whether `date` falls inside a closure period.
    #[inline]
    pub fn is_closed(&self, date: Date) -> bool {
        self.closures.iter().any(|period| period.contains(date))
    }
}

/// Day tallies over an inclusive date range.
///
/// A holiday takes precedence over a closure for exclusion bookkeeping, so
/// no date is counted in both exclusion buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayRangeCount {
    active_days: u32,
    closure_excluded_days: u32,
    holiday_excluded_days: u32,
}

impl DayRangeCount {
    /// Creates a tally from explicit counts.
    pub fn with_counts(
        active_days: u32,
        closure_excluded_days: u32,
        holiday_excluded_days: u32,
    ) -> Self {
        Self {
            active_days,
            closure_excluded_days,
            holiday_excluded_days,
        }
    }

    /// Returns the number of active days in the range.
    #[inline]
    pub fn active_days(&self) -> u32 {
        self.active_days
    }

    /// Returns the number of active days excluded by a closure period.
    #[inline]
    pub fn closure_excluded_days(&self) -> u32 {
        self.closure_excluded_days
    }

    /// Returns the number of active days excluded as holidays.
    #[inline]
    pub fn holiday_excluded_days(&self) -> u32 {
        self.holiday_excluded_days
    }

    /// Returns the number of excluded days across both buckets.
    #[inline]
    pub fn excluded_days(&self) -> u32 {
        self.closure_excluded_days + self.holiday_excluded_days
    }
}

/// Counts active, closure-excluded, and holiday-excluded days over the
/// inclusive range `[start, end]`.
///
/// An empty range (`start > end`) yields all-zero tallies.
///
/// # Examples
///
/// ```
/// use billing_core::types::Date;
/// use billing_engine::calendar::{count_range, CalendarExceptions};
/// use billing_models::planning::{DayPlan, PlanningCycle, TimeSlot, WeekPlan};
///
/// let monday_only = WeekPlan::new(vec![
///     DayPlan::new(vec![TimeSlot::from_hhmm("08:00", "13:00").unwrap()]),
///     DayPlan::off(),
///     DayPlan::off(),
///     DayPlan::off(),
///     DayPlan::off(),
/// ])
/// .unwrap();
/// let cycle = PlanningCycle::new(vec![monday_only]).unwrap();
///
/// let count = count_range(
///     &cycle,
///     &CalendarExceptions::none(),
///     Date::from_ymd(2024, 9, 1).unwrap(),
///     Date::from_ymd(2024, 9, 30).unwrap(),
/// );
/// assert_eq!(count.active_days(), 5); // five Mondays in September 2024
/// ```
pub fn count_range(
    cycle: &PlanningCycle,
    exceptions: &CalendarExceptions,
    start: Date,
    end: Date,
) -> DayRangeCount {
    let mut count = DayRangeCount::default();
    if start > end {
        return count;
    }
    let mut day = start;
    while day <= end {
        if cycle.is_active(day) {
            count.active_days += 1;
            if exceptions.is_holiday(day) {
                count.holiday_excluded_days += 1;
            } else if exceptions.is_closed(day) {
                count.closure_excluded_days += 1;
            }
        }
        if day == end {
            break;
        }
        day = day.next_day();
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use billing_models::planning::{DayPlan, TimeSlot, WeekPlan};

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn day(from: &str, to: &str) -> DayPlan {
        DayPlan::new(vec![TimeSlot::from_hhmm(from, to).unwrap()])
    }

    /// Week 1: Mon/Thu/Fri. Week 2: Mon/Wed.
    fn two_week_cycle() -> PlanningCycle {
        let week1 = WeekPlan::new(vec![
            day("08:00", "13:00"),
            DayPlan::off(),
            DayPlan::off(),
            day("08:00", "14:00"),
            day("07:00", "14:00"),
        ])
        .unwrap();
        let week2 = WeekPlan::new(vec![
            day("08:00", "17:00"),
            DayPlan::off(),
            day("09:00", "12:00"),
            DayPlan::off(),
            DayPlan::off(),
        ])
        .unwrap();
        PlanningCycle::new(vec![week1, week2]).unwrap()
    }

    #[test]
    fn test_closed_period_validation() {
        assert!(ClosedPeriod::new(d(2024, 12, 23), d(2025, 1, 3)).is_ok());
        assert!(matches!(
            ClosedPeriod::new(d(2025, 1, 3), d(2024, 12, 23)),
            Err(QuoteError::InvalidDateRange { .. })
        ));
        // A single-day closure is valid.
        let single = ClosedPeriod::new(d(2024, 11, 11), d(2024, 11, 11)).unwrap();
        assert!(single.contains(d(2024, 11, 11)));
        assert!(!single.contains(d(2024, 11, 12)));
    }

    #[test]
    fn test_count_plain_range() {
        // First month of the reference contract: Aug 22, 23 (week 1) and
        // Aug 26, 28 (week 2) are active.
        let count = count_range(
            &two_week_cycle(),
            &CalendarExceptions::none(),
            d(2024, 8, 21),
            d(2024, 8, 31),
        );
        assert_eq!(count.active_days(), 4);
        assert_eq!(count.excluded_days(), 0);
    }

    #[test]
    fn test_count_single_day_and_empty_ranges() {
        let cycle = two_week_cycle();
        let none = CalendarExceptions::none();
        let active = count_range(&cycle, &none, d(2024, 8, 22), d(2024, 8, 22));
        assert_eq!(active.active_days(), 1);
        let inactive = count_range(&cycle, &none, d(2024, 8, 21), d(2024, 8, 21));
        assert_eq!(inactive.active_days(), 0);
        let empty = count_range(&cycle, &none, d(2024, 9, 1), d(2024, 8, 1));
        assert_eq!(empty, DayRangeCount::default());
    }

    #[test]
    fn test_closure_excludes_active_days_only() {
        let cycle = two_week_cycle();
        let exceptions = CalendarExceptions::new(
            [],
            vec![ClosedPeriod::new(d(2024, 12, 23), d(2025, 1, 3)).unwrap()],
        );
        // Active days inside the closure: Dec 23, 26, 27 (week 1),
        // Dec 30 and Jan 1 (week 2).
        let count = count_range(&cycle, &exceptions, d(2024, 12, 1), d(2025, 1, 31));
        assert_eq!(count.closure_excluded_days(), 5);
        assert_eq!(count.holiday_excluded_days(), 0);
    }

    #[test]
    fn test_holiday_takes_precedence_over_closure() {
        let cycle = two_week_cycle();
        // Dec 23 is both a holiday and inside the closure; it must land in
        // the holiday bucket only.
        let exceptions = CalendarExceptions::new(
            [d(2024, 12, 23)],
            vec![ClosedPeriod::new(d(2024, 12, 23), d(2025, 1, 3)).unwrap()],
        );
        let count = count_range(&cycle, &exceptions, d(2024, 12, 1), d(2025, 1, 31));
        assert_eq!(count.holiday_excluded_days(), 1);
        assert_eq!(count.closure_excluded_days(), 4);
    }

    #[test]
    fn test_holiday_on_inactive_day_is_ignored() {
        let cycle = two_week_cycle();
        // Dec 25 2024 is a Wednesday of week 1, which has no Wednesday slot.
        let exceptions = CalendarExceptions::new([d(2024, 12, 25)], vec![]);
        let count = count_range(&cycle, &exceptions, d(2024, 12, 1), d(2024, 12, 31));
        assert_eq!(count.holiday_excluded_days(), 0);
    }
}
