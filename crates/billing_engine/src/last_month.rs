//! Special last month detection.
//!
//! A short final calendar month can be billed standalone instead of being
//! folded into the even amortization. Detection is threshold-based and
//! moves the amortization window's end boundary to the day before the
//! final month starts.

use billing_core::types::{Date, Money};
use billing_models::planning::PlanningCycle;
use billing_models::policy::LastMonthPolicy;

use crate::calendar::{count_range, CalendarExceptions, DayRangeCount};

/// A final calendar month billed standalone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialLastMonth {
    month_start: Date,
    count: DayRangeCount,
}

impl SpecialLastMonth {
    /// Returns the first day of the special month.
    #[inline]
    pub fn month_start(&self) -> Date {
        self.month_start
    }

    /// Returns the day tallies over `[month start, contract end]`.
    #[inline]
    pub fn count(&self) -> DayRangeCount {
        self.count
    }

    /// Returns the active-day count of the special month.
    #[inline]
    pub fn active_days(&self) -> u32 {
        self.count.active_days()
    }

    /// Returns the standalone amount billed for the special month.
    pub fn amount(&self, daily_cost: Money) -> Money {
        daily_cost.times(f64::from(self.count.active_days()))
    }

    /// Returns the amortization end boundary implied by this special
    /// month: the day before it starts.
    pub fn amortization_end(&self) -> Date {
        self.month_start.prev_day()
    }
}

/// Decides whether the contract's final calendar month is billed
/// standalone.
///
/// The final month qualifies when the policy is enabled and its active-day
/// count over `[first day of final month, contract_end]` is at or below
/// the threshold. A contract confined to a single calendar month never
/// yields a special month; its days belong to the first-month invoice.
pub fn detect(
    cycle: &PlanningCycle,
    exceptions: &CalendarExceptions,
    policy: &LastMonthPolicy,
    contract_start: Date,
    contract_end: Date,
) -> Option<SpecialLastMonth> {
    if contract_end.same_month(contract_start) {
        return None;
    }
    let month_start = contract_end.first_of_month();
    let count = count_range(cycle, exceptions, month_start, contract_end);
    policy
        .is_special(count.active_days())
        .then_some(SpecialLastMonth { month_start, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use billing_models::planning::{DayPlan, TimeSlot, WeekPlan};
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn day(from: &str, to: &str) -> DayPlan {
        DayPlan::new(vec![TimeSlot::from_hhmm(from, to).unwrap()])
    }

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
    fn test_short_final_month_is_special() {
        // March 1-7 2025 resolves to week 1: Mon 3, Thu 6, Fri 7 active.
        let special = detect(
            &two_week_cycle(),
            &CalendarExceptions::none(),
            &LastMonthPolicy::enabled(5),
            d(2024, 8, 21),
            d(2025, 3, 7),
        )
        .unwrap();
        assert_eq!(special.month_start(), d(2025, 3, 1));
        assert_eq!(special.active_days(), 3);
        assert_eq!(special.amortization_end(), d(2025, 2, 28));
        assert_eq!(
            special.amount(Money::new(dec!(60.00))),
            Money::new(dec!(180.00))
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let special = detect(
            &two_week_cycle(),
            &CalendarExceptions::none(),
            &LastMonthPolicy::enabled(3),
            d(2024, 8, 21),
            d(2025, 3, 7),
        );
        assert!(special.is_some());

        let below = detect(
            &two_week_cycle(),
            &CalendarExceptions::none(),
            &LastMonthPolicy::enabled(2),
            d(2024, 8, 21),
            d(2025, 3, 7),
        );
        assert!(below.is_none());
    }

    #[test]
    fn test_disabled_policy_never_detects() {
        let special = detect(
            &two_week_cycle(),
            &CalendarExceptions::none(),
            &LastMonthPolicy::Disabled,
            d(2024, 8, 21),
            d(2025, 3, 7),
        );
        assert!(special.is_none());
    }

    #[test]
    fn test_single_month_contract_never_special() {
        let special = detect(
            &two_week_cycle(),
            &CalendarExceptions::none(),
            &LastMonthPolicy::enabled(31),
            d(2024, 8, 5),
            d(2024, 8, 30),
        );
        assert!(special.is_none());
    }

    #[test]
    fn test_long_final_month_is_not_special() {
        // Ending Feb 28 the final month has 10 active days.
        let special = detect(
            &two_week_cycle(),
            &CalendarExceptions::none(),
            &LastMonthPolicy::enabled(5),
            d(2024, 8, 21),
            d(2025, 2, 28),
        );
        assert!(special.is_none());
    }
}
