//! Even amortization of the remaining contract cost.
//!
//! The amortization window runs from the day after the first calendar
//! month to the amortization end boundary (the contract end, or the day
//! before a special last month). Its net active days are spread evenly
//! over the spanned calendar months; the adaptation carry-forward is
//! deducted from the first scheduled month, and the deposit is absorbed
//! month by month in order.

use billing_core::types::{Date, Money};
use billing_models::planning::PlanningCycle;
use billing_models::policy::DepositPolicy;

use crate::calendar::{count_range, CalendarExceptions, DayRangeCount};
use crate::error::QuoteError;
use crate::last_month::SpecialLastMonth;

/// The amortized monthly schedule with its derived figures.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySchedule {
    window_start: Date,
    window: DayRangeCount,
    remaining_active_days: u32,
    month_count: u32,
    days_per_month: f64,
    monthly_cost: Money,
    deposit_amount: Money,
    unabsorbed_deposit: Money,
    months: Vec<Money>,
}

impl MonthlySchedule {
    /// Returns the first day of the amortization window (the day after the
    /// first calendar month ends).
    #[inline]
    pub fn window_start(&self) -> Date {
        self.window_start
    }

    /// Returns the window's day tallies (with any special-month exclusions
    /// merged in).
    #[inline]
    pub fn window(&self) -> DayRangeCount {
        self.window
    }

    /// Returns the window's active days net of exclusions.
    #[inline]
    pub fn remaining_active_days(&self) -> u32 {
        self.remaining_active_days
    }

    /// Returns the number of calendar months the window spans.
    #[inline]
    pub fn month_count(&self) -> u32 {
        self.month_count
    }

    /// Returns the billable days allocated to each month.
    #[inline]
    pub fn days_per_month(&self) -> f64 {
        self.days_per_month
    }

    /// Returns the even monthly cost before adjustments.
    #[inline]
    pub fn monthly_cost(&self) -> Money {
        self.monthly_cost
    }

    /// Returns the deposit amount resolved against the monthly cost.
    #[inline]
    pub fn deposit_amount(&self) -> Money {
        self.deposit_amount
    }

    /// Returns the part of the deposit no month could absorb.
    #[inline]
    pub fn unabsorbed_deposit(&self) -> Money {
        self.unabsorbed_deposit
    }

    /// Returns the per-month amounts after the adaptation carry-forward
    /// and deposit absorption.
    #[inline]
    pub fn months(&self) -> &[Money] {
        &self.months
    }

    /// Returns the pre-adjustment cost of the window.
    pub fn remaining_cost(&self, daily_cost: Money) -> Money {
        daily_cost.times(f64::from(self.remaining_active_days))
    }
}

/// Builds the amortized monthly schedule.
///
/// `first_month_end` is the last day of the contract's first calendar
/// month; `amortization_end` is the contract end or, with a special last
/// month, the day before that month starts. An empty window yields a
/// schedule with no months, a zero monthly cost, and a deposit resolved
/// against zero.
///
/// # Errors
///
/// - `QuoteError::ZeroActivePlan` when a non-empty window spans no
///   calendar month
/// - `QuoteError::NegativeAmount` when merged exclusions exceed the
///   window's active days, or the adaptation carry-forward exceeds the
///   first scheduled month
pub fn schedule(
    cycle: &PlanningCycle,
    exceptions: &CalendarExceptions,
    first_month_end: Date,
    amortization_end: Date,
    special: Option<&SpecialLastMonth>,
    remaining_adaptation_days: f64,
    daily_cost: Money,
    deposit: &DepositPolicy,
) -> Result<MonthlySchedule, QuoteError> {
    let window_start = first_month_end.next_day();
    if window_start > amortization_end {
        return Ok(MonthlySchedule {
            window_start,
            window: DayRangeCount::default(),
            remaining_active_days: 0,
            month_count: 0,
            days_per_month: 0.0,
            monthly_cost: Money::zero(),
            deposit_amount: deposit.amount_for(Money::zero()),
            unabsorbed_deposit: deposit.amount_for(Money::zero()),
            months: Vec::new(),
        });
    }

    let mut window = count_range(cycle, exceptions, window_start, amortization_end);
    if let Some(special) = special {
        window = merge_exclusions(window, special.count());
    }

    let excluded = i64::from(window.excluded_days());
    let remaining = i64::from(window.active_days()) - excluded;
    if remaining < 0 {
        return Err(QuoteError::NegativeAmount {
            context: format!(
                "amortization window has {} active days but {} excluded days",
                window.active_days(),
                excluded
            ),
        });
    }
    let remaining_active_days = remaining as u32;

    let month_count = window_start.months_spanned(amortization_end);
    if month_count == 0 {
        return Err(QuoteError::ZeroActivePlan);
    }

    let days_per_month = f64::from(remaining_active_days) / f64::from(month_count);
    let monthly_cost = daily_cost.times(days_per_month);
    let deposit_amount = deposit.amount_for(monthly_cost);

    let mut months = vec![monthly_cost; month_count as usize];

    // Adaptation carry-forward, applied exactly once, to the first month.
    let carry = daily_cost.times(remaining_adaptation_days);
    let first = months[0] - carry;
    if first.is_negative() {
        return Err(QuoteError::NegativeAmount {
            context: format!(
                "first amortized month {} cannot absorb adaptation carry-forward {}",
                months[0], carry
            ),
        });
    }
    months[0] = first;

    // Deposit absorption, in month order after the adaptation deduction.
    let mut outstanding = deposit_amount;
    for month in months.iter_mut() {
        if outstanding.is_zero() {
            break;
        }
        if *month < outstanding {
            outstanding = outstanding - *month;
            *month = Money::zero();
        } else {
            *month = *month - outstanding;
            outstanding = Money::zero();
        }
    }

    Ok(MonthlySchedule {
        window_start,
        window,
        remaining_active_days,
        month_count,
        days_per_month,
        monthly_cost,
        deposit_amount,
        unabsorbed_deposit: outstanding,
        months,
    })
}

/// Folds a special month's exclusion tallies into the window's.
fn merge_exclusions(window: DayRangeCount, special: DayRangeCount) -> DayRangeCount {
    DayRangeCount::with_counts(
        window.active_days(),
        window.closure_excluded_days() + special.closure_excluded_days(),
        window.holiday_excluded_days() + special.holiday_excluded_days(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ClosedPeriod;
    use crate::last_month;
    use billing_models::planning::{DayPlan, TimeSlot, WeekPlan};
    use billing_models::policy::LastMonthPolicy;
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

    fn daily() -> Money {
        Money::new(dec!(60.00))
    }

    #[test]
    fn test_reference_window() {
        // Window Sep 1 2024 through Feb 28 2025: 65 active days over 6
        // months, 2 carried adaptation days, 10% deposit.
        let deposit = DepositPolicy::percentage(10.0).unwrap();
        let schedule = schedule(
            &two_week_cycle(),
            &CalendarExceptions::none(),
            d(2024, 8, 31),
            d(2025, 2, 28),
            None,
            2.0,
            daily(),
            &deposit,
        )
        .unwrap();

        assert_eq!(schedule.window_start(), d(2024, 9, 1));
        assert_eq!(schedule.remaining_active_days(), 65);
        assert_eq!(schedule.month_count(), 6);
        assert_eq!(schedule.monthly_cost(), Money::new(dec!(650.00)));
        assert_eq!(schedule.deposit_amount(), Money::new(dec!(65.00)));
        assert!(schedule.unabsorbed_deposit().is_zero());
        assert_eq!(schedule.remaining_cost(daily()), Money::new(dec!(3900.00)));

        // 650 - 120 carry - 65 deposit, then five untouched months.
        let expected: Vec<Money> = [dec!(465.00); 1]
            .into_iter()
            .chain([dec!(650.00); 5])
            .map(Money::new)
            .collect();
        assert_eq!(schedule.months(), expected.as_slice());
    }

    #[test]
    fn test_deposit_spills_across_months() {
        let deposit = DepositPolicy::flat(Money::new(dec!(700.00)));
        let schedule = schedule(
            &two_week_cycle(),
            &CalendarExceptions::none(),
            d(2024, 8, 31),
            d(2025, 2, 28),
            None,
            2.0,
            daily(),
            &deposit,
        )
        .unwrap();

        // First month 530 is zeroed; the remainder 170 reduces month two.
        let amounts: Vec<_> = schedule.months().iter().map(Money::to_string).collect();
        assert_eq!(amounts, ["0.00", "480.00", "650.00", "650.00", "650.00", "650.00"]);
        assert!(schedule.unabsorbed_deposit().is_zero());
    }

    #[test]
    fn test_exclusions_reduce_monthly_cost() {
        let exceptions = CalendarExceptions::new(
            [d(2024, 11, 11), d(2024, 12, 25)],
            vec![ClosedPeriod::new(d(2024, 12, 23), d(2025, 1, 3)).unwrap()],
        );
        let deposit = DepositPolicy::percentage(10.0).unwrap();
        let schedule = schedule(
            &two_week_cycle(),
            &exceptions,
            d(2024, 8, 31),
            d(2025, 2, 28),
            None,
            2.0,
            daily(),
            &deposit,
        )
        .unwrap();

        // 65 active, 5 closure-excluded, 1 holiday-excluded.
        assert_eq!(schedule.window().active_days(), 65);
        assert_eq!(schedule.window().closure_excluded_days(), 5);
        assert_eq!(schedule.window().holiday_excluded_days(), 1);
        assert_eq!(schedule.remaining_active_days(), 59);
        assert_eq!(schedule.monthly_cost(), Money::new(dec!(590.00)));
        assert_eq!(schedule.deposit_amount(), Money::new(dec!(59.00)));
    }

    #[test]
    fn test_special_month_exclusions_merge_into_window() {
        // A holiday on Mon Mar 3 2025 lands inside the special month; its
        // exclusion reduces the amortized months.
        let exceptions = CalendarExceptions::new([d(2025, 3, 3)], vec![]);
        let special = last_month::detect(
            &two_week_cycle(),
            &exceptions,
            &LastMonthPolicy::enabled(5),
            d(2024, 8, 21),
            d(2025, 3, 7),
        )
        .unwrap();
        assert_eq!(special.count().holiday_excluded_days(), 1);

        let schedule = schedule(
            &two_week_cycle(),
            &exceptions,
            d(2024, 8, 31),
            special.amortization_end(),
            Some(&special),
            0.0,
            daily(),
            &DepositPolicy::None,
        )
        .unwrap();
        assert_eq!(schedule.window().holiday_excluded_days(), 1);
        assert_eq!(schedule.remaining_active_days(), 64);
    }

    #[test]
    fn test_empty_window() {
        let deposit = DepositPolicy::percentage(10.0).unwrap();
        let schedule = schedule(
            &two_week_cycle(),
            &CalendarExceptions::none(),
            d(2024, 8, 31),
            d(2024, 8, 30),
            None,
            0.0,
            daily(),
            &deposit,
        )
        .unwrap();
        assert!(schedule.months().is_empty());
        assert_eq!(schedule.month_count(), 0);
        assert!(schedule.monthly_cost().is_zero());
        // A percentage deposit over an empty window resolves to zero.
        assert!(schedule.deposit_amount().is_zero());
    }

    #[test]
    fn test_oversized_carry_forward_is_negative_amount() {
        // 46 carried days at 60 per day dwarf the 650 monthly cost.
        let result = schedule(
            &two_week_cycle(),
            &CalendarExceptions::none(),
            d(2024, 8, 31),
            d(2025, 2, 28),
            None,
            46.0,
            daily(),
            &DepositPolicy::None,
        );
        assert!(matches!(result, Err(QuoteError::NegativeAmount { .. })));
    }
}
