//! Adaptation period allocation.
//!
//! The adaptation period consumes a prefix of the first billing month's
//! active days: those days are billed under the adaptation policy instead
//! of the regular daily rate. Adaptation days beyond the first month carry
//! forward as a deduction against the first amortized month.

use billing_core::types::{Date, Money};
use billing_models::planning::PlanningCycle;
use billing_models::policy::AdaptationPolicy;

use crate::calendar::{count_range, CalendarExceptions};

/// How the adaptation period and the partial first month were allocated.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptationOutcome {
    adaptation_days: f64,
    deducted_days: f64,
    remaining_days: f64,
    first_month_active_days: u32,
    billable_days: f64,
    first_month_cost: Money,
    adaptation_cost: Money,
}

impl AdaptationOutcome {
    /// Returns the adaptation period length in days (fractional for hourly
    /// policies).
    #[inline]
    pub fn adaptation_days(&self) -> f64 {
        self.adaptation_days
    }

    /// Returns the adaptation days absorbed by the first month.
    #[inline]
    pub fn deducted_days(&self) -> f64 {
        self.deducted_days
    }

    /// Returns the adaptation days carried forward past the first month.
    #[inline]
    pub fn remaining_days(&self) -> f64 {
        self.remaining_days
    }

    /// Returns the active-day count of the partial first month.
    #[inline]
    pub fn first_month_active_days(&self) -> u32 {
        self.first_month_active_days
    }

    /// Returns the first-month days billed at the regular rate.
    #[inline]
    pub fn billable_days(&self) -> f64 {
        self.billable_days
    }

    /// Returns the regular-rate cost of the partial first month.
    #[inline]
    pub fn first_month_cost(&self) -> Money {
        self.first_month_cost
    }

    /// Returns the adaptation fee.
    #[inline]
    pub fn adaptation_cost(&self) -> Money {
        self.adaptation_cost
    }
}

/// Allocates the adaptation period against the partial first month.
///
/// The first month spans `[contract_start, end of its calendar month]`,
/// clamped to `contract_end` for single-month contracts. Adaptation days
/// are deducted from the month's active days first; any surplus is
/// reported as `remaining_days` for the scheduler to deduct from the first
/// amortized month.
pub fn allocate(
    cycle: &PlanningCycle,
    exceptions: &CalendarExceptions,
    policy: &AdaptationPolicy,
    contract_start: Date,
    contract_end: Date,
    avg_hours_per_day: f64,
    daily_cost: Money,
) -> AdaptationOutcome {
    let first_month_end = contract_start.end_of_month().min(contract_end);
    let count = count_range(cycle, exceptions, contract_start, first_month_end);
    let active = f64::from(count.active_days());

    let adaptation_days = policy.days(avg_hours_per_day);
    let deducted_days = adaptation_days.min(active);
    let remaining_days = (adaptation_days - active).max(0.0);
    let billable_days = active - deducted_days;

    AdaptationOutcome {
        adaptation_days,
        deducted_days,
        remaining_days,
        first_month_active_days: count.active_days(),
        billable_days,
        first_month_cost: daily_cost.times(billable_days),
        adaptation_cost: policy.cost(),
    }
}
