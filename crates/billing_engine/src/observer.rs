//! Quote computation observability hook.
//!
//! The engine itself is side-effect-free; callers who want visibility into
//! intermediate figures inject an observer. [`NoopObserver`] is the
//! default; [`TracingObserver`] forwards every event to `tracing` at debug
//! level.

use billing_core::types::Money;
use tracing::debug;

use crate::adaptation::AdaptationOutcome;
use crate::last_month::SpecialLastMonth;
use crate::scheduler::MonthlySchedule;

/// Receives intermediate figures as the quote computation progresses.
///
/// Every method has a no-op default, so implementors override only what
/// they need.
pub trait QuoteObserver {
    /// Called once the average daily cost is known.
    fn on_daily_cost(&self, _daily_cost: Money) {}

    /// Called after the adaptation period is allocated against the first
    /// month.
    fn on_first_month(&self, _outcome: &AdaptationOutcome) {}

    /// Called when the final month is detected as special.
    fn on_special_last_month(&self, _special: &SpecialLastMonth) {}

    /// Called once the amortized schedule is built.
    fn on_schedule(&self, _schedule: &MonthlySchedule) {}

    /// Called with the assembled total.
    fn on_total(&self, _total: Money) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl QuoteObserver for NoopObserver {}

/// Observer that emits `tracing` events at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl QuoteObserver for TracingObserver {
    fn on_daily_cost(&self, daily_cost: Money) {
        debug!(%daily_cost, "computed average daily cost");
    }

    fn on_first_month(&self, outcome: &AdaptationOutcome) {
        debug!(
            active_days = outcome.first_month_active_days(),
            deducted_days = outcome.deducted_days(),
            remaining_days = outcome.remaining_days(),
            first_month_cost = %outcome.first_month_cost(),
            "allocated adaptation against first month"
        );
    }

    fn on_special_last_month(&self, special: &SpecialLastMonth) {
        debug!(
            month_start = %special.month_start(),
            active_days = special.active_days(),
            "final month billed standalone"
        );
    }

    fn on_schedule(&self, schedule: &MonthlySchedule) {
        debug!(
            month_count = schedule.month_count(),
            remaining_active_days = schedule.remaining_active_days(),
            monthly_cost = %schedule.monthly_cost(),
            deposit = %schedule.deposit_amount(),
            "built amortized schedule"
        );
    }

    fn on_total(&self, total: Money) {
        debug!(%total, "assembled timetable");
    }
}
