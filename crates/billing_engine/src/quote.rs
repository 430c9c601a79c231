//! Quote generation entry point.
//!
//! Orchestrates the full pipeline: duration averages, adaptation
//! allocation, special-last-month detection, amortization, and timetable
//! assembly. The computation is all-or-nothing; no partial timetable is
//! ever returned.

use billing_core::types::Money;
use billing_models::timetable::QuoteResult;

use crate::adaptation;
use crate::assembler::{assemble, AssemblyInput};
use crate::error::QuoteError;
use crate::last_month;
use crate::observer::{NoopObserver, QuoteObserver};
use crate::request::QuoteRequest;
use crate::scheduler;

/// Generates the full invoicing schedule and total cost for a contract.
///
/// # Errors
///
/// Returns a [`QuoteError`] when the request fails validation or the
/// configuration is contradictory; see the error type for the failure
/// modes.
///
/// # Examples
///
/// ```
/// use billing_core::types::Date;
/// use billing_engine::quote::generate_quote;
/// use billing_engine::request::QuoteRequest;
/// use billing_models::planning::{DayPlan, PlanningCycle, TimeSlot, WeekPlan};
///
/// // Mondays only, 5 hours, at 10 per hour.
/// let week = WeekPlan::new(vec![
///     DayPlan::new(vec![TimeSlot::from_hhmm("08:00", "13:00").unwrap()]),
///     DayPlan::off(),
///     DayPlan::off(),
///     DayPlan::off(),
///     DayPlan::off(),
/// ])
/// .unwrap();
///
/// let request = QuoteRequest::builder()
///     .contract_start(Date::from_ymd(2024, 9, 2).unwrap())
///     .contract_end(Date::from_ymd(2024, 11, 29).unwrap())
///     .hourly_rate(10.0)
///     .cycle(PlanningCycle::new(vec![week]).unwrap())
///     .build()
///     .unwrap();
///
/// let result = generate_quote(&request).unwrap();
/// // 13 Mondays at 50 per day.
/// assert_eq!(result.total().to_string(), "650.00");
/// ```
pub fn generate_quote(request: &QuoteRequest) -> Result<QuoteResult, QuoteError> {
    generate_quote_with(request, &NoopObserver)
}

/// Generates a quote, reporting intermediate figures to `observer`.
///
/// The observer is the structured replacement for ad hoc debug printing:
/// the computation itself stays side-effect-free and the hook sees every
/// intermediate figure the engine derives.
///
/// # Errors
///
/// Same failure modes as [`generate_quote`].
pub fn generate_quote_with(
    request: &QuoteRequest,
    observer: &dyn QuoteObserver,
) -> Result<QuoteResult, QuoteError> {
    request.validate()?;

    let avg_hours_per_day = request
        .cycle
        .avg_hours_per_day()
        .map_err(|_| QuoteError::ZeroActivePlan)?;
    let hourly_rate =
        Money::from_f64(request.hourly_rate).map_err(|_| QuoteError::NegativeAmount {
            context: format!("hourly rate {} is not representable", request.hourly_rate),
        })?;
    let daily_cost = hourly_rate.times(avg_hours_per_day);
    observer.on_daily_cost(daily_cost);

    let adaptation = adaptation::allocate(
        &request.cycle,
        &request.exceptions,
        &request.adaptation,
        request.contract_start,
        request.contract_end,
        avg_hours_per_day,
        daily_cost,
    );
    observer.on_first_month(&adaptation);

    let special = last_month::detect(
        &request.cycle,
        &request.exceptions,
        &request.last_month,
        request.contract_start,
        request.contract_end,
    );
    if let Some(special) = &special {
        observer.on_special_last_month(special);
    }
    let amortization_end = special
        .as_ref()
        .map_or(request.contract_end, |s| s.amortization_end());

    let first_month_end = request.contract_start.end_of_month();
    let schedule = scheduler::schedule(
        &request.cycle,
        &request.exceptions,
        first_month_end,
        amortization_end,
        special.as_ref(),
        adaptation.remaining_days(),
        daily_cost,
        &request.deposit,
    )?;
    observer.on_schedule(&schedule);

    let result = assemble(AssemblyInput {
        contract_start: request.contract_start,
        timing: request.timing,
        daily_cost,
        adaptation: &adaptation,
        has_deposit: request.deposit.is_some(),
        has_adaptation: request.adaptation.is_some(),
        registration_fee: request.registration.amount(),
        schedule: &schedule,
        special: special.as_ref(),
    });
    observer.on_total(result.total());
    Ok(result)
}
