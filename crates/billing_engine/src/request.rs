//! Quote request definition and builder.

use billing_core::types::Date;
use billing_models::planning::PlanningCycle;
use billing_models::policy::{
    AdaptationPolicy, DepositPolicy, InvoiceTiming, LastMonthPolicy, RegistrationPolicy,
};

use crate::calendar::CalendarExceptions;
use crate::error::QuoteError;

/// The full input bundle of one quote computation.
///
/// The engine consumes the request immutably and returns a fully computed
/// result; it never reads or writes a data store.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuoteRequest {
    /// First day of the contract.
    pub contract_start: Date,
    /// Last day of the contract (inclusive).
    pub contract_end: Date,
    /// Price of one attendance hour.
    pub hourly_rate: f64,
    /// Repeating weekly attendance template.
    pub cycle: PlanningCycle,
    /// Holidays and closure periods.
    pub exceptions: CalendarExceptions,
    /// Adaptation period policy.
    pub adaptation: AdaptationPolicy,
    /// Deposit policy.
    pub deposit: DepositPolicy,
    /// Registration fee policy.
    pub registration: RegistrationPolicy,
    /// Special-last-month policy.
    pub last_month: LastMonthPolicy,
    /// Billing-date convention.
    pub timing: InvoiceTiming,
}

impl QuoteRequest {
    /// Starts a builder with empty required fields and neutral policies.
    pub fn builder() -> QuoteRequestBuilder {
        QuoteRequestBuilder::new()
    }

    /// Validates the request's cross-field invariants.
    ///
    /// # Errors
    ///
    /// - `QuoteError::InvalidDateRange` when the contract end precedes the
    ///   start
    /// - `QuoteError::NegativeAmount` when the hourly rate is not a
    ///   positive finite number
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.contract_end < self.contract_start {
            return Err(QuoteError::InvalidDateRange {
                start: self.contract_start,
                end: self.contract_end,
            });
        }
        if !self.hourly_rate.is_finite() || self.hourly_rate <= 0.0 {
            return Err(QuoteError::NegativeAmount {
                context: format!("hourly rate {} must be positive", self.hourly_rate),
            });
        }
        Ok(())
    }
}

/// Builder for [`QuoteRequest`] with flexible configuration.
///
/// Contract dates, hourly rate, and planning cycle are required; every
/// policy defaults to its neutral variant and the timing defaults to
/// end-of-month invoicing.
///
/// # Examples
///
/// ```
/// use billing_core::types::Date;
/// use billing_engine::request::QuoteRequest;
/// use billing_models::planning::{DayPlan, PlanningCycle, TimeSlot, WeekPlan};
///
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
///     .contract_end(Date::from_ymd(2025, 6, 30).unwrap())
///     .hourly_rate(10.0)
///     .cycle(PlanningCycle::new(vec![week]).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(request.hourly_rate, 10.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuoteRequestBuilder {
    contract_start: Option<Date>,
    contract_end: Option<Date>,
    hourly_rate: Option<f64>,
    cycle: Option<PlanningCycle>,
    exceptions: CalendarExceptions,
    adaptation: AdaptationPolicy,
    deposit: DepositPolicy,
    registration: RegistrationPolicy,
    last_month: LastMonthPolicy,
    timing: InvoiceTiming,
    timing_raw: Option<String>,
}

impl QuoteRequestBuilder {
    /// Creates a builder with neutral policies and end-of-month timing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the contract start date.
    pub fn contract_start(mut self, date: Date) -> Self {
        self.contract_start = Some(date);
        self
    }

    /// Sets the contract end date (inclusive).
    pub fn contract_end(mut self, date: Date) -> Self {
        self.contract_end = Some(date);
        self
    }

    /// Sets the hourly rate.
    pub fn hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = Some(rate);
        self
    }

    /// Sets the planning cycle.
    pub fn cycle(mut self, cycle: PlanningCycle) -> Self {
        self.cycle = Some(cycle);
        self
    }

    /// Sets the calendar exceptions.
    pub fn exceptions(mut self, exceptions: CalendarExceptions) -> Self {
        self.exceptions = exceptions;
        self
    }

    /// Sets the adaptation policy.
    pub fn adaptation(mut self, policy: AdaptationPolicy) -> Self {
        self.adaptation = policy;
        self
    }

    /// Sets the deposit policy.
    pub fn deposit(mut self, policy: DepositPolicy) -> Self {
        self.deposit = policy;
        self
    }

    /// Sets the registration fee policy.
    pub fn registration(mut self, policy: RegistrationPolicy) -> Self {
        self.registration = policy;
        self
    }

    /// Sets the special-last-month policy.
    pub fn last_month(mut self, policy: LastMonthPolicy) -> Self {
        self.last_month = policy;
        self
    }

    /// Sets the invoice timing.
    pub fn invoice_timing(mut self, timing: InvoiceTiming) -> Self {
        self.timing = timing;
        self.timing_raw = None;
        self
    }

    /// Sets the invoice timing from a raw string, parsed at build time.
    ///
    /// Use this when the timing travels as text (stored records, request
    /// payloads); unknown values surface as
    /// `QuoteError::UnsupportedInvoiceTiming`.
    pub fn invoice_timing_str(mut self, timing: &str) -> Self {
        self.timing_raw = Some(timing.to_string());
        self
    }

    /// Builds the request.
    ///
    /// # Errors
    ///
    /// - `QuoteError::MissingField` when a required field was not set
    /// - `QuoteError::UnsupportedInvoiceTiming` when a raw timing string
    ///   does not parse
    /// - any validation error from [`QuoteRequest::validate`]
    pub fn build(self) -> Result<QuoteRequest, QuoteError> {
        let contract_start = self
            .contract_start
            .ok_or(QuoteError::MissingField {
                field: "contract_start",
            })?;
        let contract_end = self.contract_end.ok_or(QuoteError::MissingField {
            field: "contract_end",
        })?;
        let hourly_rate = self.hourly_rate.ok_or(QuoteError::MissingField {
            field: "hourly_rate",
        })?;
        let cycle = self.cycle.ok_or(QuoteError::MissingField { field: "cycle" })?;

        let timing = match &self.timing_raw {
            Some(raw) => raw
                .parse()
                .map_err(|_| QuoteError::UnsupportedInvoiceTiming { value: raw.clone() })?,
            None => self.timing,
        };

        let request = QuoteRequest {
            contract_start,
            contract_end,
            hourly_rate,
            cycle,
            exceptions: self.exceptions,
            adaptation: self.adaptation,
            deposit: self.deposit,
            registration: self.registration,
            last_month: self.last_month,
            timing,
        };
        request.validate()?;
        Ok(request)
    }
}
