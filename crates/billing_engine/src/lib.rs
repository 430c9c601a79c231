//! # Billing Engine (L3: Computation)
//!
//! The quote/billing-schedule generator: turns contract parameters into an
//! ordered timetable of monetary entries and a total cost.
//!
//! This crate provides:
//! - Calendar exceptions and the day-range counter (`calendar`)
//! - Adaptation period allocation (`adaptation`)
//! - Special last month detection (`last_month`)
//! - Even amortization with deposit absorption (`scheduler`)
//! - Timetable assembly (`assembler`)
//! - The request bundle and entry points (`request`, `quote`)
//! - An injectable observability hook (`observer`)
//!
//! ## Design Principles
//!
//! - **Purely functional**: one invocation consumes immutable inputs and
//!   returns one immutable result; no I/O, no shared state
//! - **All-or-nothing**: validation failures never yield a partial
//!   timetable
//! - **Absolute week resolution**: the planning cycle is indexed by weeks
//!   since a fixed epoch, never by ISO week-of-year arithmetic
//! - **Round once**: every monetary figure is rounded at construction and
//!   never re-rounded; the quote total is the exact sum of its entries
//!
//! ## Example
//!
//! ```
//! use billing_core::types::Date;
//! use billing_engine::quote::generate_quote;
//! use billing_engine::request::QuoteRequest;
//! use billing_models::planning::{DayPlan, PlanningCycle, TimeSlot, WeekPlan};
//! use billing_models::policy::DepositPolicy;
//!
//! let week = WeekPlan::new(vec![
//!     DayPlan::new(vec![TimeSlot::from_hhmm("08:00", "13:00").unwrap()]),
//!     DayPlan::off(),
//!     DayPlan::off(),
//!     DayPlan::off(),
//!     DayPlan::off(),
//! ])
//! .unwrap();
//!
//! let request = QuoteRequest::builder()
//!     .contract_start(Date::from_ymd(2024, 9, 2).unwrap())
//!     .contract_end(Date::from_ymd(2024, 11, 29).unwrap())
//!     .hourly_rate(10.0)
//!     .cycle(PlanningCycle::new(vec![week]).unwrap())
//!     .deposit(DepositPolicy::percentage(10.0).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let result = generate_quote(&request).unwrap();
//! let timetable_total: billing_core::types::Money =
//!     result.timetable().iter().map(|entry| entry.amount()).sum();
//! assert_eq!(result.total(), timetable_total);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod adaptation;
pub mod assembler;
pub mod calendar;
pub mod error;
pub mod last_month;
pub mod observer;
pub mod quote;
pub mod request;
pub mod scheduler;

pub use error::QuoteError;
pub use quote::{generate_quote, generate_quote_with};
pub use request::{QuoteRequest, QuoteRequestBuilder};
