//! Billing policies.
//!
//! This module provides:
//! - [`AdaptationPolicy`]: how the introductory adaptation period is billed
//! - [`DepositPolicy`]: guarantee deposit computation
//! - [`RegistrationPolicy`]: one-off registration fee
//! - [`LastMonthPolicy`]: threshold for billing a short final month
//!   standalone
//! - [`InvoiceTiming`]: whether invoices are dated at month start or end
//! - [`PolicyError`]: validation failures for the above
//!
//! Optional policies are modelled as enum variants (`DepositPolicy::None`,
//! `RegistrationPolicy::None`, `LastMonthPolicy::Disabled`) rather than
//! flag + payload pairs.

mod adaptation;
mod deposit;
mod error;
mod last_month;
mod registration;
mod timing;

pub use adaptation::AdaptationPolicy;
pub use deposit::DepositPolicy;
pub use error::PolicyError;
pub use last_month::LastMonthPolicy;
pub use registration::RegistrationPolicy;
pub use timing::InvoiceTiming;
