//! Billing policy validation errors.

use thiserror::Error;

/// Errors that can occur while building billing policies.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    /// Unrecognised invoice timing value.
    #[error("Unsupported invoice timing: {value}")]
    UnsupportedInvoiceTiming {
        /// The offending input.
        value: String,
    },

    /// A percentage must be finite and non-negative.
    #[error("Invalid percentage: {value}")]
    InvalidPercentage {
        /// The provided percentage.
        value: f64,
    },

    /// An hour quantity must be finite and non-negative.
    #[error("Invalid hour count: {value}")]
    InvalidHours {
        /// The provided hour count.
        value: f64,
    },
}
