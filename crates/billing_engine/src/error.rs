//! Quote computation error types.

use billing_core::types::Date;
use thiserror::Error;

/// Errors that can occur while computing a quote.
///
/// All variants are input-validation failures, detected before or during
/// the computation; nothing is retried and no partial timetable is ever
/// returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Contract end precedes contract start.
    #[error("Contract end {end} must not precede contract start {start}")]
    InvalidDateRange {
        /// The contract start date.
        start: Date,
        /// The contract end date.
        end: Date,
    },

    /// The planning cycle has no active days, or a required month span
    /// resolved to zero months.
    #[error("Planning cycle has no active days")]
    ZeroActivePlan,

    /// Contradictory configuration drove a computed amount negative.
    #[error("Amount would be negative: {context}")]
    NegativeAmount {
        /// Description of the offending amount.
        context: String,
    },

    /// Unrecognised invoice timing value.
    #[error("Unsupported invoice timing: {value}")]
    UnsupportedInvoiceTiming {
        /// The offending input.
        value: String,
    },

    /// Missing required field in builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
}
