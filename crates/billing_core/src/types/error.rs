//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: errors from date construction and parsing
//! - `MoneyError`: errors from monetary amount construction

use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: invalid date components (e.g., February 30th)
/// - `ParseError`: failed to parse date string
///
/// # Examples
/// ```
/// use billing_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Money-related errors.
///
/// # Variants
/// - `Unrepresentable`: a floating-point input was not finite or exceeded
///   the representable decimal range
///
/// # Examples
/// ```
/// use billing_core::types::MoneyError;
///
/// let err = MoneyError::Unrepresentable { value: f64::NAN.to_string() };
/// assert!(format!("{}", err).contains("NaN"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The input value cannot be represented as an exact decimal amount.
    #[error("Unrepresentable monetary value: {value}")]
    Unrepresentable {
        /// Textual rendering of the offending value.
        value: String,
    },
}
