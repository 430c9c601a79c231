//! Core date and monetary types.
//!
//! This module provides:
//! - `time`: calendar dates with month- and week-oriented arithmetic
//! - `money`: exact base-10 monetary amounts with a fixed 2-decimal scale
//! - `error`: structured error types for date and money construction
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`] from `time`
//! - [`Money`] from `money`
//! - [`DateError`], [`MoneyError`] from `error`

pub mod error;
pub mod money;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, MoneyError};
pub use money::Money;
pub use time::Date;
