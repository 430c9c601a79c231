//! # billing_core: Foundation Types for the nido-billing Workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! billing_core serves as the bottom layer of the 3-layer architecture,
//! providing:
//! - Calendar dates with billing-oriented arithmetic: `Date` (`types::time`)
//! - Exact base-10 monetary amounts: `Money` (`types::money`)
//! - Error types: `DateError`, `MoneyError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other billing_* crates, with minimal
//! external dependencies:
//! - chrono: date arithmetic
//! - rust_decimal: exact base-10 decimal amounts
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use billing_core::types::{Date, Money};
//!
//! // Date operations
//! let start = Date::from_ymd(2024, 8, 21).unwrap();
//! assert_eq!(start.end_of_month(), Date::from_ymd(2024, 8, 31).unwrap());
//!
//! // Money is rounded to 2 decimal places exactly once, at construction
//! let daily = Money::from_f64(60.0).unwrap();
//! let monthly = daily.times(65.0 / 6.0);
//! assert_eq!(monthly.to_string(), "650.00");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): enable serialisation for `Date` and `Money`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
