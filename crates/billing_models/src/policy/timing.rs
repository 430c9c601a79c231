//! Invoice timing.

use billing_core::types::Date;
use std::fmt;
use std::str::FromStr;

use super::error::PolicyError;

/// Whether a month's invoice is dated at the start or the end of the
/// covered calendar month.
///
/// Timing affects billing dates only, never amounts.
///
/// # Examples
///
/// ```
/// use billing_core::types::Date;
/// use billing_models::policy::InvoiceTiming;
///
/// let month = Date::from_ymd(2024, 9, 1).unwrap();
/// assert_eq!(
///     InvoiceTiming::EndOfMonth.billing_date(month),
///     Date::from_ymd(2024, 9, 30).unwrap()
/// );
/// assert_eq!(InvoiceTiming::StartOfMonth.billing_date(month), month);
///
/// let timing: InvoiceTiming = "END_OF_MONTH".parse().unwrap();
/// assert_eq!(timing, InvoiceTiming::EndOfMonth);
/// assert!("mid_month".parse::<InvoiceTiming>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvoiceTiming {
    /// Invoices are dated on the last day of the covered month.
    #[default]
    EndOfMonth,
    /// Invoices are dated on the first day of the covered month.
    StartOfMonth,
}

impl InvoiceTiming {
    /// Returns the billing date for a month, given any date inside it.
    pub fn billing_date(&self, month: Date) -> Date {
        match self {
            Self::EndOfMonth => month.end_of_month(),
            Self::StartOfMonth => month.first_of_month(),
        }
    }

    /// Returns the canonical name of this timing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EndOfMonth => "END_OF_MONTH",
            Self::StartOfMonth => "START_OF_MONTH",
        }
    }
}

impl FromStr for InvoiceTiming {
    type Err = PolicyError;

    /// Parses a timing name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::UnsupportedInvoiceTiming` for unrecognised
    /// values.
    fn from_str(s: &str) -> Result<Self, PolicyError> {
        match s.to_ascii_uppercase().as_str() {
            "END_OF_MONTH" => Ok(Self::EndOfMonth),
            "START_OF_MONTH" => Ok(Self::StartOfMonth),
            _ => Err(PolicyError::UnsupportedInvoiceTiming {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for InvoiceTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
