//! Registration fee policy.

use billing_core::types::Money;

/// One-off registration fee, merged into the first-month invoice.
///
/// # Examples
///
/// ```
/// use billing_core::types::Money;
/// use billing_models::policy::RegistrationPolicy;
///
/// let policy = RegistrationPolicy::fee(Money::from_f64(90.0).unwrap());
/// assert_eq!(policy.amount().to_string(), "90.00");
/// assert!(RegistrationPolicy::None.amount().is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegistrationPolicy {
    /// No registration fee.
    #[default]
    None,
    /// A flat registration fee.
    Fee {
        /// The fee amount.
        amount: Money,
    },
}

impl RegistrationPolicy {
    /// Creates a flat registration fee policy.
    pub fn fee(amount: Money) -> Self {
        Self::Fee { amount }
    }

    /// Returns whether a registration fee is charged.
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the fee amount (zero when no fee is charged).
    pub fn amount(&self) -> Money {
        match self {
            Self::None => Money::zero(),
            Self::Fee { amount } => *amount,
        }
    }
}
