//! Guarantee deposit policy.

use billing_core::types::Money;

use super::error::PolicyError;

/// How the guarantee deposit is computed.
///
/// Percentage deposits resolve against the amortized monthly cost of the
/// contract, not against the partial first month.
///
/// # Examples
///
/// ```
/// use billing_core::types::Money;
/// use billing_models::policy::DepositPolicy;
///
/// let monthly = Money::from_f64(650.0).unwrap();
///
/// let pct = DepositPolicy::percentage(10.0).unwrap();
/// assert_eq!(pct.amount_for(monthly).to_string(), "65.00");
///
/// let flat = DepositPolicy::flat(Money::from_f64(300.0).unwrap());
/// assert_eq!(flat.amount_for(monthly).to_string(), "300.00");
///
/// assert!(DepositPolicy::None.amount_for(monthly).is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DepositPolicy {
    /// No deposit is collected.
    #[default]
    None,
    /// A percentage of the amortized monthly cost.
    Percentage {
        /// Percentage of the monthly cost (e.g., 10.0 for 10%).
        percent: f64,
    },
    /// A flat deposit amount.
    Flat {
        /// The deposit amount.
        value: Money,
    },
}

impl DepositPolicy {
    /// Creates a percentage deposit policy.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InvalidPercentage` when `percent` is not
    /// finite or is negative.
    pub fn percentage(percent: f64) -> Result<Self, PolicyError> {
        if !percent.is_finite() || percent < 0.0 {
            return Err(PolicyError::InvalidPercentage { value: percent });
        }
        Ok(Self::Percentage { percent })
    }

    /// Creates a flat deposit policy.
    pub fn flat(value: Money) -> Self {
        Self::Flat { value }
    }

    /// Returns whether a deposit is collected.
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Resolves the deposit amount against the amortized monthly cost.
    pub fn amount_for(&self, monthly_cost: Money) -> Money {
        match self {
            Self::None => Money::zero(),
            Self::Percentage { percent } => monthly_cost.percentage(*percent),
            Self::Flat { value } => *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_validation() {
        assert!(DepositPolicy::percentage(0.0).is_ok());
        assert!(matches!(
            DepositPolicy::percentage(-5.0),
            Err(PolicyError::InvalidPercentage { .. })
        ));
        assert!(matches!(
            DepositPolicy::percentage(f64::INFINITY),
            Err(PolicyError::InvalidPercentage { .. })
        ));
    }

    #[test]
    fn test_amount_resolution() {
        let monthly = Money::from_f64(590.0).unwrap();
        assert_eq!(
            DepositPolicy::percentage(10.0).unwrap().amount_for(monthly),
            Money::from_f64(59.0).unwrap()
        );
        assert_eq!(
            DepositPolicy::flat(Money::from_f64(700.0).unwrap()).amount_for(monthly),
            Money::from_f64(700.0).unwrap()
        );
        assert!(DepositPolicy::None.amount_for(monthly).is_zero());
    }

    #[test]
    fn test_percentage_of_zero_monthly_cost() {
        // An empty amortization window resolves percentage deposits to zero.
        let policy = DepositPolicy::percentage(10.0).unwrap();
        assert!(policy.amount_for(Money::zero()).is_zero());
    }
}
