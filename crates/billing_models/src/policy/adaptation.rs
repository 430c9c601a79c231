//! Adaptation period billing policy.

use billing_core::types::Money;

use super::error::PolicyError;

/// How the introductory adaptation period is billed.
///
/// The adaptation period consumes a prefix of active days from the first
/// billing month; its cost is charged separately from regular attendance.
///
/// # Examples
///
/// ```
/// use billing_core::types::Money;
/// use billing_models::policy::AdaptationPolicy;
///
/// let package = AdaptationPolicy::package(6, Money::from_f64(80.0).unwrap());
/// assert_eq!(package.days(6.0), 6.0);
/// assert_eq!(package.cost().to_string(), "80.00");
///
/// // 30 hours at an average of 6 hours per day spans 5 days
/// let hourly = AdaptationPolicy::hourly(30.0, Money::from_f64(8.0).unwrap()).unwrap();
/// assert_eq!(hourly.days(6.0), 5.0);
/// assert_eq!(hourly.cost().to_string(), "240.00");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdaptationPolicy {
    /// No adaptation period.
    #[default]
    None,
    /// A fixed package of days at a fixed overall price.
    Package {
        /// Number of adaptation days included in the package.
        days: u32,
        /// Total price of the package.
        cost: Money,
    },
    /// A number of hours billed at a dedicated adaptation rate.
    Hourly {
        /// Number of adaptation hours.
        hours: f64,
        /// Price of one adaptation hour.
        hourly_rate: Money,
    },
}

impl AdaptationPolicy {
    /// Creates a package policy.
    pub fn package(days: u32, cost: Money) -> Self {
        Self::Package { days, cost }
    }

    /// Creates an hourly policy.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InvalidHours` when `hours` is not finite or is
    /// negative.
    pub fn hourly(hours: f64, hourly_rate: Money) -> Result<Self, PolicyError> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(PolicyError::InvalidHours { value: hours });
        }
        Ok(Self::Hourly { hours, hourly_rate })
    }

    /// Returns whether an adaptation period is configured.
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the adaptation period length in days, possibly fractional.
    ///
    /// Package policies carry an explicit day count; hourly policies divide
    /// their hour budget by the plan's average hours per active day.
    pub fn days(&self, avg_hours_per_day: f64) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Package { days, .. } => f64::from(*days),
            Self::Hourly { hours, .. } => hours / avg_hours_per_day,
        }
    }

    /// Returns the adaptation cost.
    pub fn cost(&self) -> Money {
        match self {
            Self::None => Money::zero(),
            Self::Package { cost, .. } => *cost,
            Self::Hourly { hours, hourly_rate } => hourly_rate.times(*hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none() {
        assert!(!AdaptationPolicy::None.is_some());
        assert_eq!(AdaptationPolicy::None.days(6.0), 0.0);
        assert!(AdaptationPolicy::None.cost().is_zero());
    }

    #[test]
    fn test_package() {
        let policy = AdaptationPolicy::package(6, Money::from_f64(80.0).unwrap());
        assert!(policy.is_some());
        assert_eq!(policy.days(6.0), 6.0);
        // Package days ignore the average day length
        assert_eq!(policy.days(3.0), 6.0);
        assert_eq!(policy.cost(), Money::from_f64(80.0).unwrap());
    }

    #[test]
    fn test_hourly() {
        let policy = AdaptationPolicy::hourly(30.0, Money::from_f64(8.0).unwrap()).unwrap();
        assert_eq!(policy.days(6.0), 5.0);
        assert_eq!(policy.days(4.0), 7.5);
        assert_eq!(policy.cost(), Money::from_f64(240.0).unwrap());
    }

    #[test]
    fn test_hourly_rejects_bad_hours() {
        let rate = Money::from_f64(8.0).unwrap();
        assert!(matches!(
            AdaptationPolicy::hourly(-1.0, rate),
            Err(PolicyError::InvalidHours { .. })
        ));
        assert!(matches!(
            AdaptationPolicy::hourly(f64::NAN, rate),
            Err(PolicyError::InvalidHours { .. })
        ));
    }
}
