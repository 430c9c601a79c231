//! Special last month policy.

/// Threshold policy for billing a short final calendar month standalone.
///
/// When enabled, a final month whose active-day count is at or below the
/// threshold is billed as its own timetable entry instead of being folded
/// into the even amortization.
///
/// # Examples
///
/// ```
/// use billing_models::policy::LastMonthPolicy;
///
/// let policy = LastMonthPolicy::enabled(5);
/// assert!(policy.is_special(3));
/// assert!(policy.is_special(5));
/// assert!(!policy.is_special(6));
/// assert!(!LastMonthPolicy::Disabled.is_special(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LastMonthPolicy {
    /// The final month is always amortized with the rest of the contract.
    #[default]
    Disabled,
    /// The final month is billed standalone when short enough.
    Enabled {
        /// Maximum active-day count for the final month to qualify.
        min_days_threshold: u32,
    },
}

impl LastMonthPolicy {
    /// Creates an enabled policy with the given threshold.
    pub fn enabled(min_days_threshold: u32) -> Self {
        Self::Enabled { min_days_threshold }
    }

    /// Returns whether a final month with `active_days` qualifies as
    /// special.
    pub fn is_special(&self, active_days: u32) -> bool {
        match self {
            Self::Disabled => false,
            Self::Enabled { min_days_threshold } => active_days <= *min_days_threshold,
        }
    }
}
