//! Attendance time slots.

use chrono::NaiveTime;
use std::fmt;

use super::error::PlanningError;

/// A single attendance interval within a day.
///
/// The interval is `[from, to)` within one calendar day; `to` must come
/// strictly after `from`. Duration is expressed in fractional hours.
///
/// # Examples
///
/// ```
/// use billing_models::planning::TimeSlot;
///
/// let slot = TimeSlot::from_hhmm("08:00", "13:30").unwrap();
/// assert_eq!(slot.duration_hours(), 5.5);
///
/// // End must come after start
/// assert!(TimeSlot::from_hhmm("13:00", "08:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSlot {
    /// Start of the interval.
    from: NaiveTime,
    /// End of the interval (exclusive).
    to: NaiveTime,
}

impl TimeSlot {
    /// Creates a slot from start and end times.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidTimeRange` when `to <= from`.
    pub fn new(from: NaiveTime, to: NaiveTime) -> Result<Self, PlanningError> {
        if to <= from {
            return Err(PlanningError::InvalidTimeRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Creates a slot from two `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidTime` when a string does not parse,
    /// `PlanningError::InvalidTimeRange` when `to <= from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_models::planning::TimeSlot;
    ///
    /// let slot = TimeSlot::from_hhmm("09:15", "12:00").unwrap();
    /// assert_eq!(slot.duration_hours(), 2.75);
    /// assert!(TimeSlot::from_hhmm("9h15", "12:00").is_err());
    /// ```
    pub fn from_hhmm(from: &str, to: &str) -> Result<Self, PlanningError> {
        let parse = |value: &str| {
            NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| PlanningError::InvalidTime {
                value: value.to_string(),
            })
        };
        Self::new(parse(from)?, parse(to)?)
    }

    /// Returns the start of the interval.
    #[inline]
    pub fn from_time(&self) -> NaiveTime {
        self.from
    }

    /// Returns the end of the interval.
    #[inline]
    pub fn to_time(&self) -> NaiveTime {
        self.to
    }

    /// Returns the slot duration in fractional hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        (self.to - self.from).num_minutes() as f64 / 60.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.from.format("%H:%M"),
            self.to.format("%H:%M")
        )
    }
}
