//! Planning template validation errors.

use chrono::NaiveTime;
use thiserror::Error;

/// Errors that can occur while building a planning template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanningError {
    /// A slot's end time does not come after its start time.
    #[error("Slot start {from} must be before slot end {to}")]
    InvalidTimeRange {
        /// The slot start time.
        from: NaiveTime,
        /// The slot end time.
        to: NaiveTime,
    },

    /// Failed to parse a time-of-day string.
    #[error("Invalid time of day: {value}")]
    InvalidTime {
        /// The offending input.
        value: String,
    },

    /// A template week must hold exactly 5 or 7 days.
    #[error("A week template must have 5 or 7 days, got {len}")]
    InvalidWeekLength {
        /// The provided number of days.
        len: usize,
    },

    /// A planning cycle must contain at least one week.
    #[error("A planning cycle must contain at least one week")]
    EmptyCycle,

    /// The planning cycle has no active day in any week.
    #[error("Planning cycle has no active days")]
    ZeroActivePlan,
}
