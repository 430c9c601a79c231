//! Template day definition.

use super::slot::TimeSlot;

/// The ordered attendance slots of one template day.
///
/// A day with no slot is inactive: the child is not expected and the day
/// never counts towards billing.
///
/// # Examples
///
/// ```
/// use billing_models::planning::{DayPlan, TimeSlot};
///
/// let day = DayPlan::new(vec![
///     TimeSlot::from_hhmm("08:00", "12:00").unwrap(),
///     TimeSlot::from_hhmm("14:00", "17:00").unwrap(),
/// ]);
/// assert!(day.is_active());
/// assert_eq!(day.duration_hours(), 7.0);
///
/// assert!(!DayPlan::off().is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayPlan {
    slots: Vec<TimeSlot>,
}

impl DayPlan {
    /// Creates a day from its ordered slots.
    pub fn new(slots: Vec<TimeSlot>) -> Self {
        Self { slots }
    }

    /// Creates an inactive day (no attendance).
    pub fn off() -> Self {
        Self { slots: Vec::new() }
    }

    /// Returns the slots of this day.
    #[inline]
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Returns whether the day has at least one slot.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Returns the total attendance duration in fractional hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.slots.iter().map(TimeSlot::duration_hours).sum()
    }
}
