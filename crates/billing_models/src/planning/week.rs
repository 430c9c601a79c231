//! Template week definition.

use super::day::DayPlan;
use super::error::PlanningError;

/// A fixed-length template week of 5 (Monday to Friday) or 7 (Monday to
/// Sunday) days.
///
/// Day 0 is Monday. Weekday indexes past the end of a 5-day week resolve to
/// no template day, which makes weekends inactive for 5-day plans.
///
/// # Examples
///
/// ```
/// use billing_models::planning::{DayPlan, TimeSlot, WeekPlan};
///
/// let week = WeekPlan::new(vec![
///     DayPlan::new(vec![TimeSlot::from_hhmm("08:00", "13:00").unwrap()]),
///     DayPlan::off(),
///     DayPlan::off(),
///     DayPlan::new(vec![TimeSlot::from_hhmm("08:00", "14:00").unwrap()]),
///     DayPlan::off(),
/// ])
/// .unwrap();
///
/// assert_eq!(week.active_days_count(), 2);
/// assert_eq!(week.duration_hours(), 11.0);
/// assert!(week.day(5).is_none()); // Saturday of a 5-day week
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekPlan {
    days: Vec<DayPlan>,
}

impl WeekPlan {
    /// Creates a week from its ordered days.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidWeekLength` unless exactly 5 or 7
    /// days are provided.
    pub fn new(days: Vec<DayPlan>) -> Result<Self, PlanningError> {
        if days.len() != 5 && days.len() != 7 {
            return Err(PlanningError::InvalidWeekLength { len: days.len() });
        }
        Ok(Self { days })
    }

    /// Returns the days of this week.
    #[inline]
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    /// Returns the template day at `weekday_index` (Monday = 0), if the
    /// week covers it.
    #[inline]
    pub fn day(&self, weekday_index: usize) -> Option<&DayPlan> {
        self.days.get(weekday_index)
    }

    /// Returns the number of active days in this week.
    #[inline]
    pub fn active_days_count(&self) -> u32 {
        self.days.iter().filter(|day| day.is_active()).count() as u32
    }

    /// Returns the total attendance duration of this week in fractional
    /// hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.days.iter().map(DayPlan::duration_hours).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::TimeSlot;

    fn active(from: &str, to: &str) -> DayPlan {
        DayPlan::new(vec![TimeSlot::from_hhmm(from, to).unwrap()])
    }

    #[test]
    fn test_five_day_week() {
        let week = WeekPlan::new(vec![
            active("08:00", "13:00"),
            DayPlan::off(),
            DayPlan::off(),
            active("08:00", "14:00"),
            active("07:00", "14:00"),
        ])
        .unwrap();

        assert_eq!(week.active_days_count(), 3);
        assert_eq!(week.duration_hours(), 18.0);
        assert!(week.day(0).unwrap().is_active());
        assert!(!week.day(1).unwrap().is_active());
        assert!(week.day(5).is_none());
        assert!(week.day(6).is_none());
    }

    #[test]
    fn test_seven_day_week() {
        let mut days = vec![DayPlan::off(); 7];
        days[5] = active("09:00", "12:00");
        let week = WeekPlan::new(days).unwrap();

        assert_eq!(week.active_days_count(), 1);
        assert!(week.day(5).unwrap().is_active());
    }

    #[test]
    fn test_rejects_other_lengths() {
        for len in [0, 1, 4, 6, 8] {
            assert_eq!(
                WeekPlan::new(vec![DayPlan::off(); len]),
                Err(PlanningError::InvalidWeekLength { len })
            );
        }
    }
}
