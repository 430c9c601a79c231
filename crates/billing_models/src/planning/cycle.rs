//! Repeating planning cycle with calendar resolution.

use billing_core::types::Date;

use super::day::DayPlan;
use super::error::PlanningError;
use super::week::WeekPlan;

/// A repeating sequence of template weeks.
///
/// The cycle repeats indefinitely over the calendar: a date resolves to the
/// template week at `absolute_week_index mod cycle_length` and to the
/// template day at its weekday index. Resolution uses the absolute week
/// index (weeks since the proleptic Monday epoch) rather than ISO
/// week-of-year arithmetic, which resets at year boundaries and would
/// silently mis-index the template.
///
/// # Examples
///
/// ```
/// use billing_core::types::Date;
/// use billing_models::planning::{DayPlan, PlanningCycle, TimeSlot, WeekPlan};
///
/// let monday_only = WeekPlan::new(vec![
///     DayPlan::new(vec![TimeSlot::from_hhmm("08:00", "13:00").unwrap()]),
///     DayPlan::off(),
///     DayPlan::off(),
///     DayPlan::off(),
///     DayPlan::off(),
/// ])
/// .unwrap();
/// let cycle = PlanningCycle::new(vec![monday_only]).unwrap();
///
/// assert!(cycle.is_active(Date::from_ymd(2024, 8, 19).unwrap())); // Monday
/// assert!(!cycle.is_active(Date::from_ymd(2024, 8, 20).unwrap())); // Tuesday
/// assert_eq!(cycle.avg_hours_per_day().unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanningCycle {
    weeks: Vec<WeekPlan>,
}

impl PlanningCycle {
    /// Creates a cycle from its ordered weeks.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::EmptyCycle` when no week is provided.
    pub fn new(weeks: Vec<WeekPlan>) -> Result<Self, PlanningError> {
        if weeks.is_empty() {
            return Err(PlanningError::EmptyCycle);
        }
        Ok(Self { weeks })
    }

    /// Returns the weeks of this cycle.
    #[inline]
    pub fn weeks(&self) -> &[WeekPlan] {
        &self.weeks
    }

    /// Returns the cycle length in weeks.
    #[inline]
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Returns whether the cycle is empty (never true for a constructed
    /// cycle).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Returns the index of the template week covering `date`.
    pub fn week_index_for(&self, date: Date) -> usize {
        date.absolute_week_index().rem_euclid(self.weeks.len() as i64) as usize
    }

    /// Resolves a calendar date to its template day, if the covering week
    /// has one at that weekday.
    ///
    /// A 5-day week yields `None` for Saturday and Sunday.
    pub fn resolve(&self, date: Date) -> Option<&DayPlan> {
        self.weeks[self.week_index_for(date)].day(date.weekday_index())
    }

    /// Returns whether `date` resolves to a day with at least one slot.
    pub fn is_active(&self, date: Date) -> bool {
        self.resolve(date).is_some_and(DayPlan::is_active)
    }

    /// Returns the mean weekly attendance duration over the cycle, in
    /// fractional hours.
    pub fn avg_weekly_hours(&self) -> f64 {
        let total: f64 = self.weeks.iter().map(WeekPlan::duration_hours).sum();
        total / self.weeks.len() as f64
    }

    /// Returns the mean number of active days per week over the cycle.
    pub fn avg_days_per_week(&self) -> f64 {
        let total: u32 = self.weeks.iter().map(WeekPlan::active_days_count).sum();
        f64::from(total) / self.weeks.len() as f64
    }

    /// Returns the mean attendance duration of an active day, in
    /// fractional hours.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::ZeroActivePlan` when the cycle has no active
    /// day at all.
    pub fn avg_hours_per_day(&self) -> Result<f64, PlanningError> {
        let days = self.avg_days_per_week();
        if days == 0.0 {
            return Err(PlanningError::ZeroActivePlan);
        }
        Ok(self.avg_weekly_hours() / days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::TimeSlot;

    fn day(from: &str, to: &str) -> DayPlan {
        DayPlan::new(vec![TimeSlot::from_hhmm(from, to).unwrap()])
    }

    /// Week 1: Mon 5h, Thu 6h, Fri 7h. Week 2: Mon 9h, Wed 3h.
    fn two_week_cycle() -> PlanningCycle {
        let week1 = WeekPlan::new(vec![
            day("08:00", "13:00"),
            DayPlan::off(),
            DayPlan::off(),
            day("08:00", "14:00"),
            day("07:00", "14:00"),
        ])
        .unwrap();
        let week2 = WeekPlan::new(vec![
            day("08:00", "17:00"),
            DayPlan::off(),
            day("09:00", "12:00"),
            DayPlan::off(),
            DayPlan::off(),
        ])
        .unwrap();
        PlanningCycle::new(vec![week1, week2]).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_rejects_empty_cycle() {
        assert_eq!(PlanningCycle::new(vec![]), Err(PlanningError::EmptyCycle));
    }

    #[test]
    fn test_averages() {
        let cycle = two_week_cycle();
        assert_eq!(cycle.avg_weekly_hours(), 15.0);
        assert_eq!(cycle.avg_days_per_week(), 2.5);
        assert_eq!(cycle.avg_hours_per_day().unwrap(), 6.0);
    }

    #[test]
    fn test_zero_active_plan() {
        let empty_week = WeekPlan::new(vec![DayPlan::off(); 5]).unwrap();
        let cycle = PlanningCycle::new(vec![empty_week]).unwrap();
        assert_eq!(
            cycle.avg_hours_per_day(),
            Err(PlanningError::ZeroActivePlan)
        );
    }

    #[test]
    fn test_resolution_alternates_weeks() {
        let cycle = two_week_cycle();
        // 2024-08-19 falls in an even absolute week: week 1 of the cycle.
        assert_eq!(cycle.week_index_for(d(2024, 8, 19)), 0);
        assert_eq!(cycle.week_index_for(d(2024, 8, 26)), 1);
        assert_eq!(cycle.week_index_for(d(2024, 9, 2)), 0);

        // Week 1: Monday and Thursday active, Wednesday not.
        assert!(cycle.is_active(d(2024, 8, 19)));
        assert!(!cycle.is_active(d(2024, 8, 21)));
        assert!(cycle.is_active(d(2024, 8, 22)));
        // Week 2: Monday and Wednesday active, Thursday not.
        assert!(cycle.is_active(d(2024, 8, 26)));
        assert!(cycle.is_active(d(2024, 8, 28)));
        assert!(!cycle.is_active(d(2024, 8, 29)));
    }

    #[test]
    fn test_weekends_inactive_for_five_day_weeks() {
        let cycle = two_week_cycle();
        assert!(cycle.resolve(d(2024, 8, 24)).is_none()); // Saturday
        assert!(cycle.resolve(d(2024, 8, 25)).is_none()); // Sunday
        assert!(!cycle.is_active(d(2024, 8, 24)));
    }

    #[test]
    fn test_resolution_continuous_across_year_boundary() {
        // ISO week numbering restarts between 2024-12-23 (W52) and
        // 2024-12-30 (2025-W01); cycle resolution must keep alternating.
        let cycle = two_week_cycle();
        let before = cycle.week_index_for(d(2024, 12, 23));
        let at_boundary = cycle.week_index_for(d(2024, 12, 30));
        let after = cycle.week_index_for(d(2025, 1, 6));
        assert_ne!(before, at_boundary);
        assert_ne!(at_boundary, after);
        assert_eq!(before, after);

        // Monday 2024-12-30 resolves to week 2: 9 hours.
        let day = cycle.resolve(d(2024, 12, 30)).unwrap();
        assert_eq!(day.duration_hours(), 9.0);
        // Monday 2025-01-06 resolves to week 1: 5 hours.
        let day = cycle.resolve(d(2025, 1, 6)).unwrap();
        assert_eq!(day.duration_hours(), 5.0);
    }

    #[test]
    fn test_single_week_cycle_repeats() {
        let week = WeekPlan::new(vec![
            day("08:00", "13:00"),
            DayPlan::off(),
            DayPlan::off(),
            DayPlan::off(),
            DayPlan::off(),
        ])
        .unwrap();
        let cycle = PlanningCycle::new(vec![week]).unwrap();
        for monday in [d(2024, 8, 5), d(2024, 8, 12), d(2025, 1, 6)] {
            assert_eq!(cycle.week_index_for(monday), 0);
            assert!(cycle.is_active(monday));
        }
    }
}
