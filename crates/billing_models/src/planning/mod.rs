//! Attendance planning templates.
//!
//! This module provides:
//! - [`TimeSlot`]: a single attendance interval within a day
//! - [`DayPlan`]: the ordered slots of one template day
//! - [`WeekPlan`]: a fixed-length (5- or 7-day) template week
//! - [`PlanningCycle`]: a repeating sequence of template weeks with
//!   calendar resolution and duration averages
//! - [`PlanningError`]: validation failures for the above
//!
//! # Examples
//!
//! ```
//! use billing_models::planning::{DayPlan, PlanningCycle, TimeSlot, WeekPlan};
//!
//! let monday = DayPlan::new(vec![TimeSlot::from_hhmm("08:00", "13:00").unwrap()]);
//! let week = WeekPlan::new(vec![
//!     monday,
//!     DayPlan::off(),
//!     DayPlan::off(),
//!     DayPlan::off(),
//!     DayPlan::off(),
//! ])
//! .unwrap();
//!
//! let cycle = PlanningCycle::new(vec![week]).unwrap();
//! assert_eq!(cycle.avg_days_per_week(), 1.0);
//! assert_eq!(cycle.avg_weekly_hours(), 5.0);
//! ```

mod cycle;
mod day;
mod error;
mod slot;
mod week;

pub use cycle::PlanningCycle;
pub use day::DayPlan;
pub use error::PlanningError;
pub use slot::TimeSlot;
pub use week::WeekPlan;
