//! Timetable entries.

use billing_core::types::{Date, Money};
use std::fmt;

use super::line_item::LineItem;

/// One billing event: a date, a total amount, and its itemized lines.
///
/// The entry amount is always the exact sum of its line amounts.
///
/// # Examples
///
/// ```
/// use billing_core::types::{Date, Money};
/// use billing_models::timetable::{LineItem, LineItemCategory, TimetableEntry};
///
/// let entry = TimetableEntry::new(
///     Date::from_ymd(2024, 8, 31).unwrap(),
///     vec![
///         LineItem::new(Money::from_f64(80.0).unwrap(), 6.0, LineItemCategory::Adaptation),
///         LineItem::new(Money::from_f64(90.0).unwrap(), 1.0, LineItemCategory::Registration),
///     ],
/// );
/// assert_eq!(entry.amount().to_string(), "170.00");
/// assert_eq!(entry.items().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimetableEntry {
    billing_date: Date,
    amount: Money,
    items: Vec<LineItem>,
}

impl TimetableEntry {
    /// Creates an entry from its billing date and ordered lines; the entry
    /// amount is derived as the exact sum of the line amounts.
    pub fn new(billing_date: Date, items: Vec<LineItem>) -> Self {
        let amount = items.iter().map(LineItem::amount).sum();
        Self {
            billing_date,
            amount,
            items,
        }
    }

    /// Returns the billing date.
    #[inline]
    pub fn billing_date(&self) -> Date {
        self.billing_date
    }

    /// Returns the entry amount.
    #[inline]
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the itemized lines.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

impl fmt::Display for TimetableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.billing_date, self.amount)
    }
}
