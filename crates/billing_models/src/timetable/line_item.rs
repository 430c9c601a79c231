//! Invoice line items.

use billing_core::types::Money;
use std::fmt;

/// Category of a priced invoice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineItemCategory {
    /// One-off registration fee.
    Registration,
    /// Guarantee deposit.
    Deposit,
    /// Introductory adaptation period.
    Adaptation,
    /// Regular attendance invoice.
    Invoice,
    /// Free-form line added by surrounding tooling.
    Custom,
    /// Extra hours beyond the planned attendance.
    Overtime,
}

impl LineItemCategory {
    /// Returns the canonical name of this category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Registration => "REGISTRATION",
            Self::Deposit => "DEPOSIT",
            Self::Adaptation => "ADAPTATION",
            Self::Invoice => "INVOICE",
            Self::Custom => "CUSTOM",
            Self::Overtime => "OVERTIME",
        }
    }
}

impl fmt::Display for LineItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One priced line of a timetable entry.
///
/// `quantity` carries the billed unit count (days for invoices, 1 for fees)
/// and may be fractional; `amount` is the exact price of the line.
///
/// # Examples
///
/// ```
/// use billing_core::types::Money;
/// use billing_models::timetable::{LineItem, LineItemCategory};
///
/// let line = LineItem::new(
///     Money::from_f64(650.0).unwrap(),
///     65.0 / 6.0,
///     LineItemCategory::Invoice,
/// );
/// assert_eq!(line.amount().to_string(), "650.00");
/// assert_eq!(line.category(), LineItemCategory::Invoice);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineItem {
    amount: Money,
    quantity: f64,
    category: LineItemCategory,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(amount: Money, quantity: f64, category: LineItemCategory) -> Self {
        Self {
            amount,
            quantity,
            category,
        }
    }

    /// Returns the line amount.
    #[inline]
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the billed quantity.
    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Returns the line category.
    #[inline]
    pub fn category(&self) -> LineItemCategory {
        self.category
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (qty {})", self.category, self.amount, self.quantity)
    }
}
