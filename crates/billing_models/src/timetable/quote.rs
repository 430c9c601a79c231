//! Computed quote results.

use billing_core::types::Money;

use super::entry::TimetableEntry;

/// The fully computed quote: headline amounts plus the ordered timetable.
///
/// `total` is the exact sum of the emitted entry amounts; the headline
/// fields break the same money down by origin and never disagree with the
/// timetable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuoteResult {
    total: Money,
    deposit_amount: Money,
    first_month_cost: Money,
    adaptation_cost: Money,
    registration_fee: Money,
    remaining_contract_cost: Money,
    last_month_amount: Money,
    timetable: Vec<TimetableEntry>,
}

impl QuoteResult {
    /// Creates a quote result; `total` is derived as the exact sum of the
    /// timetable entry amounts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        deposit_amount: Money,
        first_month_cost: Money,
        adaptation_cost: Money,
        registration_fee: Money,
        remaining_contract_cost: Money,
        last_month_amount: Money,
        timetable: Vec<TimetableEntry>,
    ) -> Self {
        let total = timetable.iter().map(TimetableEntry::amount).sum();
        Self {
            total,
            deposit_amount,
            first_month_cost,
            adaptation_cost,
            registration_fee,
            remaining_contract_cost,
            last_month_amount,
            timetable,
        }
    }

    /// Returns the total of all timetable entries.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Returns the deposit amount (zero without a deposit policy).
    #[inline]
    pub fn deposit_amount(&self) -> Money {
        self.deposit_amount
    }

    /// Returns the attendance cost billed for the partial first month,
    /// excluding adaptation and fees.
    #[inline]
    pub fn first_month_cost(&self) -> Money {
        self.first_month_cost
    }

    /// Returns the adaptation period cost.
    #[inline]
    pub fn adaptation_cost(&self) -> Money {
        self.adaptation_cost
    }

    /// Returns the registration fee.
    #[inline]
    pub fn registration_fee(&self) -> Money {
        self.registration_fee
    }

    /// Returns the pre-adjustment cost of the amortization window.
    #[inline]
    pub fn remaining_contract_cost(&self) -> Money {
        self.remaining_contract_cost
    }

    /// Returns the standalone amount of the special last month (zero when
    /// the final month is amortized).
    #[inline]
    pub fn last_month_amount(&self) -> Money {
        self.last_month_amount
    }

    /// Returns the ordered timetable.
    #[inline]
    pub fn timetable(&self) -> &[TimetableEntry] {
        &self.timetable
    }

    /// Returns the number of timetable entries.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.timetable.len()
    }
}
