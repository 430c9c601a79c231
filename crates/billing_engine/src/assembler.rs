//! Timetable assembly.
//!
//! Emits the final ordered timetable as a strict linear sequence:
//! an optional deposit entry, the first-month invoice, one entry per
//! amortized month, and an optional special-last-month invoice. Invoice
//! timing affects billing dates only, never amounts.

use billing_core::types::{Date, Money};
use billing_models::policy::InvoiceTiming;
use billing_models::timetable::{LineItem, LineItemCategory, QuoteResult, TimetableEntry};

use crate::adaptation::AdaptationOutcome;
use crate::last_month::SpecialLastMonth;
use crate::scheduler::MonthlySchedule;

/// Inputs the assembler combines into the final result.
#[derive(Debug, Clone)]
pub struct AssemblyInput<'a> {
    /// Contract start date; the deposit entry is dated here.
    pub contract_start: Date,
    /// Billing-date convention for month entries.
    pub timing: InvoiceTiming,
    /// Average cost of one active day.
    pub daily_cost: Money,
    /// First-month and adaptation allocation.
    pub adaptation: &'a AdaptationOutcome,
    /// Whether a deposit policy is configured (a zero deposit entry is
    /// still emitted when it is).
    pub has_deposit: bool,
    /// Whether an adaptation policy is configured.
    pub has_adaptation: bool,
    /// Registration fee merged into the first-month invoice (zero when no
    /// fee is charged).
    pub registration_fee: Money,
    /// The amortized monthly schedule.
    pub schedule: &'a MonthlySchedule,
    /// The special last month, if detected.
    pub special: Option<&'a SpecialLastMonth>,
}

/// Assembles the ordered timetable and the quote result.
///
/// `total` is derived as the exact sum of the emitted entry amounts; no
/// separate total formula exists.
pub fn assemble(input: AssemblyInput<'_>) -> QuoteResult {
    let mut timetable = Vec::with_capacity(
        2 + input.schedule.months().len() + usize::from(input.special.is_some()),
    );

    if input.has_deposit {
        timetable.push(TimetableEntry::new(
            input.contract_start,
            vec![LineItem::new(
                input.schedule.deposit_amount(),
                1.0,
                LineItemCategory::Deposit,
            )],
        ));
    }

    timetable.push(first_month_entry(&input));

    for (index, amount) in input.schedule.months().iter().enumerate() {
        let month = input.schedule.window_start().add_months(index as u32);
        timetable.push(TimetableEntry::new(
            input.timing.billing_date(month),
            vec![LineItem::new(
                *amount,
                input.schedule.days_per_month(),
                LineItemCategory::Invoice,
            )],
        ));
    }

    let mut last_month_amount = Money::zero();
    if let Some(special) = input.special {
        let amount = special.amount(input.daily_cost);
        last_month_amount = amount;
        timetable.push(TimetableEntry::new(
            input.timing.billing_date(special.month_start()),
            vec![LineItem::new(
                amount,
                f64::from(special.active_days()),
                LineItemCategory::Invoice,
            )],
        ));
    }

    QuoteResult::new(
        input.schedule.deposit_amount(),
        input.adaptation.first_month_cost(),
        input.adaptation.adaptation_cost(),
        input.registration_fee,
        input.schedule.remaining_cost(input.daily_cost),
        last_month_amount,
        timetable,
    )
}

/// Builds the first-month invoice: regular attendance, the adaptation fee,
/// and the registration fee merged into one entry.
fn first_month_entry(input: &AssemblyInput<'_>) -> TimetableEntry {
    let mut items = vec![LineItem::new(
        input.adaptation.first_month_cost(),
        input.adaptation.billable_days(),
        LineItemCategory::Invoice,
    )];
    if input.has_adaptation {
        items.push(LineItem::new(
            input.adaptation.adaptation_cost(),
            input.adaptation.adaptation_days(),
            LineItemCategory::Adaptation,
        ));
    }
    if !input.registration_fee.is_zero() {
        items.push(LineItem::new(
            input.registration_fee,
            1.0,
            LineItemCategory::Registration,
        ));
    }
    TimetableEntry::new(
        input.timing.billing_date(input.contract_start.first_of_month()),
        items,
    )
}
