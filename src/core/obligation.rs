//! Obligation model - derived recurring expectations, never persisted.
//!
//! An [`Obligation`] is a single expected financial event for one period:
//! rent owed by an active roommate, or a mortgage debit owed on a financed
//! property. Obligations are recomputed from the portfolio snapshot on every
//! evaluation; they carry no identity and no lifecycle of their own.

use chrono::NaiveDate;
use tracing::warn;

use crate::{
    core::period::Period,
    entities::{ActivityStatus, CATEGORY_MORTGAGE, CATEGORY_RENT, TransactionKind,
        TransactionStatus, property, roommate, transaction},
};

/// Complete mortgage configuration extracted from a property.
///
/// The three mandatory fields (`monthly_amount`, `billing_day`,
/// `start_date`) must all be present for the obligation to exist at all;
/// a partially-filled configuration is ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MortgageTerms {
    /// Monthly debit amount
    pub monthly_amount: f64,
    /// Day of month (1-31) the debit is scheduled
    pub billing_day: u32,
    /// First day the obligation applies (inclusive)
    pub start_date: NaiveDate,
    /// Last day the obligation applies (inclusive), if bounded
    pub end_date: Option<NaiveDate>,
}

impl MortgageTerms {
    /// Extracts the mortgage terms of a property, or `None` when the
    /// configuration is absent or incomplete. A partially-set
    /// configuration (or an out-of-range billing day) is logged and
    /// treated as "no mortgage" rather than an error.
    #[must_use]
    pub fn of(property: &property::Model) -> Option<Self> {
        let any_set = property.monthly_mortgage.is_some()
            || property.mortgage_billing_day.is_some()
            || property.mortgage_start_date.is_some();

        let (Some(monthly_amount), Some(billing_day), Some(start_date)) = (
            property.monthly_mortgage,
            property.mortgage_billing_day,
            property.mortgage_start_date,
        ) else {
            if any_set {
                warn!(
                    property_id = property.id,
                    "incomplete mortgage configuration, skipping"
                );
            }
            return None;
        };

        if !(1..=31).contains(&billing_day) {
            warn!(
                property_id = property.id,
                billing_day, "mortgage billing day out of range, skipping"
            );
            return None;
        }

        Some(Self {
            monthly_amount,
            billing_day: billing_day.unsigned_abs(),
            start_date,
            end_date: property.mortgage_end_date,
        })
    }

    /// Whether the obligation applies on the given date. The start date is
    /// inclusive and so is the end date: a mortgage whose `end_date` equals
    /// `as_of` is still billable that day.
    #[must_use]
    pub fn in_force_on(&self, as_of: NaiveDate) -> bool {
        self.start_date <= as_of && self.end_date.is_none_or(|end| end >= as_of)
    }
}

/// What kind of recurring event an obligation represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObligationKind {
    /// Monthly rent owed by a roommate
    Rent,
    /// Monthly mortgage debit owed on a property
    Mortgage,
}

/// One expected financial event for one (subject, period) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Obligation {
    /// Rent or mortgage
    pub kind: ObligationKind,
    /// Property the obligation is attached to
    pub property_id: i64,
    /// Owing roommate, for rent obligations
    pub roommate_id: Option<i64>,
    /// Period the obligation is owed for
    pub period: Period,
    /// Amount expected for the period
    pub expected_amount: f64,
    /// Day of month the payment is due (unclamped; resolve through
    /// [`Period::day_clamped`])
    pub due_day: u32,
}

impl Obligation {
    /// The concrete due date of this obligation within its period.
    #[must_use]
    pub fn due_date(&self) -> NaiveDate {
        self.period.day_clamped(self.due_day)
    }

    /// Whether the given transaction settles this obligation.
    ///
    /// Rent requires a completed `revenu` with category `"loyer"` from the
    /// owing roommate, dated inside the period. The check is existence
    /// only; the amount is deliberately not reconciled, so a partial
    /// payment counts as paid (preserved legacy behavior).
    ///
    /// Mortgage accepts any `depense` with category `"credit"` on the
    /// property inside the period, manual or automatic, regardless of
    /// settlement status (legacy predicate).
    #[must_use]
    pub fn is_satisfied_by(&self, tx: &transaction::Model) -> bool {
        if !self.period.contains(tx.date) {
            return false;
        }
        match self.kind {
            ObligationKind::Rent => {
                tx.roommate_id == self.roommate_id
                    && tx.kind == TransactionKind::Income
                    && tx.status == TransactionStatus::Completed
                    && tx.category.as_deref() == Some(CATEGORY_RENT)
            }
            ObligationKind::Mortgage => {
                tx.property_id == self.property_id
                    && tx.kind == TransactionKind::Expense
                    && tx.category.as_deref() == Some(CATEGORY_MORTGAGE)
            }
        }
    }
}

/// Rent obligations of every active roommate for the period. The due day
/// is the first of the month: rent is owed for the whole period and is
/// late as soon as the period has no completed payment.
#[must_use]
pub fn rent_obligations(roommates: &[roommate::Model], period: Period) -> Vec<Obligation> {
    roommates
        .iter()
        .filter(|r| r.status == ActivityStatus::Active)
        .map(|r| Obligation {
            kind: ObligationKind::Rent,
            property_id: r.property_id,
            roommate_id: Some(r.id),
            period,
            expected_amount: r.monthly_rent,
            due_day: 1,
        })
        .collect()
}

/// Mortgage obligations of every active property whose complete mortgage
/// configuration is in force on `as_of`.
#[must_use]
pub fn mortgage_obligations(
    properties: &[property::Model],
    period: Period,
    as_of: NaiveDate,
) -> Vec<Obligation> {
    properties
        .iter()
        .filter(|p| p.status == ActivityStatus::Active)
        .filter_map(|p| {
            let terms = MortgageTerms::of(p)?;
            terms.in_force_on(as_of).then(|| Obligation {
                kind: ObligationKind::Mortgage,
                property_id: p.id,
                roommate_id: None,
                period,
                expected_amount: terms.monthly_amount,
                due_day: terms.billing_day,
            })
        })
        .collect()
}
