//! Dashboard aggregation - read-only math over a portfolio snapshot.
//!
//! Everything here is a pure single pass over in-memory collections,
//! recomputed on every dashboard refresh: income/expense totals, the
//! per-user summary card, the trailing-months cash-flow series, and the
//! per-roommate rent status for one period.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    core::{period::Period, snapshot::Snapshot},
    entities::{ActivityStatus, CATEGORY_RENT, TransactionKind, TransactionStatus, roommate,
        transaction},
};

/// Income/expense totals over a set of transactions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    /// Sum of all income amounts
    pub income: f64,
    /// Sum of all expense amounts
    pub expenses: f64,
    /// `income - expenses`
    pub balance: f64,
}

/// The dashboard summary card for one user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    /// Number of properties in the portfolio
    pub property_count: usize,
    /// Number of roommates across those properties
    pub roommate_count: usize,
    /// All-time income
    pub income: f64,
    /// All-time expenses
    pub expenses: f64,
    /// All-time balance
    pub balance: f64,
    /// Income recorded but not yet settled (`en attente`)
    pub pending_income: f64,
    /// Sum of active roommates' monthly rent: next month's expected income
    pub expected_monthly_rent: f64,
}

/// One month's bucket in the cash-flow series.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyFlow {
    /// The bucket's period
    pub period: Period,
    /// French display label, e.g. `"juin 2024"`
    pub label: String,
    /// Income dated in the period
    pub income: f64,
    /// Expenses dated in the period
    pub expenses: f64,
    /// `income - expenses`
    pub balance: f64,
}

/// Rent situation of one roommate for one period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RentStatus {
    /// Whether a completed rent payment exists in the period
    pub paid: bool,
    /// The roommate's expected monthly rent
    pub expected_amount: f64,
}

/// Sums income and expenses over the given transactions. All settlement
/// statuses count, cancelled rows included (preserved legacy behavior).
#[must_use]
pub fn transaction_totals(transactions: &[transaction::Model]) -> Totals {
    let mut totals = Totals::default();
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => totals.income += tx.amount,
            TransactionKind::Expense => totals.expenses += tx.amount,
        }
    }
    totals.balance = totals.income - totals.expenses;
    totals
}

/// Builds the dashboard summary card from a snapshot.
#[must_use]
pub fn dashboard_summary(snapshot: &Snapshot) -> DashboardSummary {
    let totals = transaction_totals(&snapshot.transactions);

    let pending_income = snapshot
        .transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income && t.status == TransactionStatus::Pending)
        .map(|t| t.amount)
        .sum();

    let expected_monthly_rent = snapshot
        .roommates
        .iter()
        .filter(|r| r.status == ActivityStatus::Active)
        .map(|r| r.monthly_rent)
        .sum();

    DashboardSummary {
        property_count: snapshot.properties.len(),
        roommate_count: snapshot.roommates.len(),
        income: totals.income,
        expenses: totals.expenses,
        balance: totals.balance,
        pending_income,
        expected_monthly_rent,
    }
}

/// The trailing `months` cash-flow buckets ending with the month of
/// `as_of`, oldest first. Transactions dated outside the window are
/// ignored; empty months produce zeroed buckets.
#[must_use]
pub fn monthly_cash_flow(
    transactions: &[transaction::Model],
    months: usize,
    as_of: NaiveDate,
) -> Vec<MonthlyFlow> {
    let mut buckets: Vec<MonthlyFlow> = Period::from_date(as_of)
        .last_n(months)
        .into_iter()
        .map(|period| MonthlyFlow {
            period,
            label: period.label(),
            income: 0.0,
            expenses: 0.0,
            balance: 0.0,
        })
        .collect();

    for tx in transactions {
        let Some(bucket) = buckets.iter_mut().find(|b| b.period.contains(tx.date)) else {
            continue;
        };
        match tx.kind {
            TransactionKind::Income => bucket.income += tx.amount,
            TransactionKind::Expense => bucket.expenses += tx.amount,
        }
    }

    for bucket in &mut buckets {
        bucket.balance = bucket.income - bucket.expenses;
    }
    buckets
}

/// Per-roommate rent status for one period, keyed by roommate id. Only
/// active roommates appear. The "paid" predicate is the display one: a
/// completed income from the roommate in the period whose category is
/// `"loyer"` or whose description mentions it (legacy rows predate the
/// category field).
#[must_use]
pub fn rent_status(
    roommates: &[roommate::Model],
    transactions: &[transaction::Model],
    period: Period,
) -> HashMap<i64, RentStatus> {
    roommates
        .iter()
        .filter(|r| r.status == ActivityStatus::Active)
        .map(|roommate| {
            let paid = transactions.iter().any(|tx| {
                tx.roommate_id == Some(roommate.id)
                    && tx.kind == TransactionKind::Income
                    && tx.status == TransactionStatus::Completed
                    && period.contains(tx.date)
                    && (tx.category.as_deref() == Some(CATEGORY_RENT)
                        || tx.description.as_deref().is_some_and(|d| {
                            d.to_lowercase().contains(CATEGORY_RENT)
                        }))
            });
            (
                roommate.id,
                RentStatus {
                    paid,
                    expected_amount: roommate.monthly_rent,
                },
            )
        })
        .collect()
}
