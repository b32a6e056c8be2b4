//! Recurring mortgage transaction generation.
//!
//! Once per authenticated session, the generator materializes the current
//! month's mortgage debit for every financed property whose billing day
//! has arrived. Generation is idempotent twice over: an application-level
//! existence check skips properties that already have this month's
//! automatic debit, and the store enforces a unique index on
//! `(property_id, period, category) WHERE is_automatic`, so a concurrent
//! session racing past the check is absorbed as a conflict rather than a
//! duplicate row.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    core::{
        obligation::{self, Obligation},
        period::Period,
    },
    entities::{ActivityStatus, CATEGORY_MORTGAGE, Property, PropertyColumn, Transaction,
        TransactionColumn, TransactionKind, TransactionStatus, property, transaction},
    errors::Result,
};

/// A mortgage transaction the generator intends to create.
#[derive(Clone, Debug, PartialEq)]
pub struct MortgageDraft {
    /// Property the debit belongs to
    pub property_id: i64,
    /// Debit date: the billing day of the current period, clamped
    pub date: NaiveDate,
    /// Debit amount
    pub amount: f64,
    /// Human-readable label, e.g. `"Remboursement crédit Maison Bordeaux - juin 2024"`
    pub description: String,
    /// Period key stored on the row, e.g. `"2024-06"`
    pub period_key: String,
}

/// What one generation pass did.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Rows actually inserted this pass
    pub created: Vec<transaction::Model>,
    /// Properties skipped because this month's automatic debit already exists
    pub skipped_existing: usize,
    /// Properties skipped because the store failed; retried next session
    pub failed: usize,
}

/// Pure planning pass: the drafts that are due as of `as_of`.
///
/// Per property: skip unless active with complete, in-force mortgage
/// terms; skip while the billing day has not arrived (a draft is never
/// dated after `as_of`); skip when `has_existing` reports this month's
/// automatic debit already present.
pub fn plan_mortgage_drafts(
    properties: &[property::Model],
    as_of: NaiveDate,
    mut has_existing: impl FnMut(i64) -> bool,
) -> Vec<MortgageDraft> {
    let period = Period::from_date(as_of);
    obligation::mortgage_obligations(properties, period, as_of)
        .into_iter()
        .filter(|ob| ob.due_date() <= as_of)
        .filter(|ob| !has_existing(ob.property_id))
        .filter_map(|ob| {
            let property = properties.iter().find(|p| p.id == ob.property_id)?;
            Some(draft_for(property, &ob))
        })
        .collect()
}

fn draft_for(property: &property::Model, obligation: &Obligation) -> MortgageDraft {
    let period = obligation.period;
    MortgageDraft {
        property_id: property.id,
        date: obligation.due_date(),
        amount: obligation.expected_amount,
        description: format!(
            "Remboursement crédit {} - {}",
            property.name,
            period.label()
        ),
        period_key: period.key(),
    }
}

async fn has_automatic_debit(
    db: &DatabaseConnection,
    property_id: i64,
    period: Period,
) -> Result<bool> {
    let count = Transaction::find()
        .filter(TransactionColumn::PropertyId.eq(property_id))
        .filter(TransactionColumn::Kind.eq(TransactionKind::Expense))
        .filter(TransactionColumn::Category.eq(CATEGORY_MORTGAGE))
        .filter(TransactionColumn::IsAutomatic.eq(true))
        .filter(TransactionColumn::Date.between(period.first_day(), period.last_day()))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Generates the automatic mortgage transactions due for `user_id` as of
/// `as_of` and persists them.
///
/// A store failure while checking or inserting one property leaves that
/// property untouched (zero drafts, logged, counted as failed) and does
/// not stop the pass; the next session retries it. A unique-constraint
/// conflict on insert means another session won the race and is counted
/// as already existing.
#[instrument(skip(db))]
pub async fn generate_due_mortgage_transactions(
    db: &DatabaseConnection,
    user_id: &str,
    as_of: NaiveDate,
) -> Result<GenerationReport> {
    let properties = Property::find()
        .filter(PropertyColumn::UserId.eq(user_id))
        .filter(PropertyColumn::Status.eq(ActivityStatus::Active))
        .filter(PropertyColumn::MonthlyMortgage.is_not_null())
        .all(db)
        .await?;

    let period = Period::from_date(as_of);
    let drafts = plan_mortgage_drafts(&properties, as_of, |_| false);
    let mut report = GenerationReport::default();

    for draft in drafts {
        match has_automatic_debit(db, draft.property_id, period).await {
            Ok(true) => {
                debug!(property_id = draft.property_id, "automatic debit already recorded");
                report.skipped_existing += 1;
                continue;
            }
            Ok(false) => {}
            Err(err) => {
                warn!(
                    property_id = draft.property_id,
                    error = %err,
                    "existence check failed, skipping property this pass"
                );
                report.failed += 1;
                continue;
            }
        }

        let row = transaction::ActiveModel {
            property_id: Set(draft.property_id),
            roommate_id: Set(None),
            kind: Set(TransactionKind::Expense),
            amount: Set(draft.amount),
            date: Set(draft.date),
            status: Set(TransactionStatus::Completed),
            category: Set(Some(CATEGORY_MORTGAGE.to_string())),
            description: Set(Some(draft.description.clone())),
            is_automatic: Set(true),
            period: Set(Some(draft.period_key.clone())),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        match row.insert(db).await {
            Ok(model) => {
                info!(
                    property_id = draft.property_id,
                    date = %draft.date,
                    amount = draft.amount,
                    "created automatic mortgage transaction"
                );
                report.created.push(model);
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                // A concurrent session inserted between our check and our write
                debug!(
                    property_id = draft.property_id,
                    "automatic debit inserted concurrently, treating as existing"
                );
                report.skipped_existing += 1;
            }
            Err(err) => {
                warn!(
                    property_id = draft.property_id,
                    error = %err,
                    "insert failed, skipping property this pass"
                );
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

/// Session-start trigger: runs one generation pass for today and never
/// hard-fails. On error the pass is logged and reports zero created rows;
/// the evaluator will simply flag the debit as late until the next session
/// succeeds.
pub async fn run_at_session_start(db: &DatabaseConnection, user_id: &str) -> usize {
    let today = Utc::now().date_naive();
    match generate_due_mortgage_transactions(db, user_id, today).await {
        Ok(report) => {
            if !report.created.is_empty() || report.failed > 0 {
                info!(
                    created = report.created.len(),
                    skipped_existing = report.skipped_existing,
                    failed = report.failed,
                    "session-start mortgage generation finished"
                );
            }
            report.created.len()
        }
        Err(err) => {
            error!(error = %err, "session-start mortgage generation failed");
            0
        }
    }
}
