//! Obligation ledger evaluation - turns a portfolio snapshot into alerts.
//!
//! The evaluator is a pure pass over in-memory collections: for the period
//! of `as_of` it checks every rent and mortgage obligation against the
//! transaction history and emits one alert per unsatisfied obligation.
//! It performs no I/O and raises no errors; empty inputs produce an empty
//! alert list. Run it on every dashboard refresh.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    core::{obligation, period::Period, snapshot::Snapshot},
    entities::{property, roommate, transaction},
    errors::Result,
};

/// Alert priority tier, driving presentation order and styling only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Needs attention soon (late mortgage debit)
    Medium,
    /// Needs attention now (unpaid rent)
    High,
}

/// What an alert is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    /// An active roommate has no completed rent payment this period
    MissingPayment,
    /// A mortgage debit was due this period and none is recorded
    LateMortgage,
}

/// One unsatisfied obligation, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    /// What the alert is about
    pub kind: AlertKind,
    /// Priority tier
    pub severity: Severity,
    /// Short headline (French display copy, per legacy UI)
    pub title: String,
    /// One-sentence detail including the expected amount
    pub description: String,
    /// Property concerned
    pub property_id: i64,
    /// Owing roommate, for missing rent
    pub roommate_id: Option<i64>,
    /// Amount that was expected for the period
    pub expected_amount: f64,
}

fn format_amount(amount: f64) -> String {
    format!("{amount:.2} €")
}

/// Evaluates every rent and mortgage obligation for the period of `as_of`
/// and returns one alert per obligation with no satisfying transaction.
///
/// Rent: every active roommate owes one completed `loyer` payment in the
/// period; missing payments are high severity. Mortgage: every active
/// property with complete, in-force mortgage terms owes one `credit`
/// debit, but the alert only fires strictly after the billing day has
/// passed; before that the debit is merely not yet due.
///
/// The caller supplies collections already scoped to one owner;
/// authorization is not this function's concern. Passing an explicit
/// `as_of` keeps the result deterministic for tests.
#[must_use]
pub fn evaluate_obligations(
    properties: &[property::Model],
    roommates: &[roommate::Model],
    transactions: &[transaction::Model],
    as_of: NaiveDate,
) -> Vec<Alert> {
    let period = Period::from_date(as_of);
    let mut alerts = Vec::new();

    for obligation in obligation::rent_obligations(roommates, period) {
        if transactions.iter().any(|tx| obligation.is_satisfied_by(tx)) {
            continue;
        }
        let Some(roommate_id) = obligation.roommate_id else {
            continue;
        };
        let Some(roommate) = roommates.iter().find(|r| r.id == roommate_id) else {
            continue;
        };
        alerts.push(Alert {
            kind: AlertKind::MissingPayment,
            severity: Severity::High,
            title: format!(
                "Loyer impayé: {} {}",
                roommate.first_name, roommate.last_name
            ),
            description: format!(
                "Le loyer de {} n'a pas été enregistré pour {}",
                format_amount(obligation.expected_amount),
                period.label()
            ),
            property_id: obligation.property_id,
            roommate_id: Some(roommate_id),
            expected_amount: obligation.expected_amount,
        });
    }

    for obligation in obligation::mortgage_obligations(properties, period, as_of) {
        // Not late yet: the alert fires only strictly after the due day
        if as_of <= obligation.due_date() {
            continue;
        }
        if transactions.iter().any(|tx| obligation.is_satisfied_by(tx)) {
            continue;
        }
        let Some(property) = properties.iter().find(|p| p.id == obligation.property_id) else {
            continue;
        };
        alerts.push(Alert {
            kind: AlertKind::LateMortgage,
            severity: Severity::Medium,
            title: format!("Crédit non enregistré: {}", property.name),
            description: format!(
                "Le remboursement de crédit de {} prévu le {} n'a pas été enregistré",
                format_amount(obligation.expected_amount),
                obligation.due_day
            ),
            property_id: obligation.property_id,
            roommate_id: None,
            expected_amount: obligation.expected_amount,
        });
    }

    alerts
}

/// Loads the user's portfolio snapshot and evaluates it. Store failures
/// propagate to the caller, which should degrade to showing no alerts
/// rather than blocking the dashboard.
pub async fn evaluate_for_user(
    db: &DatabaseConnection,
    user_id: &str,
    as_of: NaiveDate,
) -> Result<Vec<Alert>> {
    let snapshot = Snapshot::load(db, user_id).await?;
    Ok(evaluate_obligations(
        &snapshot.properties,
        &snapshot.roommates,
        &snapshot.transactions,
        as_of,
    ))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{
        entities::{ActivityStatus, CATEGORY_MORTGAGE, CATEGORY_RENT, TransactionKind,
            TransactionStatus},
        test_utils::{property_with_mortgage, test_property, test_roommate, test_transaction},
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_inputs_yield_no_alerts() {
        assert!(evaluate_obligations(&[], &[], &[], date(2024, 6, 10)).is_empty());
    }

    #[test]
    fn unpaid_rent_emits_one_high_alert_with_expected_amount() {
        let property = test_property(10, "Appartement Lyon");
        let mut roommate = test_roommate(1, 10, 500.0);
        roommate.first_name = "Claire".to_string();
        roommate.last_name = "Martin".to_string();

        let alerts = evaluate_obligations(&[property], &[roommate], &[], date(2024, 6, 10));
        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.kind, AlertKind::MissingPayment);
        assert_eq!(alert.severity, Severity::High);
        assert_eq!(alert.roommate_id, Some(1));
        assert_eq!(alert.property_id, 10);
        assert_eq!(alert.expected_amount, 500.0);
        assert_eq!(alert.title, "Loyer impayé: Claire Martin");
        assert!(alert.description.contains("500.00 €"));
        assert!(alert.description.contains("juin 2024"));
    }

    #[test]
    fn completed_rent_payment_suppresses_the_alert() {
        let property = test_property(10, "Appartement Lyon");
        let roommate = test_roommate(1, 10, 500.0);
        let payment =
            test_transaction(10, Some(1), TransactionKind::Income, 500.0, date(2024, 6, 3))
                .with_category(CATEGORY_RENT);

        let alerts =
            evaluate_obligations(&[property], &[roommate], &[payment], date(2024, 6, 10));
        assert!(alerts.is_empty());
    }

    #[test]
    fn pending_or_off_period_payments_do_not_count() {
        let property = test_property(10, "Appartement Lyon");
        let roommate = test_roommate(1, 10, 500.0);

        let mut pending =
            test_transaction(10, Some(1), TransactionKind::Income, 500.0, date(2024, 6, 3))
                .with_category(CATEGORY_RENT);
        pending.status = TransactionStatus::Pending;

        let last_month =
            test_transaction(10, Some(1), TransactionKind::Income, 500.0, date(2024, 5, 3))
                .with_category(CATEGORY_RENT);

        let alerts = evaluate_obligations(
            &[property],
            &[roommate],
            &[pending, last_month],
            date(2024, 6, 10),
        );
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::MissingPayment);
    }

    #[test]
    fn several_qualifying_payments_still_count_as_paid_once() {
        let property = test_property(10, "Appartement Lyon");
        let roommate = test_roommate(1, 10, 500.0);
        let first =
            test_transaction(10, Some(1), TransactionKind::Income, 250.0, date(2024, 6, 3))
                .with_category(CATEGORY_RENT);
        let second =
            test_transaction(10, Some(1), TransactionKind::Income, 250.0, date(2024, 6, 17))
                .with_category(CATEGORY_RENT);

        let alerts =
            evaluate_obligations(&[property], &[roommate], &[first, second], date(2024, 6, 20));
        assert!(alerts.is_empty());
    }

    #[test]
    fn inactive_roommates_are_ignored() {
        let property = test_property(10, "Appartement Lyon");
        let mut roommate = test_roommate(1, 10, 500.0);
        roommate.status = ActivityStatus::Inactive;

        let alerts = evaluate_obligations(&[property], &[roommate], &[], date(2024, 6, 10));
        assert!(alerts.is_empty());
    }

    #[test]
    fn mortgage_alert_fires_only_strictly_after_the_billing_day() {
        let property = property_with_mortgage(1, 800.0, 5, date(2024, 1, 1), None);

        // Before the due day: nothing
        let alerts = evaluate_obligations(&[property.clone()], &[], &[], date(2024, 6, 3));
        assert!(alerts.is_empty());

        // On the due day: still nothing, the debit is due today, not late
        let alerts = evaluate_obligations(&[property.clone()], &[], &[], date(2024, 6, 5));
        assert!(alerts.is_empty());

        // The day after: late
        let alerts = evaluate_obligations(&[property], &[], &[], date(2024, 6, 6));
        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.kind, AlertKind::LateMortgage);
        assert_eq!(alert.severity, Severity::Medium);
        assert_eq!(alert.expected_amount, 800.0);
        assert_eq!(alert.title, "Crédit non enregistré: Appartement 1");
        assert!(alert.description.contains("800.00 €"));
        assert!(alert.description.contains("prévu le 5"));
    }

    #[test]
    fn recorded_mortgage_debit_suppresses_the_alert() {
        let property = property_with_mortgage(1, 800.0, 5, date(2024, 1, 1), None);
        let debit = test_transaction(1, None, TransactionKind::Expense, 800.0, date(2024, 6, 5))
            .with_category(CATEGORY_MORTGAGE);

        let alerts = evaluate_obligations(&[property], &[], &[debit], date(2024, 6, 10));
        assert!(alerts.is_empty());
    }

    #[test]
    fn incomplete_or_inactive_mortgages_never_alert() {
        let mut partial = test_property(1, "Appartement Lyon");
        partial.monthly_mortgage = Some(800.0);

        let mut inactive = property_with_mortgage(2, 800.0, 5, date(2024, 1, 1), None);
        inactive.status = ActivityStatus::Inactive;

        let alerts = evaluate_obligations(&[partial, inactive], &[], &[], date(2024, 6, 10));
        assert!(alerts.is_empty());
    }

    #[test]
    fn rent_and_mortgage_alerts_combine() {
        let property = property_with_mortgage(10, 800.0, 5, date(2024, 1, 1), None);
        let roommate = test_roommate(1, 10, 500.0);

        let alerts = evaluate_obligations(&[property], &[roommate], &[], date(2024, 6, 10));
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().any(|a| a.kind == AlertKind::MissingPayment));
        assert!(alerts.iter().any(|a| a.kind == AlertKind::LateMortgage));
    }
}
