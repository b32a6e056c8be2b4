//! Thin application shell: connects to the store, runs the session-start
//! mortgage generation for one user, and prints the current alerts.
//!
//! The real product drives the library from its web dashboard; this binary
//! wires the same entry points for local use and smoke-testing.

use chrono::Utc;
use corent::{
    config::database,
    core::{alerts, mortgage, report, snapshot::Snapshot},
    errors::{Error, Result},
};
use dotenvy::dotenv;
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Non-fatal: env vars can be set externally
    dotenv().ok();

    let user_id = env::var("CORENT_USER_ID").map_err(|_| Error::Config {
        message: "CORENT_USER_ID must be set to the owner to evaluate".to_string(),
    })?;

    let db = database::create_connection().await?;
    info!("connected to {}", database::get_database_url());

    // Session start: materialize any mortgage debit due this month.
    // Never fatal; a failed pass is retried on the next session.
    let created = mortgage::run_at_session_start(&db, &user_id).await;
    info!(created, "automatic mortgage transactions created");

    let today = Utc::now().date_naive();

    // Alert evaluation degrades to an empty list rather than blocking
    let alerts = match alerts::evaluate_for_user(&db, &user_id, today).await {
        Ok(alerts) => alerts,
        Err(err) => {
            error!(error = %err, "alert evaluation failed");
            Vec::new()
        }
    };
    for alert in &alerts {
        warn!(
            property_id = alert.property_id,
            severity = ?alert.severity,
            "{}: {}",
            alert.title,
            alert.description
        );
    }
    if alerts.is_empty() {
        info!("no alerts: everything is up to date");
    }

    let snapshot = Snapshot::load(&db, &user_id).await?;
    let summary = report::dashboard_summary(&snapshot);
    info!(
        properties = summary.property_count,
        roommates = summary.roommate_count,
        balance = summary.balance,
        pending_income = summary.pending_income,
        expected_monthly_rent = summary.expected_monthly_rent,
        "portfolio summary"
    );

    Ok(())
}
