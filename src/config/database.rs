//! Database configuration - connection and schema creation.
//!
//! `SQLite` via `SeaORM`. Tables are generated from the entity definitions
//! with `Schema::create_table_from_entity`; the one piece of schema the
//! entities cannot express - the partial unique index guaranteeing at most
//! one automatic mortgage transaction per property per month - is created
//! with a raw statement right after.

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info};

use crate::entities::{Property, Roommate, Transaction};
use crate::errors::Result;

/// The storage-level idempotence guard: one automatic mortgage debit per
/// property per period. Inserts racing past the application-level check
/// fail here with a unique-constraint violation instead of duplicating
/// financial records.
const AUTOMATIC_DEBIT_UNIQUE_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     ux_transactions_automatic_debit \
     ON transactions (property_id, period, category) \
     WHERE is_automatic";

/// Resolves the database URL from `DATABASE_URL`, falling back to a local
/// `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/corent.sqlite".to_string())
}

/// Connects to the database named by [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    debug!(url = %database_url, "connecting to database");
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions, plus the automatic-debit
/// unique index. `create_table_from_entity` is not idempotent, so this is
/// for fresh (or in-memory test) databases only.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let property_table = schema.create_table_from_entity(Property);
    let roommate_table = schema.create_table_from_entity(Roommate);
    let transaction_table = schema.create_table_from_entity(Transaction);

    db.execute(builder.build(&property_table)).await?;
    db.execute(builder.build(&roommate_table)).await?;
    db.execute(builder.build(&transaction_table)).await?;

    db.execute_unprepared(AUTOMATIC_DEBIT_UNIQUE_INDEX).await?;

    info!("database tables and indexes ensured");
    Ok(())
}
