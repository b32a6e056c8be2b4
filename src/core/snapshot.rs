//! Per-user portfolio snapshot - one consistent read of the store.
//!
//! Every dashboard refresh works from a [`Snapshot`]: the user's
//! properties, their roommates, and their transactions, loaded once and
//! then handed to the pure evaluator and report functions. Staleness
//! between a concurrently running generator and a snapshot read is
//! acceptable; it self-heals on the next refresh.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;

use crate::{
    entities::{Property, PropertyColumn, Roommate, RoommateColumn, Transaction,
        TransactionColumn, property, roommate, transaction},
    errors::Result,
};

/// All persisted state relevant to one user, loaded in one pass.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    /// Properties owned by the user
    pub properties: Vec<property::Model>,
    /// Roommates of those properties
    pub roommates: Vec<roommate::Model>,
    /// Transactions of those properties, newest first
    pub transactions: Vec<transaction::Model>,
}

impl Snapshot {
    /// Loads the portfolio of `user_id`. Roommates and transactions are
    /// scoped to the user's property ids; transactions come back newest
    /// first (dashboard display order).
    #[instrument(skip(db))]
    pub async fn load(db: &DatabaseConnection, user_id: &str) -> Result<Self> {
        let properties = Property::find()
            .filter(PropertyColumn::UserId.eq(user_id))
            .all(db)
            .await?;

        if properties.is_empty() {
            return Ok(Self::default());
        }

        let property_ids: Vec<i64> = properties.iter().map(|p| p.id).collect();

        let roommates = Roommate::find()
            .filter(RoommateColumn::PropertyId.is_in(property_ids.clone()))
            .all(db)
            .await?;

        let transactions = Transaction::find()
            .filter(TransactionColumn::PropertyId.is_in(property_ids))
            .order_by_desc(TransactionColumn::Date)
            .all(db)
            .await?;

        Ok(Self {
            properties,
            roommates,
            transactions,
        })
    }
}
