//! Shared column enums stored as their original French string values.
//!
//! The stored values (`"actif"`, `"revenu"`, `"complété"`, ...) are the wire
//! values of the legacy schema and are preserved verbatim so that existing
//! data rows remain readable. Rust-side names are English.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status shared by properties and roommates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ActivityStatus {
    /// Entity is active and participates in obligation checks
    #[sea_orm(string_value = "actif")]
    Active,
    /// Entity is retired; it is loaded but never generates obligations
    #[sea_orm(string_value = "inactif")]
    Inactive,
}

/// Direction of a financial transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TransactionKind {
    /// Money coming in (rent, deposits, ...)
    #[sea_orm(string_value = "revenu")]
    Income,
    /// Money going out (mortgage, charges, works, ...)
    #[sea_orm(string_value = "depense")]
    Expense,
}

/// Settlement status of a transaction.
///
/// Only [`TransactionStatus::Completed`] income satisfies a rent obligation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TransactionStatus {
    /// Settled
    #[sea_orm(string_value = "complété")]
    Completed,
    /// Recorded but not yet settled
    #[sea_orm(string_value = "en attente")]
    Pending,
    /// Voided
    #[sea_orm(string_value = "annulé")]
    Cancelled,
}

/// Category value tagging rent income transactions.
pub const CATEGORY_RENT: &str = "loyer";

/// Category value tagging mortgage expense transactions.
pub const CATEGORY_MORTGAGE: &str = "credit";
