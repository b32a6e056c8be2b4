//! Property entity - A rental property owned by one user.
//!
//! A property optionally carries a mortgage configuration (`monthly_mortgage`,
//! `mortgage_billing_day`, `mortgage_start_date`, `mortgage_end_date`). The
//! obligation is considered active only when the first three are all present;
//! see [`crate::core::obligation::MortgageTerms`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::types::ActivityStatus;

/// Property database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    /// Unique identifier for the property
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user, as issued by the auth provider
    pub user_id: String,
    /// Display name of the property
    pub name: String,
    /// Street address
    pub address: String,
    /// City, if recorded
    pub city: Option<String>,
    /// Lifecycle status; inactive properties never generate obligations
    pub status: ActivityStatus,
    /// Monthly mortgage amount, if the property is financed
    pub monthly_mortgage: Option<f64>,
    /// Day of month (1-31) the mortgage is debited
    pub mortgage_billing_day: Option<i32>,
    /// First day the mortgage obligation applies (inclusive)
    pub mortgage_start_date: Option<Date>,
    /// Last day the mortgage obligation applies (inclusive), if bounded
    pub mortgage_end_date: Option<Date>,
    /// When the row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Property and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One property houses many roommates
    #[sea_orm(has_many = "super::roommate::Entity")]
    Roommates,
    /// One property has many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::roommate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roommates.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
