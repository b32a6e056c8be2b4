//! Transaction entity - Every financial movement attached to a property.
//!
//! Rent payments carry `roommate_id` and category `"loyer"`; mortgage debits
//! carry category `"credit"`. Rows generated by the recurring-mortgage
//! generator are flagged `is_automatic` and carry a `period` key
//! (`"YYYY-MM"`) so the store can enforce at most one automatic mortgage
//! transaction per property per month.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::types::{TransactionKind, TransactionStatus};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Property the transaction belongs to
    pub property_id: i64,
    /// Paying roommate, for rent income
    pub roommate_id: Option<i64>,
    /// Income or expense
    pub kind: TransactionKind,
    /// Amount in euros; always positive, direction is carried by `kind`
    pub amount: f64,
    /// Accounting date; its year+month is the obligation period
    pub date: Date,
    /// Settlement status
    pub status: TransactionStatus,
    /// Free-form category; `"loyer"` and `"credit"` are semantically significant
    pub category: Option<String>,
    /// Human-readable label
    pub description: Option<String>,
    /// True for rows materialized by the recurring-mortgage generator
    pub is_automatic: bool,
    /// Period key `"YYYY-MM"`, set only on automatic rows (uniqueness key)
    pub period: Option<String>,
    /// When the row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one property
    #[sea_orm(
        belongs_to = "super::property::Entity",
        from = "Column::PropertyId",
        to = "super::property::Column::Id"
    )]
    Property,
    /// A rent transaction belongs to one roommate
    #[sea_orm(
        belongs_to = "super::roommate::Entity",
        from = "Column::RoommateId",
        to = "super::roommate::Column::Id"
    )]
    Roommate,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl Related<super::roommate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roommate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
