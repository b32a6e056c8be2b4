//! Roommate entity - A tenant renting part of a property.
//!
//! Each roommate owes `monthly_rent` for every month of their tenancy while
//! their status is active. Only active roommates are considered when
//! evaluating missing-rent alerts.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::types::ActivityStatus;

/// Roommate database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "roommates")]
pub struct Model {
    /// Unique identifier for the roommate
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Property this roommate lives in
    pub property_id: i64,
    /// Family name
    pub last_name: String,
    /// Given name
    pub first_name: String,
    /// Contact email, if recorded
    pub email: Option<String>,
    /// Contact phone, if recorded
    pub phone: Option<String>,
    /// Lifecycle status; inactive roommates never generate rent obligations
    pub status: ActivityStatus,
    /// Expected monthly rent
    pub monthly_rent: f64,
    /// First day of the tenancy
    pub move_in_date: Date,
    /// Last day of the tenancy, if ended
    pub move_out_date: Option<Date>,
    /// When the row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Roommate and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each roommate belongs to one property
    #[sea_orm(
        belongs_to = "super::property::Entity",
        from = "Column::PropertyId",
        to = "super::property::Column::Id"
    )]
    Property,
    /// One roommate has many transactions (rent payments)
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
