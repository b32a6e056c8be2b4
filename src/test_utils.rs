//! Shared test utilities.
//!
//! Plain model builders for the pure evaluator/report tests, and
//! in-memory `SQLite` helpers for everything that touches the store.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::{
    entities::{ActivityStatus, TransactionKind, TransactionStatus, property, roommate,
        transaction},
    errors::Result,
};

/// Creates an in-memory `SQLite` database with all tables and indexes.
/// This is the standard setup for all store-facing tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A bare active property without mortgage configuration, owned by `user-a`.
#[must_use]
pub fn test_property(id: i64, name: &str) -> property::Model {
    property::Model {
        id,
        user_id: "user-a".to_string(),
        name: name.to_string(),
        address: "12 rue de la République".to_string(),
        city: Some("Lyon".to_string()),
        status: ActivityStatus::Active,
        monthly_mortgage: None,
        mortgage_billing_day: None,
        mortgage_start_date: None,
        mortgage_end_date: None,
        created_at: Utc::now(),
    }
}

/// An active property with a complete mortgage configuration, named
/// `"Appartement {id}"`.
#[must_use]
pub fn property_with_mortgage(
    id: i64,
    monthly_amount: f64,
    billing_day: i32,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> property::Model {
    let mut property = test_property(id, &format!("Appartement {id}"));
    property.monthly_mortgage = Some(monthly_amount);
    property.mortgage_billing_day = Some(billing_day);
    property.mortgage_start_date = Some(start_date);
    property.mortgage_end_date = end_date;
    property
}

/// An active roommate with the given monthly rent, moved in early 2024.
#[must_use]
pub fn test_roommate(id: i64, property_id: i64, monthly_rent: f64) -> roommate::Model {
    roommate::Model {
        id,
        property_id,
        last_name: "Durand".to_string(),
        first_name: "Camille".to_string(),
        email: None,
        phone: None,
        status: ActivityStatus::Active,
        monthly_rent,
        move_in_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        move_out_date: None,
        created_at: Utc::now(),
    }
}

/// A completed manual transaction with no category.
#[must_use]
pub fn test_transaction(
    property_id: i64,
    roommate_id: Option<i64>,
    kind: TransactionKind,
    amount: f64,
    date: NaiveDate,
) -> transaction::Model {
    transaction::Model {
        id: 0,
        property_id,
        roommate_id,
        kind,
        amount,
        date,
        status: TransactionStatus::Completed,
        category: None,
        description: None,
        is_automatic: false,
        period: None,
        created_at: Utc::now(),
    }
}

impl transaction::Model {
    /// Builder-style category assignment for test fixtures.
    #[must_use]
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

/// Persists a property built by [`test_property`] under the given owner.
pub async fn insert_property(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
) -> Result<property::Model> {
    let mut model = test_property(0, name);
    model.user_id = user_id.to_string();
    insert_property_model(db, model).await
}

/// Persists the given property model, letting the store assign the id.
pub async fn insert_property_model(
    db: &DatabaseConnection,
    model: property::Model,
) -> Result<property::Model> {
    property::ActiveModel {
        user_id: Set(model.user_id),
        name: Set(model.name),
        address: Set(model.address),
        city: Set(model.city),
        status: Set(model.status),
        monthly_mortgage: Set(model.monthly_mortgage),
        mortgage_billing_day: Set(model.mortgage_billing_day),
        mortgage_start_date: Set(model.mortgage_start_date),
        mortgage_end_date: Set(model.mortgage_end_date),
        created_at: Set(model.created_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Persists an active roommate with the given rent.
pub async fn insert_roommate(
    db: &DatabaseConnection,
    property_id: i64,
    monthly_rent: f64,
) -> Result<roommate::Model> {
    let model = test_roommate(0, property_id, monthly_rent);
    roommate::ActiveModel {
        property_id: Set(model.property_id),
        last_name: Set(model.last_name),
        first_name: Set(model.first_name),
        email: Set(model.email),
        phone: Set(model.phone),
        status: Set(model.status),
        monthly_rent: Set(model.monthly_rent),
        move_in_date: Set(model.move_in_date),
        move_out_date: Set(model.move_out_date),
        created_at: Set(model.created_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Persists the given transaction model, letting the store assign the id.
pub async fn insert_transaction(
    db: &DatabaseConnection,
    model: transaction::Model,
) -> Result<transaction::Model> {
    transaction::ActiveModel {
        property_id: Set(model.property_id),
        roommate_id: Set(model.roommate_id),
        kind: Set(model.kind),
        amount: Set(model.amount),
        date: Set(model.date),
        status: Set(model.status),
        category: Set(model.category),
        description: Set(model.description),
        is_automatic: Set(model.is_automatic),
        period: Set(model.period),
        created_at: Set(model.created_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}
