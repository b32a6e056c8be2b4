//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod property;
pub mod roommate;
pub mod transaction;
pub mod types;

// Re-export specific types to avoid conflicts
pub use property::{Column as PropertyColumn, Entity as Property, Model as PropertyModel};
pub use roommate::{Column as RoommateColumn, Entity as Roommate, Model as RoommateModel};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};
pub use types::{
    ActivityStatus, CATEGORY_MORTGAGE, CATEGORY_RENT, TransactionKind, TransactionStatus,
};
