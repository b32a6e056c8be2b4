//! Core business logic - obligation evaluation, recurring generation,
//! and dashboard aggregation. Everything storage-facing goes through
//! `SeaORM`; everything else is pure functions over loaded snapshots.

pub mod alerts;
pub mod mortgage;
pub mod obligation;
pub mod period;
pub mod report;
pub mod snapshot;
