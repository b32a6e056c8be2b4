//! Unified error type and `Result` alias for the crate.

use thiserror::Error;

/// All errors the library can surface to its caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage-layer failure, propagated from `SeaORM`.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Invalid or missing configuration (environment, database URL, ...).
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what is wrong
        message: String,
    },

    /// Caller violated an input contract (malformed date, out-of-range value).
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of the violated contract
        message: String,
    },

    /// I/O error (dotenv file, local paths).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
