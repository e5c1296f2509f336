//! # Database Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ├── ConnectionFailed / SchemaFailed → abort at startup           │
//! │       │                                                                 │
//! │       └── QueryFailed / Internal / NotInitialized                      │
//! │              → reported by the menu, loop continues                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The store handle was closed (or never opened).
    ///
    /// ## When This Occurs
    /// - Any repository call after `Store::close()`
    #[error("Database is not initialized")]
    NotInitialized,

    /// Opening the database file failed.
    ///
    /// ## When This Occurs
    /// - Parent directory doesn't exist
    /// - File permissions issue
    /// - File exists but is not a SQLite database
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Creating the product table failed. The handle has been closed.
    #[error("Schema creation failed: {0}")]
    SchemaFailed(String),

    /// Statement preparation or execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolClosed     → DbError::NotInitialized
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolClosed => DbError::NotInitialized,
            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
