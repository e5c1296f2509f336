//! # Schema Bootstrap
//!
//! Creates the product table on first open.
//!
//! ## Table Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  produits                                                               │
//! │  ├── id        INTEGER PRIMARY KEY AUTOINCREMENT   (never reused)       │
//! │  ├── nom       TEXT NOT NULL                                            │
//! │  ├── quantite  INTEGER                                                  │
//! │  └── prix      REAL                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no migration machinery: the statement is idempotent and an
//! existing table is left untouched.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// Name of the product table.
pub const PRODUCT_TABLE: &str = "produits";

/// DDL for the product table.
///
/// `AUTOINCREMENT` keeps ids monotonic and prevents reuse of the id of a
/// deleted row, which plain `INTEGER PRIMARY KEY` would allow.
const CREATE_PRODUCT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS produits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nom TEXT NOT NULL,
    quantite INTEGER,
    prix REAL
)
"#;

/// Ensures the product table exists.
///
/// ## Errors
/// `DbError::SchemaFailed` if the statement cannot run. Closing the pool on
/// failure is the caller's job.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!(table = PRODUCT_TABLE, "Ensuring product table exists");

    sqlx::query(CREATE_PRODUCT_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    Ok(())
}

/// Returns true if the product table is present.
///
/// ## Usage
/// For diagnostics and tests.
pub async fn product_table_exists(pool: &SqlitePool) -> DbResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(PRODUCT_TABLE)
            .fetch_one(pool)
            .await?;

    Ok(count > 0)
}
