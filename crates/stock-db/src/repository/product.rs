//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD over the `produits` table
//! - Existence checks by id and by exact name
//!
//! ## No-Match Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  update(product) / delete(id) with no matching row                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Statement completes, 0 rows affected → Ok(())                         │
//! │                                                                         │
//! │  Callers that need "not found" call exists_by_id() first.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every value reaches SQLite through `.bind()`. Statements are prepared,
//! run and finalized inside each call.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stock_core::{NewProduct, Product};

/// Read queries alias the French column names to the fields of [`Product`].
const SELECT_ALL: &str =
    "SELECT id, nom AS name, quantite AS quantity, prix AS price FROM produits";

const SELECT_BY_ID: &str =
    "SELECT id, nom AS name, quantite AS quantity, prix AS price FROM produits WHERE id = ?1";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.products();
///
/// if !repo.exists_by_name("Pen").await? {
///     let id = repo.create(&NewProduct::new("Pen", 10, 1.5)).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Returns the pool, or `NotInitialized` once the store is closed.
    fn live_pool(&self) -> DbResult<&SqlitePool> {
        if self.pool.is_closed() {
            return Err(DbError::NotInitialized);
        }
        Ok(&self.pool)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(id)` - The storage-assigned id of the new row
    pub async fn create(&self, product: &NewProduct) -> DbResult<i64> {
        let pool = self.live_pool()?;

        debug!(name = %product.name, quantity = product.quantity, "Inserting product");

        let result = sqlx::query("INSERT INTO produits (nom, quantite, prix) VALUES (?1, ?2, ?3)")
            .bind(product.name.as_str())
            .bind(product.quantity)
            .bind(product.price)
            .execute(pool)
            .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Lists every product in the table's natural scan order (insertion
    /// order in practice).
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let pool = self.live_pool()?;

        let products = sqlx::query_as::<_, Product>(SELECT_ALL)
            .fetch_all(pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let pool = self.live_pool()?;

        let product = sqlx::query_as::<_, Product>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(product)
    }

    /// Overwrites name, quantity and price of the row with `product.id`.
    ///
    /// Succeeds without changes when no row has that id.
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        let pool = self.live_pool()?;

        debug!(id = product.id, "Updating product");

        let result =
            sqlx::query("UPDATE produits SET nom = ?1, quantite = ?2, prix = ?3 WHERE id = ?4")
                .bind(product.name.as_str())
                .bind(product.quantity)
                .bind(product.price)
                .bind(product.id)
                .execute(pool)
                .await?;

        debug!(id = product.id, rows = result.rows_affected(), "Update complete");
        Ok(())
    }

    /// Deletes the row with `id`.
    ///
    /// Succeeds without changes when no row has that id.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let pool = self.live_pool()?;

        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM produits WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;

        debug!(id, rows = result.rows_affected(), "Delete complete");
        Ok(())
    }

    /// True iff a row with `id` exists.
    pub async fn exists_by_id(&self, id: i64) -> DbResult<bool> {
        let pool = self.live_pool()?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM produits WHERE id = ?1")
            .bind(id)
            .fetch_one(pool)
            .await?;

        Ok(count > 0)
    }

    /// True iff a row with exactly this name exists.
    ///
    /// Comparison uses SQLite's default BINARY collation: case-sensitive,
    /// no trimming. "Chair" and "chair" are different names.
    pub async fn exists_by_name(&self, name: &str) -> DbResult<bool> {
        let pool = self.live_pool()?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM produits WHERE nom = ?1")
            .bind(name)
            .fetch_one(pool)
            .await?;

        Ok(count > 0)
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let pool = self.live_pool()?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM produits")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
