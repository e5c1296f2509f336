//! # stock-db: Database Layer for the Stock Manager
//!
//! This crate owns the persisted product table. It uses SQLite through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stock Manager Data Flow                          │
//! │                                                                         │
//! │  Menu action (add / list / delete / update)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     stock-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │  Repository   │    │    Schema    │  │   │
//! │  │   │  (store.rs)   │    │ (product.rs)  │    │ (schema.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ open / close  │◄───│ ProductRepo   │    │ CREATE TABLE │  │   │
//! │  │   │ health check  │    │ CRUD + exists │    │ IF NOT EXISTS│  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ./stock.db  (table: produits)                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Handle creation, configuration and shutdown
//! - [`schema`] - Product table bootstrap
//! - [`error`] - Database error types
//! - [`repository`] - Product repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stock_core::NewProduct;
//! use stock_db::Store;
//!
//! let store = Store::open("stock.db").await?;
//! let id = store.products().create(&NewProduct::new("Pen", 10, 1.5)).await?;
//! let all = store.products().list().await?;
//! store.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod schema;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use store::{DbConfig, Store, DEFAULT_DB_PATH};

pub use repository::product::ProductRepository;
