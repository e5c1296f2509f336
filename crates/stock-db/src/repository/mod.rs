//! # Repository Module
//!
//! Database repository implementations for the stock manager.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Menu action                                                           │
//! │       │                                                                 │
//! │       │  store.products().exists_by_name("Pen")                        │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create(&self, new_product)                                        │
//! │  ├── list(&self)                                                       │
//! │  ├── update(&self, product)                                            │
//! │  ├── delete(&self, id)                                                 │
//! │  └── exists_by_id / exists_by_name                                     │
//! │       │                                                                 │
//! │       │  Parameterized SQL (values always bound, never formatted)      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and existence checks

pub mod product;
