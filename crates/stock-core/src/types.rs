//! # Domain Types
//!
//! The records the stock manager stores and moves around.
//!
//! ## Product Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  NewProduct { name, quantity, price }                                  │
//! │       │                                                                 │
//! │       │  create()  ── store assigns id (AUTOINCREMENT, never reused)   │
//! │       ▼                                                                 │
//! │  Product { id, name, quantity, price }                                 │
//! │       │                                                                 │
//! │       ├── update()  ── name/quantity/price overwritten, id kept        │
//! │       │                                                                 │
//! │       └── delete()  ── row removed permanently (no soft delete)        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// One inventory line item as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier. Immutable once assigned.
    pub id: i64,

    /// Display name. Not unique at the storage level.
    pub name: String,

    /// Units in stock. Expected non-negative.
    pub quantity: i64,

    /// Unit price. Expected non-negative.
    pub price: f64,
}

impl Product {
    /// Builds a product with a known id (e.g. the target of an update).
    pub fn new(id: i64, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Product {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Drops the id, yielding an insert payload.
    pub fn without_id(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }
}

// =============================================================================
// NewProduct
// =============================================================================

/// Insert payload for a product that has no id yet.
///
/// The store assigns the id, so `create` takes this type instead of
/// [`Product`] and there is no id field to ignore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        NewProduct {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Attaches a store-assigned id.
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_id_keeps_fields() {
        let product = Product::new(7, "Pen", 10, 1.5);
        let payload = product.without_id();

        assert_eq!(payload, NewProduct::new("Pen", 10, 1.5));
        assert_eq!(payload.with_id(7), product);
    }
}
