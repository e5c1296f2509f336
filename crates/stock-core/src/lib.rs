//! # stock-core: Pure Types and Validation
//!
//! This crate holds the domain types and the input grammars of the stock
//! manager. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Stock Manager Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    stock (CLI binary)                           │   │
//! │  │    Menu ──► Input Reader ──► Store calls ──► Console output     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stock-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │     ┌───────────┐     ┌─────────────┐     ┌───────────┐        │   │
//! │  │     │   types   │     │ validation  │     │   error   │        │   │
//! │  │     │  Product  │     │  grammars   │     │ Validation│        │   │
//! │  │     │NewProduct │     │  name rules │     │   Error   │        │   │
//! │  │     └───────────┘     └─────────────┘     └───────────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    stock-db (Database Layer)                    │   │
//! │  │             SQLite schema bootstrap, product repository         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct)
//! - [`error`] - Validation error type
//! - [`validation`] - Numeric grammars and name rules
//!
//! ## Example Usage
//!
//! ```rust
//! use stock_core::validation::{parse_non_negative_integer, parse_non_negative_price};
//!
//! assert_eq!(parse_non_negative_integer("42").unwrap(), 42);
//! assert!(parse_non_negative_integer("-5").is_err());
//!
//! assert_eq!(parse_non_negative_price("12.50").unwrap(), 12.5);
//! assert!(parse_non_negative_price("12.3.4").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of bytes kept from one line of numeric input.
///
/// Matches a 100-byte line buffer with room for its terminator. Longer lines
/// are truncated and the remainder discarded.
pub const MAX_INPUT_LEN: usize = 99;

/// Maximum length of a product name, in bytes.
pub const MAX_NAME_LEN: usize = 100;
