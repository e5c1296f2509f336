//! # Validation Module
//!
//! Input grammars and field rules for the stock manager.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input Reader (stock-cli)                                     │
//! │  ├── Bounded line reads, remainder of long lines discarded             │
//! │  └── Re-prompt loop on any ValidationError                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Integer grammar (whole line, >= 0)                                │
//! │  ├── Price grammar (digits + at most one '.')                          │
//! │  └── Name rules (non-empty, bounded length)                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL on the name column                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stock_core::validation::{parse_non_negative_price, validate_product_name};
//!
//! assert!(validate_product_name("Pen").is_ok());
//! assert_eq!(parse_non_negative_price("1.5").unwrap(), 1.5);
//! ```

use crate::error::ValidationError;
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Must be at most [`MAX_NAME_LEN`] bytes
///
/// The name is stored exactly as typed; this check does not trim it.
///
/// The interactive reader already cuts names to [`MAX_NAME_LEN`], so the
/// length rule only rejects names handed in directly by library callers.
///
/// ## Example
/// ```rust
/// use stock_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Chair").is_ok());
/// assert!(validate_product_name("").is_err());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Grammars
// =============================================================================

/// Parses a whole line as a non-negative integer.
///
/// ## Grammar
/// Optional leading whitespace, an optional sign, then decimal digits up to
/// the end of the line. Anything after the digits is trailing garbage.
///
/// ```text
/// "42"     → Ok(42)
/// "  7"    → Ok(7)
/// "+3"     → Ok(3)
/// "-5"     → Err(Negative)
/// "abc"    → Err(InvalidFormat)
/// "12 "    → Err(InvalidFormat)   trailing garbage
/// ""       → Err(Required)
/// ```
pub fn parse_non_negative_integer(input: &str) -> ValidationResult<i64> {
    let digits = input.trim_start();

    if digits.is_empty() {
        return Err(ValidationError::Required {
            field: "integer".to_string(),
        });
    }

    let value: i64 = digits
        .parse()
        .map_err(|e: std::num::ParseIntError| {
            ValidationError::invalid_format("integer", e.to_string())
        })?;

    if value < 0 {
        return Err(ValidationError::Negative {
            field: "integer".to_string(),
        });
    }

    Ok(value)
}

/// Parses a price using the strict decimal grammar.
///
/// ## Grammar
/// ASCII digits with at most one decimal point and at least one digit.
/// No sign, exponent, whitespace, `inf` or `nan` is accepted, which is
/// narrower than [`str::parse::<f64>`].
///
/// ```text
/// "12.50"   → Ok(12.5)
/// "3"       → Ok(3.0)
/// ".5"      → Ok(0.5)
/// "5."      → Ok(5.0)
/// "."       → Err(InvalidFormat)
/// "12.3.4"  → Err(InvalidFormat)
/// "-1"      → Err(InvalidFormat)
/// "1e3"     → Err(InvalidFormat)
/// ""        → Err(Required)
/// ```
pub fn parse_non_negative_price(input: &str) -> ValidationResult<f64> {
    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let mut seen_point = false;
    let mut seen_digit = false;

    for c in input.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            '.' => {
                return Err(ValidationError::invalid_format(
                    "price",
                    "more than one decimal point",
                ))
            }
            other => {
                return Err(ValidationError::invalid_format(
                    "price",
                    format!("unexpected character '{other}'"),
                ))
            }
        }
    }

    if !seen_digit {
        return Err(ValidationError::invalid_format("price", "no digits"));
    }

    let value: f64 = input
        .parse()
        .map_err(|e: std::num::ParseFloatError| {
            ValidationError::invalid_format("price", e.to_string())
        })?;

    if !value.is_finite() {
        return Err(ValidationError::invalid_format("price", "value out of range"));
    }

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================
