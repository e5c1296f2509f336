//! # Error Types
//!
//! Domain-specific error types for stock-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stock-core errors (this file)                                         │
//! │  └── ValidationError  - Malformed or out-of-range input                │
//! │                                                                         │
//! │  stock-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  ├── InputError       - End of input / stdin failures                  │
//! │  └── AppError         - What the binary reports before exiting         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in error messages
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements. The input
/// reader handles them by re-prompting; they never abort the program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value is negative where only values >= 0 are allowed.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Invalid format (not a number, trailing garbage, stray characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by a negative value.
    ///
    /// The input reader picks a different re-prompt for this case.
    pub fn is_negative(&self) -> bool {
        matches!(self, ValidationError::Negative { .. })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
