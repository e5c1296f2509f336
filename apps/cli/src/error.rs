//! # CLI Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  ValidationError (stock-core) ──► re-prompt, never leaves input.rs     │
//! │                                                                         │
//! │  InputError::EndOfInput ────────► menu loop ends, store closed, exit 0 │
//! │  InputError::Io ────────────────► AppError, exit 1                     │
//! │                                                                         │
//! │  DbError (startup) ─────────────► "Unable to initialize ...", exit 1   │
//! │  DbError (during an action) ────► "Error: ..." printed, loop continues │
//! │                                                                         │
//! │  ConfigError ───────────────────► printed, exit 1                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use thiserror::Error;

use crate::config::ConfigError;
use stock_db::DbError;

/// Failures of the validated input reader.
///
/// Malformed values are not errors here: the reader re-prompts for them.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream ended.
    #[error("end of input")]
    EndOfInput,

    /// Reading stdin or writing a prompt failed.
    #[error("input/output error: {0}")]
    Io(#[from] io::Error),
}

/// Top-level error for the `stock` binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Whether the error only means stdin ran out.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, AppError::Input(InputError::EndOfInput))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_input_detection() {
        let err: AppError = InputError::EndOfInput.into();
        assert!(err.is_end_of_input());

        let err: AppError = DbError::NotInitialized.into();
        assert!(!err.is_end_of_input());
        assert_eq!(err.to_string(), "Database is not initialized");
    }
}
