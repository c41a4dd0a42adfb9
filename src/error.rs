//! Error types for the csb CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Balancing failures keep their own taxonomy in [`crate::balance::BalanceError`]
//! and are wrapped here so every command returns one error type.

use crate::balance::BalanceError;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for csb operations.
#[derive(Error, Debug)]
pub enum CsbError {
    /// User provided invalid arguments, or a file could not be read or parsed.
    #[error("{0}")]
    UserError(String),

    /// The roster was rejected by balancing validation.
    #[error(transparent)]
    Balance(#[from] BalanceError),
}

impl CsbError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CsbError::UserError(_) => exit_codes::USER_ERROR,
            CsbError::Balance(_) => exit_codes::INVALID_ROSTER,
        }
    }
}

/// Result type alias for csb operations.
pub type Result<T> = std::result::Result<T, CsbError>;
