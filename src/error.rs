//! Error types for rusty-rates

use thiserror::Error;

/// Main error type for rate registry operations
///
/// Conversion only ever produces [`RatesError::InvalidAmount`]. The remaining
/// variants come from loading quotes out of configuration files.
#[derive(Error, Debug)]
pub enum RatesError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RatesError {
    /// Shorthand for an amount that is not a finite number
    pub(crate) fn invalid_amount(detail: impl std::fmt::Display) -> Self {
        RatesError::InvalidAmount(format!("expected a finite number, got {}", detail))
    }
}

/// Result type alias for rate registry operations
pub type Result<T> = std::result::Result<T, RatesError>;
