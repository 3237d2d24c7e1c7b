//! Error types for the humanizer boundary.
//!
//! The rewriting core cannot fail; these errors cover input that is rejected
//! before it reaches the core.

use thiserror::Error;

/// Errors raised when validating caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HumanizeError {
    /// Intensity outside the accepted `1..=10` range.
    #[error("Invalid intensity {0}: must be between 1 and 10")]
    InvalidIntensity(i64),

    /// A configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
