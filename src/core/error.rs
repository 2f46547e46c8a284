//! Error handling logic

use std::fmt;

/// Error types for the lab engine.
///
/// Every fallible operation in the crate reports one of these variants.
/// Probability values that merely drift outside their valid range due to
/// floating-point error are clamped locally and never surface here.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QulabError {
    /// A gate name outside the supported set (H, X, Y, Z, S, T) was given.
    /// The engine rejects unknown names instead of dropping them, so it
    /// stays usable and testable without a pre-validated UI in front.
    InvalidGate {
        /// The offending gate name as supplied by the caller.
        name: String,
    },

    /// A parameter was outside its documented range, e.g. a zero shot
    /// count, a noise level above 100, or a Bell-state index above 3.
    InvalidConfiguration {
        /// InvalidConfiguration failure message
        message: String,
    },

    /// An experiment run was completed with a token that a newer run has
    /// already superseded. The newer run's result is the one to keep.
    RunSuperseded {
        /// RunSuperseded failure message
        message: String,
    },
}

impl fmt::Display for QulabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QulabError::InvalidGate { name } => write!(f, "Invalid Gate: '{}' is not a supported gate name", name),
            QulabError::InvalidConfiguration { message } => write!(f, "Invalid Configuration: {}", message),
            QulabError::RunSuperseded { message } => write!(f, "Run Superseded: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QulabError {}
