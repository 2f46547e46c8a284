// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod amplitude;
pub mod error;
pub mod state;

// Re-export public types for convenient access via `qulab::core::TypeName`
pub use amplitude::AmplitudeState;
pub use error::QulabError;
pub use state::QubitState;

pub mod constants;
pub use constants::lab_constants::{MAX_CIRCUIT_GATES, NORM_TOLERANCE, PI}; // Re-export
