// src/validation/mod.rs

//! Provides functions to validate engine states against their
//! normalization invariants, plus the clamping helpers the rest of the
//! engine uses to absorb floating-point drift.

use crate::core::{AmplitudeState, QubitState, QulabError};

// Default tolerance values (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that the state's basis probabilities sum to 1
/// (`cos²(θ/2) + sin²(θ/2) ≈ 1`).
///
/// # Arguments
/// * `state` - The `QubitState` to check.
/// * `tolerance` - Allowed deviation from 1.0 (defaults to 1e-9).
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QulabError::InvalidConfiguration)` if normalization fails.
pub fn check_normalization(state: &QubitState, tolerance: Option<f64>) -> Result<(), QulabError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let prob_sum = state.prob_zero() + state.prob_one();
    if (prob_sum - 1.0).abs() > effective_tolerance {
        Err(QulabError::InvalidConfiguration {
            message: format!(
                "probability normalization failed: prob0 + prob1 = {} (deviation > {})",
                prob_sum, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks the amplitude-state invariant `amplitude0² + amplitude1² ≈ 1`.
///
/// # Arguments
/// * `state` - The `AmplitudeState` to check.
/// * `tolerance` - Allowed deviation from 1.0 (defaults to 1e-9).
pub fn check_amplitude_normalization(
    state: &AmplitudeState,
    tolerance: Option<f64>,
) -> Result<(), QulabError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq = state.amplitude0() * state.amplitude0() + state.amplitude1() * state.amplitude1();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QulabError::InvalidConfiguration {
            message: format!(
                "amplitude normalization failed: a0² + a1² = {} (deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks that the derived Bloch vector has unit magnitude. True by
/// construction for any angle pair, but cheap to verify when states
/// arrive from outside the engine.
pub fn check_bloch_unit(state: &QubitState, tolerance: Option<f64>) -> Result<(), QulabError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let (x, y, z) = state.bloch_vector();
    let magnitude_sq = x * x + y * y + z * z;
    if (magnitude_sq - 1.0).abs() > effective_tolerance {
        Err(QulabError::InvalidConfiguration {
            message: format!(
                "Bloch vector magnitude² = {} (deviation > {})",
                magnitude_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Clamps a probability into `[0, 1]`. Drift outside the range is a
/// recoverable local condition, never an error.
pub fn clamp_probability(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

/// Clamps a percentage into `[0, 100]`.
pub fn clamp_percent(p: f64) -> f64 {
    p.clamp(0.0, 100.0)
}
