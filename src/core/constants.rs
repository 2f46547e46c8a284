//! Numeric constants shared across the engine.

/// Constants governing tolerances and lab limits.
pub mod lab_constants {
    /// Tolerance for normalization checks (probability sums, Bloch norms).
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Maximum number of gate operations a circuit accepts.
    /// Additions past this cap are ignored, matching the circuit lab's
    /// fixed five-slot builder.
    pub const MAX_CIRCUIT_GATES: usize = 5;
    /// Used for phase angles and gate rotations.
    pub const PI: f64 = std::f64::consts::PI;
}
