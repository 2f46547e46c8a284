// src/core/state.rs

use std::f64::consts::TAU;
use std::fmt;

/// A single qubit's orientation on the Bloch sphere.
///
/// The state is parametrized by the polar angle `theta` (conventionally
/// in `[0, π]`) and the azimuthal angle `phi` (conventionally in
/// `[0, 2π)`), both in radians. Because the angles parametrize the unit
/// sphere, the derived Bloch vector always has unit magnitude.
///
/// Values of this type are immutable: gate application produces a new
/// `QubitState` rather than mutating in place, and callers that want an
/// operation history keep their own ordered list of past states.
///
/// Angles are *not* wrapped back into their canonical ranges after gate
/// application; `phi` may exceed `2π` after repeated X/Z gates. The trig
/// projections wrap naturally, so probabilities are unaffected, but
/// display code that shows raw angles should use [`QubitState::wrapped_phi`].
#[derive(Debug, Clone, Copy, PartialEq)] // Avoid Eq for floating-point angles
pub struct QubitState {
    theta: f64,
    phi: f64,
}

impl QubitState {
    /// Creates a state from explicit Bloch angles (radians).
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// The ground state |0⟩: θ = 0, φ = 0. Every lab starts here.
    pub fn ground() -> Self {
        Self { theta: 0.0, phi: 0.0 }
    }

    /// Polar angle θ in radians.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Azimuthal angle φ in radians, as accumulated (unwrapped).
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// θ in degrees, for display panels.
    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }

    /// φ in degrees, as accumulated (unwrapped).
    pub fn phi_degrees(&self) -> f64 {
        self.phi.to_degrees()
    }

    /// φ reduced to `[0, 2π)` for display.
    pub fn wrapped_phi(&self) -> f64 {
        self.phi.rem_euclid(TAU)
    }

    /// Cartesian Bloch vector `(x, y, z) = (sinθ·cosφ, sinθ·sinφ, cosθ)`.
    /// Unit magnitude by construction.
    pub fn bloch_vector(&self) -> (f64, f64, f64) {
        let x = self.theta.sin() * self.phi.cos();
        let y = self.theta.sin() * self.phi.sin();
        let z = self.theta.cos();
        (x, y, z)
    }

    /// Probability of measuring |0⟩: `cos²(θ/2)`.
    pub fn prob_zero(&self) -> f64 {
        let c = (self.theta / 2.0).cos();
        c * c
    }

    /// Probability of measuring |1⟩: `sin²(θ/2)`.
    ///
    /// `prob_zero() + prob_one()` is 1 within floating-point tolerance
    /// for every θ.
    pub fn prob_one(&self) -> f64 {
        let s = (self.theta / 2.0).sin();
        s * s
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::ground()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qubit[θ={:.4}, φ={:.4}]", self.theta, self.phi)
    }
}
