// src/core/amplitude.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// Superposition-lab state: real, non-negative amplitudes for |0⟩ and
/// |1⟩ plus a relative phase on the |1⟩ component.
///
/// Invariant: `amplitude0² + amplitude1² = 1` at all times. Setting one
/// amplitude recomputes the other as `sqrt(max(0, 1 − a²))`, so the
/// invariant survives any slider input including floating-point drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeState {
    amplitude0: f64,
    amplitude1: f64,
    phase: f64,
}

impl AmplitudeState {
    /// Creates a state from the |0⟩ amplitude and relative phase.
    /// The input is clamped to `[0, 1]` and the |1⟩ amplitude derived.
    pub fn new(amplitude0: f64, phase: f64) -> Self {
        let a0 = amplitude0.clamp(0.0, 1.0);
        Self {
            amplitude0: a0,
            amplitude1: (1.0 - a0 * a0).max(0.0).sqrt(),
            phase,
        }
    }

    /// The equal 50/50 superposition (both amplitudes 1/√2, zero phase).
    pub fn balanced() -> Self {
        Self::new(std::f64::consts::FRAC_1_SQRT_2, 0.0)
    }

    /// Amplitude of the |0⟩ component.
    pub fn amplitude0(&self) -> f64 {
        self.amplitude0
    }

    /// Amplitude of the |1⟩ component.
    pub fn amplitude1(&self) -> f64 {
        self.amplitude1
    }

    /// Relative phase on |1⟩, radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Sets the |0⟩ amplitude (clamped to `[0, 1]`), recomputing the |1⟩
    /// amplitude to restore normalization.
    pub fn set_amplitude0(&mut self, value: f64) {
        let a = value.clamp(0.0, 1.0);
        self.amplitude0 = a;
        self.amplitude1 = (1.0 - a * a).max(0.0).sqrt();
    }

    /// Sets the |1⟩ amplitude (clamped to `[0, 1]`), recomputing the |0⟩
    /// amplitude to restore normalization.
    pub fn set_amplitude1(&mut self, value: f64) {
        let a = value.clamp(0.0, 1.0);
        self.amplitude1 = a;
        self.amplitude0 = (1.0 - a * a).max(0.0).sqrt();
    }

    /// Sets the relative phase (radians). Does not affect probabilities.
    pub fn set_phase(&mut self, phase: f64) {
        self.phase = phase;
    }

    /// Complex coefficient of the |1⟩ component: `amplitude1·e^(i·phase)`.
    pub fn coefficient1(&self) -> Complex<f64> {
        Complex::from_polar(self.amplitude1, self.phase)
    }

    /// Probability of measuring |0⟩: `amplitude0²`.
    pub fn prob_zero(&self) -> f64 {
        self.amplitude0 * self.amplitude0
    }

    /// Probability of measuring |1⟩: `amplitude1²`.
    pub fn prob_one(&self) -> f64 {
        self.amplitude1 * self.amplitude1
    }
}

impl Default for AmplitudeState {
    fn default() -> Self {
        Self::balanced()
    }
}

impl fmt::Display for AmplitudeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c1 = self.coefficient1();
        if c1.is_zero() {
            write!(f, "|ψ⟩ = {:.2}|0⟩", self.amplitude0)
        } else {
            write!(
                f,
                "|ψ⟩ = {:.2}|0⟩ + {:.2}e^(i{:.0}°)|1⟩",
                self.amplitude0,
                self.amplitude1,
                self.phase.to_degrees()
            )
        }
    }
}
