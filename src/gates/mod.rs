// src/gates/mod.rs

//! Named single-qubit gate transformations on Bloch-angle states.
//!
//! The single authoritative set of gate rules shared by every lab page.
//! Gate application is a pure function: it consumes a [`QubitState`] by
//! reference and returns a new one, leaving history management to the
//! caller.

use crate::core::{QubitState, QulabError};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

/// The supported single-qubit gates.
///
/// Parsing an unknown name fails with [`QulabError::InvalidGate`] rather
/// than being silently dropped, so the engine can be driven from any
/// text surface (not just a UI with pre-validated buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Hadamard - creates superposition.
    H,
    /// Pauli-X - bit flip.
    X,
    /// Pauli-Y - flip around the Y axis.
    Y,
    /// Pauli-Z - phase flip.
    Z,
    /// S gate - quarter phase.
    S,
    /// T gate - eighth phase.
    T,
}

/// All gates in palette order.
pub const GATE_PALETTE: [Gate; 6] = [Gate::H, Gate::X, Gate::Y, Gate::Z, Gate::S, Gate::T];

impl Gate {
    /// Applies this gate to a Bloch-angle state, returning the new state.
    ///
    /// The transformation rules reproduce the lab behavior exactly:
    ///
    /// - `H`: θ' = π/2 − θ, φ' = π/2. This is a simplified rule that
    ///   treats every application as if made from a canonical frame. It
    ///   is **not** a faithful rotation composition and gives
    ///   non-physical results when repeated from arbitrary states; it is
    ///   kept for behavioral compatibility with the labs.
    /// - `X`: θ' = π − θ, φ' = φ + π.
    /// - `Y`: θ' = π − θ, φ' = φ.
    /// - `Z`: θ' = θ, φ' = φ + π.
    /// - `S`, `T`: identity here. The labs never define them on the
    ///   angle representation; they only appear in the discrete circuit
    ///   model, where they leave the probability unchanged.
    ///
    /// Output angles are not wrapped to canonical ranges; see
    /// [`QubitState::wrapped_phi`].
    pub fn apply(&self, state: &QubitState) -> QubitState {
        match self {
            Gate::H => QubitState::new(FRAC_PI_2 - state.theta(), FRAC_PI_2),
            Gate::X => QubitState::new(PI - state.theta(), state.phi() + PI),
            Gate::Y => QubitState::new(PI - state.theta(), state.phi()),
            Gate::Z => QubitState::new(state.theta(), state.phi() + PI),
            Gate::S | Gate::T => *state,
        }
    }

    /// Short description shown in the gate palette.
    pub fn description(&self) -> &'static str {
        match self {
            Gate::H => "Hadamard - Creates superposition",
            Gate::X => "Pauli-X - Bit flip",
            Gate::Y => "Pauli-Y - Rotate around Y",
            Gate::Z => "Pauli-Z - Phase flip",
            Gate::S => "S gate - Quarter phase",
            Gate::T => "T gate - Eighth phase",
        }
    }
}

impl FromStr for Gate {
    type Err = QulabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Gate::H),
            "X" => Ok(Gate::X),
            "Y" => Ok(Gate::Y),
            "Z" => Ok(Gate::Z),
            "S" => Ok(Gate::S),
            "T" => Ok(Gate::T),
            other => Err(QulabError::InvalidGate { name: other.to_string() }),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Gate::H => "H",
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::S => "S",
            Gate::T => "T",
        };
        write!(f, "{}", symbol)
    }
}

/// A gate placed in a circuit: the gate plus its target qubit index.
///
/// The single-qubit labs always target qubit 0; the index exists so the
/// circuit type generalizes to the two-qubit pages without a new
/// operation shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GateOperation {
    /// The gate to apply.
    pub gate: Gate,
    /// Target qubit index (0 for all single-qubit labs).
    pub target: usize,
}

impl GateOperation {
    /// A gate targeting qubit 0.
    pub fn single(gate: Gate) -> Self {
        Self { gate, target: 0 }
    }
}

impl fmt::Display for GateOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@q{}", self.gate, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    const TEST_TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_hadamard_from_ground() {
        let ground = QubitState::ground();
        let after = Gate::H.apply(&ground);
        assert!((after.theta() - FRAC_PI_2).abs() < TEST_TOLERANCE);
        assert!((after.phi() - FRAC_PI_2).abs() < TEST_TOLERANCE);
        // Equator state: 50/50 probabilities
        assert!((after.prob_zero() - 0.5).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn test_x_is_involution_on_theta() {
        let state = QubitState::new(0.7, 1.3);
        let twice = Gate::X.apply(&Gate::X.apply(&state));
        assert!((twice.theta() - state.theta()).abs() < TEST_TOLERANCE);
        // phi gains 2π total, which wraps away
        let wrapped_diff = (twice.phi() - state.phi() - TAU).abs();
        assert!(wrapped_diff < TEST_TOLERANCE);
        assert!((twice.wrapped_phi() - state.wrapped_phi()).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn test_phase_gates_leave_angles_alone() {
        let state = QubitState::new(1.1, 0.4);
        assert_eq!(Gate::S.apply(&state), state);
        assert_eq!(Gate::T.apply(&state), state);
    }

    #[test]
    fn test_z_leaves_probabilities_alone() {
        let state = QubitState::new(1.1, 0.4);
        let after = Gate::Z.apply(&state);
        assert!((after.prob_zero() - state.prob_zero()).abs() < TEST_TOLERANCE);
        assert!((after.phi() - (state.phi() + PI)).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn test_parse_rejects_unknown_gate() {
        let err = "Q".parse::<Gate>().unwrap_err();
        assert_eq!(err, QulabError::InvalidGate { name: "Q".to_string() });
        assert_eq!("T".parse::<Gate>().unwrap(), Gate::T);
    }
}
