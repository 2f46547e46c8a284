// src/simulation/mod.rs

//! Simulates the execution of `qulab::circuits::Circuit` as the circuit
//! lab displays it. This module contains the `Simulator` entry point,
//! the internal fold engine, and the run-supersession runner used by
//! interactive pages.

// Make engine module crate visible for tests
pub(crate) mod engine;
mod results;
pub mod runner;

// Re-export the main public interface types
pub use results::SimulationOutcome;
pub use runner::{ExperimentRunner, RunToken};

// Import necessary types for the Simulator struct and its methods
use crate::circuits::Circuit;
use crate::core::QulabError;
use engine::FoldEngine;

/// The deterministic simulator behind the circuit-builder lab.
///
/// Unlike [`crate::sampling::MeasurementSampler`], this path draws no
/// randomness at all: the same circuit always yields the same
/// percentages. The two paths model measurement differently and the
/// divergence is kept deliberately; each lab page leans on one of them.
#[derive(Default)] // Allows Simulator::default() -> Simulator::new()
pub struct Simulator {}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the circuit and reports the measurement-probability
    /// distribution as rounded integer percentages summing to 100.
    ///
    /// An empty circuit reports the ground state, `{100, 0}`. A
    /// non-empty circuit folds left-to-right from a 50% baseline:
    /// H resets the running |0⟩ probability to 50, X reflects it, and
    /// all other gates leave it unchanged. Both behaviors reproduce the
    /// lab exactly, including the physically inconsistent `[X]` → 50/50
    /// result (the fold baseline, not the ground state, feeds the X).
    ///
    /// # Errors
    /// Currently infallible for every constructible `Circuit` (the cap
    /// is enforced at insertion); the `Result` keeps the run surface
    /// uniform with the sampling paths.
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationOutcome, QulabError> {
        // Ground state: no gates were applied, so measurement is certain.
        if circuit.is_empty() {
            return Ok(SimulationOutcome::from_prob_zero(100.0));
        }

        let mut engine = FoldEngine::start();
        for gate in circuit.gates() {
            engine.apply(gate);
        }
        Ok(engine.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;
    use crate::gates::Gate;

    #[test]
    fn test_empty_circuit_is_ground_state() -> Result<(), QulabError> {
        let simulator = Simulator::new();
        let outcome = simulator.run(&Circuit::new())?;
        assert_eq!(outcome.state0_percent(), 100);
        assert_eq!(outcome.state1_percent(), 0);
        Ok(())
    }

    #[test]
    fn test_single_x_reflects_the_baseline() -> Result<(), QulabError> {
        // The fold starts at 50 for any non-empty circuit, so X maps
        // 50 -> 50. Lab behavior, not textbook physics.
        let circuit = CircuitBuilder::new().add_gate(Gate::X).build();
        let outcome = Simulator::new().run(&circuit)?;
        assert_eq!(outcome.state0_percent(), 50);
        assert_eq!(outcome.state1_percent(), 50);
        Ok(())
    }

    #[test]
    fn test_double_hadamard_resets_to_even_split() -> Result<(), QulabError> {
        let circuit = CircuitBuilder::new().add_gates([Gate::H, Gate::H]).build();
        let outcome = Simulator::new().run(&circuit)?;
        assert_eq!(outcome.state0_percent(), 50);
        assert_eq!(outcome.state1_percent(), 50);
        Ok(())
    }

    #[test]
    fn test_h_then_x_reflects_even_split() -> Result<(), QulabError> {
        let circuit = CircuitBuilder::new().add_gates([Gate::H, Gate::X]).build();
        let outcome = Simulator::new().run(&circuit)?;
        assert_eq!(outcome.state0_percent(), 50);
        Ok(())
    }

    #[test]
    fn test_phase_gates_do_not_move_the_fold() -> Result<(), QulabError> {
        let circuit = CircuitBuilder::new()
            .add_gates([Gate::Y, Gate::Z, Gate::S, Gate::T])
            .build();
        let outcome = Simulator::new().run(&circuit)?;
        assert_eq!(outcome.state0_percent(), 50);
        Ok(())
    }
}
