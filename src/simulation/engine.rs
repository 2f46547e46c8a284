// src/simulation/engine.rs
use crate::gates::Gate;
use crate::simulation::SimulationOutcome;

/// The deterministic circuit-probability engine. (Internal visibility)
///
/// This is the simplified percentage model the circuit lab displays, not
/// a quantum state evolution: it tracks a single running |0⟩ percentage
/// through the gate sequence. It deliberately diverges from the shot
/// sampler in `crate::sampling`; the lab pages present both models and
/// both behaviors are kept.
pub(crate) struct FoldEngine {
    /// Running |0⟩ probability as a percentage.
    prob0: f64,
}

impl FoldEngine {
    /// Starts the fold at 50%, the circuit lab's displayed baseline for
    /// any non-empty run. The empty-circuit (ground state) case is
    /// handled by the `Simulator` before the engine is constructed.
    pub(crate) fn start() -> Self {
        Self { prob0: 50.0 }
    }

    /// Folds one gate into the running probability:
    /// H resets to 50, X reflects, everything else is a no-op.
    /// Gate order beyond these rules (and Y/Z/S/T entirely) does not
    /// influence the aggregate; this matches the lab's heuristic.
    pub(crate) fn apply(&mut self, gate: Gate) {
        match gate {
            Gate::H => self.prob0 = 50.0,
            Gate::X => self.prob0 = 100.0 - self.prob0,
            Gate::Y | Gate::Z | Gate::S | Gate::T => {}
        }
    }

    /// Finishes the fold, rounding into an outcome that sums to 100.
    pub(crate) fn finish(self) -> SimulationOutcome {
        SimulationOutcome::from_prob_zero(self.prob0)
    }
}
