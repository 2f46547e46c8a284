// src/simulation/results.rs
use std::fmt;

/// Holds the result of a deterministic circuit simulation: the
/// measurement-probability distribution as rounded integer percentages.
///
/// The two fields always sum to exactly 100: `state1` is defined as
/// `100 − state0` after rounding, so rounding error cannot break the
/// conservation guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOutcome {
    state0: u8,
    state1: u8,
}

impl SimulationOutcome {
    /// Builds an outcome from the final running |0⟩ probability
    /// percentage. (Internal visibility)
    pub(crate) fn from_prob_zero(prob0_percent: f64) -> Self {
        let state0 = prob0_percent.round().clamp(0.0, 100.0) as u8;
        Self { state0, state1: 100 - state0 }
    }

    /// Percentage of shots expected on |0⟩.
    pub fn state0_percent(&self) -> u8 {
        self.state0
    }

    /// Percentage of shots expected on |1⟩.
    pub fn state1_percent(&self) -> u8 {
        self.state1
    }
}

impl fmt::Display for SimulationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|0⟩: {}%  |1⟩: {}%", self.state0, self.state1)
    }
}
