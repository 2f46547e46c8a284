// src/sampling/mod.rs

//! Probabilistic measurement sampling: converts qubit states (or
//! correlated pairs of them) into concrete 0/1 outcome draws.
//!
//! This is the stochastic counterpart to the deterministic
//! `qulab::simulation` path. The two disagree by design: the labs show
//! both a shot sampler and a percentage fold, and each page leans on
//! one of them.

mod record;

pub use record::{MeasurementEvent, MeasurementRecord};

use crate::core::{QubitState, QulabError};
use crate::gates::Gate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// One measurement outcome in the computational basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The |0⟩ result.
    Zero,
    /// The |1⟩ result.
    One,
}

impl Outcome {
    /// The outcome as a bit value.
    pub fn bit(&self) -> u8 {
        match self {
            Outcome::Zero => 0,
            Outcome::One => 1,
        }
    }

    /// The opposite outcome, used for anti-correlated pair sampling.
    pub fn flipped(&self) -> Self {
        match self {
            Outcome::Zero => Outcome::One,
            Outcome::One => Outcome::Zero,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bit())
    }
}

/// How an entangled pair's second outcome relates to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correlation {
    /// Both outcomes always equal.
    Identical,
    /// Outcomes always differ.
    AntiCorrelated,
}

/// The four Bell states, modeled purely as a correlation-mode selector
/// for pair sampling (no two-qubit state vector is tracked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BellState {
    /// |Φ+⟩ = (1/√2)(|00⟩ + |11⟩)
    PhiPlus,
    /// |Φ-⟩ = (1/√2)(|00⟩ - |11⟩)
    PhiMinus,
    /// |Ψ+⟩ = (1/√2)(|01⟩ + |10⟩)
    PsiPlus,
    /// |Ψ-⟩ = (1/√2)(|01⟩ - |10⟩)
    PsiMinus,
}

impl BellState {
    /// Selects a Bell state by the lab's 0..=3 index.
    ///
    /// # Errors
    /// Returns `QulabError::InvalidConfiguration` for indices above 3.
    pub fn from_index(index: usize) -> Result<Self, QulabError> {
        match index {
            0 => Ok(BellState::PhiPlus),
            1 => Ok(BellState::PhiMinus),
            2 => Ok(BellState::PsiPlus),
            3 => Ok(BellState::PsiMinus),
            other => Err(QulabError::InvalidConfiguration {
                message: format!("Bell state index {} out of range 0..=3", other),
            }),
        }
    }

    /// The correlation mode this Bell state imposes on pair sampling.
    /// The Φ states correlate, the Ψ states anti-correlate; the relative
    /// phase sign never reaches the sampled distribution.
    pub fn correlation(&self) -> Correlation {
        match self {
            BellState::PhiPlus | BellState::PhiMinus => Correlation::Identical,
            BellState::PsiPlus | BellState::PsiMinus => Correlation::AntiCorrelated,
        }
    }

    /// The ket formula shown alongside the selector.
    pub fn formula(&self) -> &'static str {
        match self {
            BellState::PhiPlus => "(|00⟩ + |11⟩)/√2",
            BellState::PhiMinus => "(|00⟩ - |11⟩)/√2",
            BellState::PsiPlus => "(|01⟩ + |10⟩)/√2",
            BellState::PsiMinus => "(|01⟩ - |10⟩)/√2",
        }
    }
}

impl fmt::Display for BellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BellState::PhiPlus => "|Φ+⟩",
            BellState::PhiMinus => "|Φ-⟩",
            BellState::PsiPlus => "|Ψ+⟩",
            BellState::PsiMinus => "|Ψ-⟩",
        };
        write!(f, "{}", name)
    }
}

/// Shot counts over the two basis states, as reported by
/// [`MeasurementSampler::sample_distribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotCounts {
    /// Shots landing on |0⟩.
    pub state0: u64,
    /// Shots landing on |1⟩.
    pub state1: u64,
}

impl ShotCounts {
    /// Total shots represented.
    pub fn total(&self) -> u64 {
        self.state0 + self.state1
    }
}

/// Draws probabilistic measurement outcomes from qubit states.
///
/// The sampler owns its random source so repeated draws are cheap; use
/// [`MeasurementSampler::seeded`] when a reproducible stream is needed
/// (tests, replayable demos).
#[derive(Debug)]
pub struct MeasurementSampler {
    rng: StdRng,
}

impl MeasurementSampler {
    /// Creates a sampler seeded from OS entropy.
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    /// Creates a sampler with a fixed seed for reproducible draws.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Samples one measurement of a single qubit.
    ///
    /// Draws one uniform `r` in `[0, 1)` and returns |0⟩ iff
    /// `r < cos²(θ/2)`. Probabilistic and not idempotent: two calls with
    /// the same state may differ.
    pub fn sample_single(&mut self, state: &QubitState) -> Outcome {
        let r: f64 = self.rng.random();
        if r < state.prob_zero() { Outcome::Zero } else { Outcome::One }
    }

    /// Samples one measurement of an entangled pair.
    ///
    /// A single uniform bit decides the first qubit; the second is a
    /// pure deterministic function of the first and the Bell state's
    /// correlation mode. No independent randomness touches the second
    /// qubit — that is the whole point of the entanglement lab.
    pub fn sample_entangled_pair(&mut self, bell: BellState) -> (Outcome, Outcome) {
        let r: f64 = self.rng.random();
        let first = if r < 0.5 { Outcome::Zero } else { Outcome::One };
        let second = match bell.correlation() {
            Correlation::Identical => first,
            Correlation::AntiCorrelated => first.flipped(),
        };
        (first, second)
    }

    /// Samples `shots` single-qubit measurements into a fresh record.
    ///
    /// # Errors
    /// Returns `QulabError::InvalidConfiguration` when `shots` is zero.
    pub fn sample_repeated(
        &mut self,
        state: &QubitState,
        shots: u64,
    ) -> Result<MeasurementRecord, QulabError> {
        if shots == 0 {
            return Err(QulabError::InvalidConfiguration {
                message: "shot count must be positive".to_string(),
            });
        }
        let mut record = MeasurementRecord::new();
        for _ in 0..shots {
            let outcome = self.sample_single(state);
            record.push(outcome);
        }
        Ok(record)
    }

    /// Splits `shots` over the basis states using the circuit lab's
    /// aggregate heuristic:
    ///
    /// - any H present (with or without X): 50/50 split, |0⟩ taking the
    ///   rounded half;
    /// - only X present: every shot lands on |1⟩;
    /// - neither present: every shot lands on |0⟩.
    ///
    /// Gate order and Y/Z/S/T are ignored. This is a coarse display
    /// heuristic reproduced for compatibility, not a simulation of gate
    /// composition.
    ///
    /// # Errors
    /// Returns `QulabError::InvalidConfiguration` when `shots` is zero.
    pub fn sample_distribution(gates: &[Gate], shots: u64) -> Result<ShotCounts, QulabError> {
        if shots == 0 {
            return Err(QulabError::InvalidConfiguration {
                message: "shot count must be positive".to_string(),
            });
        }
        let has_h = gates.contains(&Gate::H);
        let has_x = gates.contains(&Gate::X);

        let state0 = if has_h {
            (shots as f64 / 2.0).round() as u64
        } else if has_x {
            0
        } else {
            shots
        };
        Ok(ShotCounts { state0, state1: shots - state0 })
    }
}

impl Default for MeasurementSampler {
    fn default() -> Self {
        Self::new()
    }
}
