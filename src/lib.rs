// src/lib.rs

//! `qulab` - the simulation engine behind a set of interactive quantum labs
//!
//! This library unifies the state and "physics" logic that the lab pages
//! (qubit rotation, gate circuits, entanglement, noise, superposition,
//! measurement) previously each reimplemented for themselves: Bloch-angle
//! qubit states, named gate transformations, probabilistic measurement
//! sampling with correlated-pair and noise-perturbed modes, and a
//! deterministic circuit-probability simulator. Everything is a pure
//! value-in/value-out computation; the hosting UI owns interaction state
//! and re-renders from the returned values.

pub mod core;
pub mod gates;
pub mod circuits;
pub mod simulation;
pub mod sampling;
pub mod noise;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{AmplitudeState, QubitState, QulabError};
pub use gates::{Gate, GateOperation};
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{ExperimentRunner, RunToken, SimulationOutcome, Simulator};
pub use sampling::{BellState, Correlation, MeasurementRecord, MeasurementSampler, Outcome, ShotCounts};
pub use noise::NoiseModel;
pub use validation::{check_amplitude_normalization, check_bloch_unit, check_normalization};

// Example 1: Gate application and the Bloch display quantities
// Demonstrates applying gates to the ground state and reading back the
// probabilities and Bloch vector the qubit lab renders.
/// ```
/// use qulab::{Gate, QubitState};
///
/// let ground = QubitState::ground();
/// assert_eq!(ground.prob_zero(), 1.0);
///
/// // Hadamard puts the qubit on the equator: 50/50 measurement odds.
/// let plus = Gate::H.apply(&ground);
/// assert!((plus.prob_zero() - 0.5).abs() < 1e-9);
/// let (_, _, z) = plus.bloch_vector();
/// assert!(z.abs() < 1e-9);
///
/// // X is an involution on θ.
/// let back = Gate::X.apply(&Gate::X.apply(&plus));
/// assert!((back.theta() - plus.theta()).abs() < 1e-9);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Circuit builder and entangled sampling
// Demonstrates the deterministic circuit fold and perfectly correlated
// Bell-pair draws.
/// ```
/// use qulab::{BellState, CircuitBuilder, Gate, MeasurementSampler, Simulator};
///
/// // H then X: the fold resets to 50, then reflects 50 -> 50.
/// let circuit = CircuitBuilder::new()
///     .add_gates([Gate::H, Gate::X])
///     .build();
/// let outcome = Simulator::new().run(&circuit).unwrap();
/// assert_eq!(outcome.state0_percent() + outcome.state1_percent(), 100);
/// assert_eq!(outcome.state0_percent(), 50);
///
/// // |Φ+⟩ pairs always agree, whatever the draw.
/// let mut sampler = MeasurementSampler::seeded(42);
/// for _ in 0..100 {
///     let (first, second) = sampler.sample_entangled_pair(BellState::PhiPlus);
///     assert_eq!(first, second);
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
