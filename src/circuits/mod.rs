// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! gate operations (`qulab::gates::GateOperation`).
//!
//! This module provides the `Circuit` structure used by the circuit-
//! builder lab: an ordered, length-capped gate sequence applied to a
//! qubit prepared in the ground state, terminated by measurement.

use crate::core::MAX_CIRCUIT_GATES;
use crate::gates::{Gate, GateOperation};
use std::fmt;

/// An ordered sequence of gate operations, capped at
/// [`MAX_CIRCUIT_GATES`] entries.
///
/// The cap mirrors the lab's five-slot builder: attempts to add beyond
/// it are silent no-ops, not errors, because a full palette is a normal
/// interactive condition rather than a caller bug.
#[derive(Debug, Clone, PartialEq, Eq)] // PartialEq useful for testing circuits
pub struct Circuit {
    /// The ordered sequence of operations. Order is significant: the
    /// simulator folds over it left-to-right.
    operations: Vec<GateOperation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self { operations: Vec::new() }
    }

    /// Appends an operation if the circuit has room.
    ///
    /// Returns `true` if the operation was added, `false` if the cap was
    /// already reached and the call was ignored.
    pub fn add_operation(&mut self, op: GateOperation) -> bool {
        if self.operations.len() >= MAX_CIRCUIT_GATES {
            return false;
        }
        self.operations.push(op);
        true
    }

    /// Appends a bare gate targeting qubit 0. Same cap semantics as
    /// [`Circuit::add_operation`].
    pub fn add_gate(&mut self, gate: Gate) -> bool {
        self.add_operation(GateOperation::single(gate))
    }

    /// Removes the operation at `index`, shifting later gates left.
    /// Out-of-range indices are ignored (the builder UI removes by
    /// clicking a slot that may have just been cleared).
    pub fn remove_operation(&mut self, index: usize) {
        if index < self.operations.len() {
            self.operations.remove(index);
        }
    }

    /// Removes all operations.
    pub fn clear(&mut self) {
        self.operations.clear();
    }

    /// Returns a slice containing the ordered sequence of operations.
    pub fn operations(&self) -> &[GateOperation] {
        &self.operations
    }

    /// The gates in order, without target indices.
    pub fn gates(&self) -> impl Iterator<Item = Gate> + '_ {
        self.operations.iter().map(|op| op.gate)
    }

    /// Returns the number of operations in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Remaining capacity before the cap.
    pub fn remaining_slots(&self) -> usize {
        MAX_CIRCUIT_GATES - self.operations.len()
    }
}

// Implement Default for convenient creation of empty circuits.
impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances
/// using method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self { circuit: Circuit::new() }
    }

    /// Adds a single gate (targeting qubit 0) to the circuit being built.
    /// Additions past the cap are ignored, like the interactive builder.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_gate(mut self, gate: Gate) -> Self {
        self.circuit.add_gate(gate);
        self
    }

    /// Adds multiple gates from an iterator to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_gates<I>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = Gate>,
    {
        for gate in gates {
            self.circuit.add_gate(gate);
        }
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

// Implement Default for convenient creation of builders.
impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Single-wire diagram ending in a measurement box, e.g.
        // q0: ───H──────X───── M
        const WIRE: &str = "───";
        write!(f, "q0: ")?;
        if self.operations.is_empty() {
            write!(f, "{}{}", WIRE, WIRE)?;
        } else {
            for op in &self.operations {
                write!(f, "{}{}", WIRE, op.gate)?;
            }
            write!(f, "{}", WIRE)?;
        }
        write!(f, " M")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_is_silent_no_op() {
        let mut circuit = Circuit::new();
        for _ in 0..MAX_CIRCUIT_GATES {
            assert!(circuit.add_gate(Gate::H));
        }
        assert!(!circuit.add_gate(Gate::X), "sixth gate must be ignored");
        assert_eq!(circuit.len(), MAX_CIRCUIT_GATES);
        assert_eq!(circuit.remaining_slots(), 0);
    }

    #[test]
    fn test_builder_chaining_respects_cap() {
        let circuit = CircuitBuilder::new()
            .add_gates([Gate::H, Gate::X, Gate::Y, Gate::Z, Gate::S, Gate::T])
            .build();
        assert_eq!(circuit.len(), MAX_CIRCUIT_GATES);
        let gates: Vec<Gate> = circuit.gates().collect();
        assert_eq!(gates, vec![Gate::H, Gate::X, Gate::Y, Gate::Z, Gate::S]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut circuit = CircuitBuilder::new().add_gates([Gate::H, Gate::X]).build();
        circuit.remove_operation(0);
        assert_eq!(circuit.gates().collect::<Vec<_>>(), vec![Gate::X]);
        circuit.remove_operation(5); // out of range: ignored
        circuit.clear();
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_display_wire() {
        let circuit = CircuitBuilder::new().add_gates([Gate::H, Gate::X]).build();
        assert_eq!(format!("{}", circuit), "q0: ───H───X─── M");
    }
}
