// src/sampling/record.rs
use crate::sampling::Outcome;
use std::fmt;

/// One recorded measurement: a lone outcome or a correlated pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementEvent {
    /// A single-qubit draw.
    Single(Outcome),
    /// An entangled-pair draw (first qubit, second qubit).
    Pair(Outcome, Outcome),
}

/// An append-only log of measurement outcomes, used for histograms and
/// running counts on the lab pages.
///
/// Entries are never mutated after being appended; the only other
/// operation is an explicit [`MeasurementRecord::clear`] on reset. For
/// pair events the aggregation counts the first qubit, which is how the
/// entanglement lab tallies its distribution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementRecord {
    events: Vec<MeasurementEvent>,
}

impl MeasurementRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single-qubit outcome.
    pub fn push(&mut self, outcome: Outcome) {
        self.events.push(MeasurementEvent::Single(outcome));
    }

    /// Appends a correlated pair outcome.
    pub fn push_pair(&mut self, pair: (Outcome, Outcome)) {
        self.events.push(MeasurementEvent::Pair(pair.0, pair.1));
    }

    /// Discards every entry (explicit reset).
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates events in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &MeasurementEvent> {
        self.events.iter()
    }

    /// Count of events whose (first) outcome was |0⟩.
    pub fn zero_count(&self) -> usize {
        self.events.iter().filter(|e| self.first_outcome(e) == Outcome::Zero).count()
    }

    /// Count of events whose (first) outcome was |1⟩.
    pub fn one_count(&self) -> usize {
        self.events.len() - self.zero_count()
    }

    /// Percentage of |0⟩ outcomes. An empty record reports 0% (the
    /// engine-wide 0/0 → 0% convention).
    pub fn percent_zero(&self) -> f64 {
        if self.events.is_empty() {
            0.0
        } else {
            self.zero_count() as f64 / self.events.len() as f64 * 100.0
        }
    }

    /// Percentage of |1⟩ outcomes, same convention as
    /// [`MeasurementRecord::percent_zero`].
    pub fn percent_one(&self) -> f64 {
        if self.events.is_empty() {
            0.0
        } else {
            self.one_count() as f64 / self.events.len() as f64 * 100.0
        }
    }

    fn first_outcome(&self, event: &MeasurementEvent) -> Outcome {
        match event {
            MeasurementEvent::Single(o) => *o,
            MeasurementEvent::Pair(first, _) => *first,
        }
    }
}

impl fmt::Display for MeasurementRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement Record ({} events):", self.len())?;
        writeln!(f, "  |0⟩: {} ({:.1}%)", self.zero_count(), self.percent_zero())?;
        writeln!(f, "  |1⟩: {} ({:.1}%)", self.one_count(), self.percent_one())
    }
}
