//! Breach ledger: where the opponent has scored on us.
//!
//! The ledger only ever grows. Each record is replayed by the reactive
//! defense pass every turn, which is harmless because the engine treats a
//! repeated placement on an occupied cell as a no-op.

use crate::coords::Coordinate;

/// One observed breach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreachRecord {
    /// Edge cell the hostile unit reached.
    pub location: Coordinate,
    /// Turn during which the breach was observed.
    pub turn: u32,
}

/// Append-only breach history for the match.
#[derive(Debug, Clone, Default)]
pub struct BreachLedger {
    records: Vec<BreachRecord>,
}

impl BreachLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a breach. Duplicates are kept.
    pub fn record_breach(&mut self, location: Coordinate, turn: u32) {
        self.records.push(BreachRecord { location, turn });
        tracing::debug!(
            %location,
            turn,
            total = self.records.len(),
            "Recorded breach"
        );
    }

    /// Breach locations in the order they were recorded.
    #[must_use]
    pub fn all_breaches(&self) -> Vec<Coordinate> {
        self.records.iter().map(|r| r.location).collect()
    }

    /// Breach locations with later repeats dropped, first-seen order kept.
    #[must_use]
    pub fn distinct_breaches(&self) -> Vec<Coordinate> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .map(|r| r.location)
            .filter(|l| seen.insert(*l))
            .collect()
    }

    /// Full records, including the turn each was observed.
    #[must_use]
    pub fn records(&self) -> &[BreachRecord] {
        &self.records
    }

    /// Number of recorded breaches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
