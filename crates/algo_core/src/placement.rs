//! Placement requests: the planners' unit of output.

use serde::{Deserialize, Serialize};

use crate::coords::Coordinate;
use crate::units::UnitKind;

/// Quantity meaning "as many as the balance allows".
///
/// The engine clamps every request to affordability, so asking for the
/// maximum is how a full-budget wave is expressed.
pub const AS_MANY_AS_AFFORDABLE: u32 = u32::MAX;

/// What the engine should do at the requested cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementOrder {
    /// Place new units.
    Spawn,
    /// Upgrade the agent's existing structure.
    Upgrade,
}

/// A desired placement.
///
/// `quantity` applies to each location in turn. Fulfilment is best-effort:
/// the engine clamps to what is affordable, skips cells already blocked by a
/// structure and ignores upgrades of missing or already-upgraded structures.
/// Planners never learn how much of a request was honoured.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementRequest {
    /// Spawn or upgrade.
    pub order: PlacementOrder,
    /// Unit kind to place (for upgrades, the structure kind expected there).
    pub kind: UnitKind,
    /// Target cells, in the order they should be attempted.
    pub locations: Vec<Coordinate>,
    /// Desired count per location.
    pub quantity: u32,
}

impl PlacementRequest {
    /// Spawn one unit at each location.
    #[must_use]
    pub fn spawn(kind: UnitKind, locations: Vec<Coordinate>) -> Self {
        Self {
            order: PlacementOrder::Spawn,
            kind,
            locations,
            quantity: 1,
        }
    }

    /// Spawn `quantity` units at a single location.
    #[must_use]
    pub fn spawn_many(kind: UnitKind, location: Coordinate, quantity: u32) -> Self {
        Self {
            order: PlacementOrder::Spawn,
            kind,
            locations: vec![location],
            quantity,
        }
    }

    /// Upgrade the structures at each location.
    #[must_use]
    pub fn upgrade(kind: UnitKind, locations: Vec<Coordinate>) -> Self {
        Self {
            order: PlacementOrder::Upgrade,
            kind,
            locations,
            quantity: 1,
        }
    }

    /// Whether this request asks for new units.
    #[must_use]
    pub fn is_spawn(&self) -> bool {
        self.order == PlacementOrder::Spawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let at = Coordinate::new(13, 0);
        let many = PlacementRequest::spawn_many(UnitKind::Scout, at, 7);
        assert!(many.is_spawn());
        assert_eq!(many.locations, vec![at]);
        assert_eq!(many.quantity, 7);

        let up = PlacementRequest::upgrade(UnitKind::Turret, vec![at]);
        assert_eq!(up.order, PlacementOrder::Upgrade);
        assert!(!up.is_spawn());
    }
}
