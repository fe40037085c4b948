//! Read-only per-turn snapshot supplied by the game engine.

use serde::{Deserialize, Serialize};

use crate::coords::{Coordinate, Zone};
use crate::math::Fixed;
use crate::units::UnitKind;

/// Player seat from this agent's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The agent (player index 0, bottom half of the board).
    Us,
    /// The opponent (player index 1, top half of the board).
    Them,
}

impl Player {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Us => Self::Them,
            Self::Them => Self::Us,
        }
    }

    /// Zero-based player index used by the engine's query API.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Us => 0,
            Self::Them => 1,
        }
    }
}

/// Current balance in both currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resources {
    /// Structure points.
    pub structure: Fixed,
    /// Mobility points.
    pub mobility: Fixed,
}

impl Resources {
    /// Create a balance.
    #[must_use]
    pub const fn new(structure: Fixed, mobility: Fixed) -> Self {
        Self {
            structure,
            mobility,
        }
    }
}

/// A structure standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationaryUnit {
    /// Structure kind.
    pub kind: UnitKind,
    /// Cell it occupies.
    pub location: Coordinate,
    /// Seat that owns it.
    pub owner: Player,
    /// Whether it has been upgraded.
    pub upgraded: bool,
}

/// Snapshot of the board at the start of a turn.
///
/// Produced by the engine and never mutated by the planners.
#[derive(Debug, Clone, Default)]
pub struct TurnContext {
    /// Zero-based turn number.
    pub turn_number: u32,
    /// The agent's balance.
    pub resources: Resources,
    /// Every structure on the board, both seats.
    pub stationary: Vec<StationaryUnit>,
}

impl TurnContext {
    /// Create an empty snapshot for a turn.
    #[must_use]
    pub fn new(turn_number: u32, resources: Resources) -> Self {
        Self {
            turn_number,
            resources,
            stationary: Vec::new(),
        }
    }

    /// Add a structure (builder style, mostly for fixtures).
    #[must_use]
    pub fn with_unit(mut self, kind: UnitKind, location: Coordinate, owner: Player) -> Self {
        self.stationary.push(StationaryUnit {
            kind,
            location,
            owner,
            upgraded: false,
        });
        self
    }

    /// Whether any structure occupies the cell.
    #[must_use]
    pub fn is_blocked(&self, location: Coordinate) -> bool {
        self.stationary.iter().any(|u| u.location == location)
    }

    /// Number of structures owned by `owner` standing on exactly `location`.
    #[must_use]
    pub fn stationary_at(&self, location: Coordinate, owner: Player) -> usize {
        self.stationary
            .iter()
            .filter(|u| u.owner == owner && u.location == location)
            .count()
    }

    /// Count structures owned by `owner` inside `zone`, optionally of one kind.
    #[must_use]
    pub fn count_stationary(&self, owner: Player, zone: &Zone, kind: Option<UnitKind>) -> usize {
        self.stationary
            .iter()
            .filter(|u| u.owner == owner)
            .filter(|u| kind.map_or(true, |k| u.kind == k))
            .filter(|u| zone.contains(u.location))
            .count()
    }

    /// Drop the given cells, keeping only those with no structure on them.
    #[must_use]
    pub fn unblocked(&self, locations: &[Coordinate]) -> Vec<Coordinate> {
        locations
            .iter()
            .copied()
            .filter(|&l| !self.is_blocked(l))
            .collect()
    }
}
