//! Unit kinds and the per-match unit catalogue.
//!
//! - [`UnitKind`]: the six placeable unit types
//! - [`UnitCatalog`]: cost, damage and range per kind, built once from the
//!   game configuration and immutable for the rest of the match

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, Result};
use crate::math::{whole_units, Fixed};

/// Placeable unit types, in the order the game configuration lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitKind {
    /// Cheap blocking structure.
    Wall,
    /// Structure that shields friendly mobile units passing nearby.
    Support,
    /// Structure that attacks hostile units in range.
    Turret,
    /// Fast, fragile mobile unit.
    Scout,
    /// Slow, long-range mobile unit that targets structures.
    Demolisher,
    /// Mobile unit that hunts hostile mobile units.
    Interceptor,
}

impl UnitKind {
    /// All kinds in configuration order.
    pub const ALL: [Self; 6] = [
        Self::Wall,
        Self::Support,
        Self::Turret,
        Self::Scout,
        Self::Demolisher,
        Self::Interceptor,
    ];

    /// Stationary kinds, in the order used when looking for the cheapest one.
    pub const STATIONARY: [Self; 3] = [Self::Wall, Self::Turret, Self::Support];

    /// Position of this kind in the configuration's unit list.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Wall => 0,
            Self::Support => 1,
            Self::Turret => 2,
            Self::Scout => 3,
            Self::Demolisher => 4,
            Self::Interceptor => 5,
        }
    }

    /// Kind at a configuration index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Wall),
            1 => Some(Self::Support),
            2 => Some(Self::Turret),
            3 => Some(Self::Scout),
            4 => Some(Self::Demolisher),
            5 => Some(Self::Interceptor),
            _ => None,
        }
    }

    /// Non-moving structure (Wall, Support, Turret).
    #[must_use]
    pub const fn is_stationary(self) -> bool {
        matches!(self, Self::Wall | Self::Support | Self::Turret)
    }

    /// Unit that walks a path to the opposing edge.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        !self.is_stationary()
    }
}

/// The two independent currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Structure points (SP), spent on stationary units and upgrades.
    Structure,
    /// Mobility points (MP), spent on mobile units.
    Mobility,
}

/// Cost of one unit in both currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitCost {
    /// Structure-point cost.
    pub structure: Fixed,
    /// Mobility-point cost.
    pub mobility: Fixed,
}

impl UnitCost {
    /// Create a cost vector.
    #[must_use]
    pub const fn new(structure: Fixed, mobility: Fixed) -> Self {
        Self {
            structure,
            mobility,
        }
    }

    /// Cost in a single currency.
    #[must_use]
    pub const fn get(&self, currency: Currency) -> Fixed {
        match currency {
            Currency::Structure => self.structure,
            Currency::Mobility => self.mobility,
        }
    }

    /// Whole units purchasable with the given balances.
    #[must_use]
    pub fn affordable(&self, structure: Fixed, mobility: Fixed) -> u32 {
        whole_units(structure, self.structure).min(whole_units(mobility, self.mobility))
    }
}

/// Stats that change once a structure is upgraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeStats {
    /// Cost of the upgrade itself.
    pub cost: UnitCost,
    /// Damage per hit against mobile units after upgrading.
    pub damage_to_mobile: Fixed,
    /// Attack range after upgrading.
    pub range: Fixed,
}

/// Per-kind stats sourced from the game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitStats {
    /// Wire shorthand (e.g. "FF", "PI").
    pub shorthand: String,
    /// Placement cost.
    pub cost: UnitCost,
    /// Damage per hit against mobile units.
    pub damage_to_mobile: Fixed,
    /// Attack range in cells.
    pub range: Fixed,
    /// Upgraded stats, when the kind can be upgraded.
    pub upgrade: Option<UpgradeStats>,
}

/// Lookup from [`UnitKind`] to its stats.
///
/// Built once at match start, then shared read-only by every planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitCatalog {
    stats: Vec<UnitStats>,
    upgrade_shorthand: String,
}

impl UnitCatalog {
    /// Build a catalogue from stats listed in [`UnitKind::ALL`] order.
    pub fn new(stats: Vec<UnitStats>, upgrade_shorthand: impl Into<String>) -> Result<Self> {
        if stats.len() < UnitKind::ALL.len() {
            return Err(AlgoError::IncompleteCatalog {
                expected: UnitKind::ALL.len(),
                found: stats.len(),
            });
        }
        let mut stats = stats;
        stats.truncate(UnitKind::ALL.len());
        Ok(Self {
            stats,
            upgrade_shorthand: upgrade_shorthand.into(),
        })
    }

    /// Stats for a kind.
    #[must_use]
    pub fn get(&self, kind: UnitKind) -> &UnitStats {
        &self.stats[kind.index()]
    }

    /// Placement cost for a kind.
    #[must_use]
    pub fn cost(&self, kind: UnitKind) -> UnitCost {
        self.get(kind).cost
    }

    /// Damage a kind deals to mobile units. Zero for non-attackers.
    #[must_use]
    pub fn damage(&self, kind: UnitKind) -> Fixed {
        self.get(kind).damage_to_mobile
    }

    /// Wire shorthand for a kind.
    #[must_use]
    pub fn shorthand(&self, kind: UnitKind) -> &str {
        &self.get(kind).shorthand
    }

    /// Wire shorthand for the upgrade action.
    #[must_use]
    pub fn upgrade_shorthand(&self) -> &str {
        &self.upgrade_shorthand
    }

    /// Reverse lookup from a wire shorthand.
    #[must_use]
    pub fn kind_for_shorthand(&self, shorthand: &str) -> Option<UnitKind> {
        UnitKind::ALL
            .into_iter()
            .find(|&kind| self.shorthand(kind) == shorthand)
    }

    /// Cheapest stationary kind in one currency.
    ///
    /// Candidates are checked in Wall, Turret, Support order and only a
    /// strictly cheaper kind replaces the current pick, so Wall wins ties.
    #[must_use]
    pub fn cheapest_stationary(&self, currency: Currency) -> UnitKind {
        let mut cheapest = UnitKind::Wall;
        for kind in UnitKind::STATIONARY {
            if self.cost(kind).get(currency) < self.cost(cheapest).get(currency) {
                cheapest = kind;
            }
        }
        cheapest
    }
}
