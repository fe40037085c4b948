//! Tuning for the planners, loadable from RON.
//!
//! `AlgoConfig::default()` is the stock policy. A RON file only needs to
//! name the fields it changes; everything else falls back to the defaults.
//!
//! # Example RON
//!
//! ```ron
//! AlgoConfig(
//!     offense: (
//!         early_game_turns: 3,
//!         stall: RandomEdges,
//!     ),
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coords::{coords, Coordinate, Span, Zone};
use crate::error::{AlgoError, Result};
use crate::layout::DefenseLayout;
use crate::risk::RiskMode;

/// Complete planner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgoConfig {
    /// Static and reactive defense settings.
    pub defense: DefenseConfig,
    /// Offense settings.
    pub offense: OffenseConfig,
}

impl AlgoConfig {
    /// Load a configuration from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AlgoError::ConfigNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Load from a RON string.
    pub fn from_ron_str(ron: &str) -> Result<Self> {
        let config: AlgoConfig = ron::from_str(ron)?;
        Ok(config)
    }
}

/// Defense settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefenseConfig {
    /// Layout re-requested every turn.
    pub layout: DefenseLayout,
    /// Emit one reactive turret per distinct breach cell instead of one per
    /// recorded breach. Off by default: the full history is replayed.
    pub compact_reactive: bool,
}

impl Default for DefenseConfig {
    fn default() -> Self {
        Self {
            layout: DefenseLayout::default(),
            compact_reactive: false,
        }
    }
}

/// How the early game stalls for time with interceptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StallPolicy {
    /// One interceptor at each listed cell.
    Fixed(Vec<Coordinate>),
    /// Spend the interceptor budget one unit at a time on random unblocked
    /// cells of our own edges.
    RandomEdges,
}

impl Default for StallPolicy {
    fn default() -> Self {
        Self::Fixed(coords(&[(7, 6), (20, 6)]))
    }
}

/// Offense settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffenseConfig {
    /// Turns before this number are early game.
    pub early_game_turns: u32,
    /// Candidate deployment lanes, in tie-break order.
    pub lanes: Vec<Coordinate>,
    /// Zone watched to decide on a bombardment.
    pub front_zone: Zone,
    /// Bombard when strictly more hostile structures than this stand in the
    /// front zone.
    pub front_threshold: usize,
    /// Zone watched to decide on a scout swarm.
    pub rear_zone: Zone,
    /// Swarm when strictly more hostile structures than this stand in the
    /// rear zone (odd turns only).
    pub rear_threshold: usize,
    /// How the swarm picks its lane. `Maximize` sends it down the most
    /// contested path instead of the safest one.
    pub swarm_lane: RiskMode,
    /// Row the bombardment formation line is built on.
    pub formation_row: i32,
    /// Columns the formation line covers, built from `max` down to `min`.
    pub formation_columns: Span,
    /// Support sites requested every turn after the early game.
    pub support_sites: Vec<Coordinate>,
    /// Early-game stall.
    pub stall: StallPolicy,
}

/// The twelve edge lanes, paired left/right from the back corners inward.
pub const DEFAULT_LANES: &[(i32, i32)] = &[
    (3, 10),
    (24, 10),
    (5, 8),
    (22, 8),
    (7, 6),
    (20, 6),
    (9, 4),
    (18, 4),
    (11, 2),
    (16, 2),
    (13, 0),
    (14, 0),
];

impl Default for OffenseConfig {
    fn default() -> Self {
        Self {
            early_game_turns: 4,
            lanes: coords(DEFAULT_LANES),
            front_zone: Zone::rows(14, 15),
            front_threshold: 10,
            rear_zone: Zone::new(Span::new(17, 22), Span::new(16, 19)),
            rear_threshold: 10,
            swarm_lane: RiskMode::Minimize,
            formation_row: 11,
            formation_columns: Span::new(6, 27),
            support_sites: coords(&[(8, 9), (20, 9), (10, 7), (17, 7)]),
            stall: StallPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AlgoConfig::default();
        assert_eq!(config.offense.lanes.len(), 12);
        assert_eq!(config.offense.early_game_turns, 4);
        assert!(!config.defense.compact_reactive);
        assert_eq!(
            config.offense.stall,
            StallPolicy::Fixed(vec![Coordinate::new(7, 6), Coordinate::new(20, 6)])
        );
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let config = AlgoConfig::from_ron_str(
            "(offense: (early_game_turns: 2, stall: RandomEdges), defense: (compact_reactive: true))",
        )
        .unwrap();
        assert_eq!(config.offense.early_game_turns, 2);
        assert_eq!(config.offense.stall, StallPolicy::RandomEdges);
        assert!(config.defense.compact_reactive);
        assert_eq!(config.offense.lanes, coords(DEFAULT_LANES));
        assert_eq!(config.defense.layout, DefenseLayout::default());
    }

    #[test]
    fn test_ron_zone_override() {
        let config = AlgoConfig::from_ron_str(
            "(offense: (front_zone: (rows: Some((min: 14, max: 14))), front_threshold: 4))",
        )
        .unwrap();
        assert_eq!(config.offense.front_zone, Zone::rows(14, 14));
        assert_eq!(config.offense.front_threshold, 4);
        assert_eq!(config.offense.swarm_lane, RiskMode::Minimize);
    }

    #[test]
    fn test_bad_ron_is_parse_error() {
        let err = AlgoConfig::from_ron_str("(offense: (lanes: 12))").unwrap_err();
        assert!(matches!(err, AlgoError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AlgoConfig::load("/definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, AlgoError::ConfigNotFound(_)));
    }
}
