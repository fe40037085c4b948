//! JSON line protocol spoken with the match engine.
//!
//! The engine writes one JSON object per line on our stdin and reads our
//! orders from stdout:
//!
//! **Input (stdin):** the game configuration, then one frame per line
//! **Output (stdout):** two lines per turn, build phase then deploy phase
//!
//! # Protocol Flow
//!
//! 1. First line: game configuration with the `unitInformation` table
//! 2. Turn-start frame (`turnInfo[0] == 0`): we answer with two lines
//! 3. Action frames (`turnInfo[0] == 1`): streamed while units move, no answer
//! 4. Game-over frame (`turnInfo[0] == 2`): we stop reading
//!
//! # Example Session
//!
//! ```text
//! -> {"unitInformation":[{"shorthand":"FF","cost1":1.0}, ...]}
//! -> {"turnInfo":[0,0,0],"p1Stats":[30,40,5,0],"p1Units":[[],[],...],...}
//! <- [["DF",3,12],["DF",24,12],["UP",3,12]]
//! <- [["PI",22,8],["PI",22,8]]
//! -> {"turnInfo":[1,0,1],"events":{"breach":[[[5,0],1,3,"17",2]]}}
//! -> {"turnInfo":[2,14,300]}
//! ```

use algo_core::error::AlgoError;
use algo_core::context::{Player, Resources};
use algo_core::coords::Coordinate;
use algo_core::math::{fixed_from_f64, Fixed};
use algo_core::units::{UnitCatalog, UnitCost, UnitKind, UnitStats, UpgradeStats};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors from decoding the engine's messages.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A line was not valid JSON for the expected message.
    #[error("Malformed message: {0}")]
    Json(#[from] serde_json::Error),

    /// The unit table could not be turned into a catalogue.
    #[error("Invalid unit table: {0}")]
    Catalog(#[from] AlgoError),

    /// A required field is absent.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Reading from or writing to the engine failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Upgrade overrides for one unit kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeInfo {
    /// Structure-point cost of the upgrade.
    pub cost1: Option<f64>,
    /// Mobility-point cost of the upgrade.
    pub cost2: Option<f64>,
    /// Damage to mobile units after upgrading.
    pub attack_damage_walker: Option<f64>,
    /// Range after upgrading.
    pub attack_range: Option<f64>,
}

/// One row of the `unitInformation` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInfo {
    /// Wire shorthand.
    pub shorthand: Option<String>,
    /// Structure-point cost.
    pub cost1: Option<f64>,
    /// Mobility-point cost.
    pub cost2: Option<f64>,
    /// Damage per hit against mobile units.
    pub attack_damage_walker: Option<f64>,
    /// Attack range in cells.
    pub attack_range: Option<f64>,
    /// Upgrade overrides, for upgradable kinds.
    pub upgrade: Option<UpgradeInfo>,
}

fn fixed_or_zero(value: Option<f64>) -> Fixed {
    value.map_or(Fixed::ZERO, fixed_from_f64)
}

impl UnitInfo {
    fn to_stats(&self, index: usize) -> Result<UnitStats, ProtocolError> {
        let shorthand = self
            .shorthand
            .clone()
            .ok_or(ProtocolError::MissingField("unitInformation[].shorthand"))?;
        let damage_to_mobile = fixed_or_zero(self.attack_damage_walker);
        let range = fixed_or_zero(self.attack_range);
        let upgrade = self.upgrade.as_ref().map(|up| UpgradeStats {
            cost: UnitCost::new(fixed_or_zero(up.cost1), fixed_or_zero(up.cost2)),
            damage_to_mobile: up.attack_damage_walker.map_or(damage_to_mobile, fixed_from_f64),
            range: up.attack_range.map_or(range, fixed_from_f64),
        });
        tracing::debug!(index, %shorthand, "Loaded unit stats");
        Ok(UnitStats {
            shorthand,
            cost: UnitCost::new(fixed_or_zero(self.cost1), fixed_or_zero(self.cost2)),
            damage_to_mobile,
            range,
            upgrade,
        })
    }
}

/// Index of the upgrade action in the unit table.
const UPGRADE_INDEX: usize = 7;

/// Shorthand used when the table does not name the upgrade action.
pub const DEFAULT_UPGRADE_SHORTHAND: &str = "UP";

/// The first line the engine sends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Unit table: six placeable kinds, then removal and upgrade actions.
    #[serde(default)]
    pub unit_information: Vec<UnitInfo>,
}

impl GameConfig {
    /// Parse from a JSON line.
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the unit catalogue from the table.
    pub fn catalog(&self) -> Result<UnitCatalog, ProtocolError> {
        let stats = self
            .unit_information
            .iter()
            .take(UnitKind::ALL.len())
            .enumerate()
            .map(|(i, info)| info.to_stats(i))
            .collect::<Result<Vec<_>, _>>()?;
        let upgrade_shorthand = self
            .unit_information
            .get(UPGRADE_INDEX)
            .and_then(|info| info.shorthand.clone())
            .unwrap_or_else(|| DEFAULT_UPGRADE_SHORTHAND.to_string());
        Ok(UnitCatalog::new(stats, upgrade_shorthand)?)
    }
}

/// What a frame announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Start of a deploy phase: the engine waits for our orders.
    TurnStart,
    /// Mid-turn simulation frame.
    Action,
    /// Match finished.
    GameOver,
    /// Anything else.
    Unknown,
}

/// A board state frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurnFrame {
    /// `[frame kind, turn number, action frame number]`.
    #[serde(rename = "turnInfo", default)]
    pub turn_info: Vec<i64>,
    /// `[health, structure points, mobility points, time]` for us.
    #[serde(rename = "p1Stats", default)]
    pub p1_stats: Vec<f64>,
    /// Our units, grouped by unit table index.
    #[serde(rename = "p1Units", default)]
    pub p1_units: Vec<Vec<Vec<Value>>>,
    /// Opponent units, grouped by unit table index.
    #[serde(rename = "p2Units", default)]
    pub p2_units: Vec<Vec<Vec<Value>>>,
}

impl TurnFrame {
    /// Parse from a JSON line.
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Classify the frame.
    #[must_use]
    pub fn kind(&self) -> FrameKind {
        match self.turn_info.first().copied() {
            Some(0) => FrameKind::TurnStart,
            Some(1) => FrameKind::Action,
            Some(2) => FrameKind::GameOver,
            _ => FrameKind::Unknown,
        }
    }

    /// Turn number, or zero when absent.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_info
            .get(1)
            .and_then(|&t| u32::try_from(t).ok())
            .unwrap_or(0)
    }

    /// Our balance.
    #[must_use]
    pub fn resources(&self) -> Resources {
        let stat = |i: usize| self.p1_stats.get(i).copied().map_or(Fixed::ZERO, fixed_from_f64);
        Resources::new(stat(1), stat(2))
    }

    /// Cells listed under one unit table index for a player.
    #[must_use]
    pub fn unit_cells(&self, owner: Player, index: usize) -> Vec<Coordinate> {
        let groups = match owner {
            Player::Us => &self.p1_units,
            Player::Them => &self.p2_units,
        };
        groups
            .get(index)
            .map(|entries| entries.iter().filter_map(|e| entry_cell(e)).collect())
            .unwrap_or_default()
    }
}

/// Decode `[x, y, health, id]`, skipping entries without integer coordinates.
fn entry_cell(entry: &[Value]) -> Option<Coordinate> {
    let x = i32::try_from(entry.first()?.as_i64()?).ok()?;
    let y = i32::try_from(entry.get(1)?.as_i64()?).ok()?;
    Some(Coordinate::new(x, y))
}

/// One order on the wire: `[shorthand, x, y]`.
pub type WireOrder = (String, i32, i32);

/// Everything we send back for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnSubmission {
    /// Structures and upgrades.
    pub build: Vec<WireOrder>,
    /// Mobile units.
    pub deploy: Vec<WireOrder>,
}

impl TurnSubmission {
    /// Serialize as the two JSON lines the engine expects (with newlines).
    #[must_use]
    pub fn to_json_lines(&self) -> String {
        let line = |orders: &[WireOrder]| {
            serde_json::to_string(orders).unwrap_or_else(|e| {
                tracing::error!("Failed to serialize orders: {}", e);
                "[]".to_string()
            })
        };
        format!("{}\n{}\n", line(&self.build), line(&self.deploy))
    }
}
