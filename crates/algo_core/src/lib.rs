//! # Algo Core
//!
//! Per-turn decision engine for a two-player grid tower-defense match.
//!
//! This crate contains **only** planning logic:
//! - No wire protocol (see `algo_headless`)
//! - No simulation, pathfinding or map storage (queried via [`Battlefield`])
//! - No system randomness (the orchestrator owns a seeded RNG)
//! - No floating-point math (resources and damage use fixed-point)
//!
//! Each turn the [`TurnOrchestrator`] runs a fixed pipeline:
//! static defense, reactive patches at remembered breaches, then either the
//! early-game probe or the assess/bombard/swarm/support branch. The result is
//! an ordered list of [`PlacementRequest`]s handed to the game engine.
//!
//! ## Crate Structure
//!
//! - [`breach`] - Breach ledger (append-only opponent scoring history)
//! - [`risk`] - Lane risk estimation and lane selection
//! - [`defense`] - Static and reactive defense planning
//! - [`offense`] - Turn-gated offense planning
//! - [`orchestrator`] - Turn pipeline and action-frame handling
//! - [`battlefield`] - Interface implemented by the game engine
//! - [`config`] - RON-loadable tuning
//!
//! [`Battlefield`]: battlefield::Battlefield
//! [`TurnOrchestrator`]: orchestrator::TurnOrchestrator
//! [`PlacementRequest`]: placement::PlacementRequest

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod battlefield;
pub mod breach;
pub mod config;
pub mod context;
pub mod coords;
pub mod defense;
pub mod error;
pub mod frame;
pub mod layout;
pub mod math;
pub mod offense;
pub mod orchestrator;
pub mod placement;
pub mod risk;
pub mod units;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::battlefield::{Battlefield, GameEngine};
    pub use crate::breach::{BreachLedger, BreachRecord};
    pub use crate::config::{AlgoConfig, OffenseConfig, StallPolicy};
    pub use crate::context::{Player, Resources, StationaryUnit, TurnContext};
    pub use crate::coords::{coords, Coordinate, Span, Zone};
    pub use crate::defense::DefensePlanner;
    pub use crate::error::{AlgoError, Result};
    pub use crate::frame::{ActionFrame, BreachEvent};
    pub use crate::layout::{DefenseLayout, LayoutStep};
    pub use crate::math::Fixed;
    pub use crate::offense::{Assessment, OffensePlanner, OffenseState};
    pub use crate::orchestrator::TurnOrchestrator;
    pub use crate::placement::{PlacementOrder, PlacementRequest, AS_MANY_AS_AFFORDABLE};
    pub use crate::risk::{PathRiskEstimator, RiskMode};
    pub use crate::units::{Currency, UnitCatalog, UnitCost, UnitKind, UnitStats, UpgradeStats};
}
