//! Headless match adapter for the planning core.
//!
//! This crate connects [`algo_core`] to a live match engine that speaks
//! JSON lines on stdin/stdout:
//!
//! - **Protocol**: game configuration, turn frames and the two-line turn
//!   submission
//! - **Board model**: arena geometry, pathing and placement bookkeeping
//!   behind the core's `Battlefield` interface
//! - **Runner**: the read-plan-write loop for one match
//!
//! # Protocol
//!
//! - **stdin**: game configuration, then one frame per line
//! - **stdout**: build orders and deploy orders, one JSON line each per turn
//! - **stderr**: logs (human-readable)
//!
//! See [`protocol`] module for the message formats.
//!
//! # Example
//!
//! ```bash
//! # Play a match piped from the engine
//! engine | cargo run -p algo_headless -- --seed 7
//!
//! # Use a tuned policy
//! cargo run -p algo_headless -- --config policies/aggressive.ron
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod arena;
pub mod map;
pub mod pathing;
pub mod protocol;
pub mod runner;

pub use map::GameMap;
pub use protocol::{FrameKind, GameConfig, ProtocolError, TurnFrame, TurnSubmission};
pub use runner::{AlgoRunner, RunSummary};
