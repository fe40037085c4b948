//! # Algo Test Utilities
//!
//! Shared testing utilities for the planning crates:
//! - Standard unit catalogue and snapshot fixtures
//! - A scripted battlefield with hand-written paths and attackers
//! - Replay harness for checking seeded plans are reproducible
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod determinism;
pub mod fixtures;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
