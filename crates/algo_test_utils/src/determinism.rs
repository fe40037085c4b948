//! Replay harness for seeded planning.
//!
//! The orchestrator's only source of randomness is a seeded `ChaCha8Rng`,
//! so two orchestrators built from the same config, catalogue and seed must
//! emit byte-identical plans for the same sequence of snapshots. Plans are
//! compared by hash so a mismatch report stays short.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use algo_core::prelude::*;

use crate::fixtures::ScriptedField;

/// Result of replaying a match script several times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayResult {
    /// Whether every run produced the same plan hashes.
    pub is_deterministic: bool,
    /// Per-run hash of every turn's plan, in turn order.
    pub runs: Vec<Vec<u64>>,
}

impl ReplayResult {
    /// Assert that every run matched, with a readable report.
    ///
    /// # Panics
    ///
    /// Panics if any two runs diverged.
    pub fn assert_deterministic(&self) {
        if !self.is_deterministic {
            let first_divergence = self
                .runs
                .iter()
                .skip(1)
                .filter_map(|run| {
                    run.iter()
                        .zip(&self.runs[0])
                        .position(|(a, b)| a != b)
                })
                .min();
            panic!(
                "Planning is non-deterministic!\n\
                 Runs: {}\n\
                 First divergent turn: {:?}\n\
                 Hashes: {:?}",
                self.runs.len(),
                first_divergence,
                self.runs
            );
        }
    }
}

/// Hash one turn's plan.
#[must_use]
pub fn plan_hash(plan: &[PlacementRequest]) -> u64 {
    let mut hasher = DefaultHasher::new();
    plan.hash(&mut hasher);
    hasher.finish()
}

/// Drive a fresh orchestrator through `fields` `runs` times and compare.
///
/// Each field is one turn; breaches listed alongside it are recorded after
/// that turn is planned.
#[must_use]
pub fn replay(
    config: &AlgoConfig,
    catalog: &UnitCatalog,
    seed: u64,
    script: &[(ScriptedField, Vec<Coordinate>)],
    runs: usize,
) -> ReplayResult {
    let runs: Vec<Vec<u64>> = (0..runs)
        .map(|_| {
            let mut orchestrator = TurnOrchestrator::new(config.clone(), catalog, seed);
            script
                .iter()
                .map(|(field, breaches)| {
                    let mut field = field.clone();
                    let plan = orchestrator.on_turn(&mut field);
                    for &breach in breaches {
                        orchestrator.record_breach(breach);
                    }
                    plan_hash(&plan)
                })
                .collect()
        })
        .collect();

    let is_deterministic = runs.windows(2).all(|w| w[0] == w[1]);
    ReplayResult {
        is_deterministic,
        runs,
    }
}
