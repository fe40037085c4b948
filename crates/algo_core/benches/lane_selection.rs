//! Lane selection and full-turn planning benchmarks.
//!
//! Run with: `cargo bench -p algo_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use algo_core::config::DEFAULT_LANES;
use algo_core::prelude::*;
use algo_test_utils::fixtures::{fixed, standard_catalog, with_hostile_row, ScriptedField};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Field where every default lane walks a 28-cell diagonal with attackers
/// scattered along it.
fn busy_field(turn: u32) -> ScriptedField {
    let context = with_hostile_row(TurnContext::new(turn, Resources::default()), 14, 12);
    let mut field = ScriptedField::new(turn)
        .with_context(context)
        .with_affordable(UnitKind::Scout, 10);
    for lane in coords(DEFAULT_LANES) {
        let path: Vec<Coordinate> = (0..28).map(|i| lane.offset(i % 3, i)).collect();
        for (i, cell) in path.iter().enumerate() {
            if i % 4 == 0 {
                field.attackers.insert(*cell, i % 3);
            }
        }
        field.paths.insert(lane, path);
    }
    field
}

/// Scores and selects among the twelve default lanes.
pub fn lane_selection_benchmark(c: &mut Criterion) {
    let field = busy_field(5);
    let lanes = coords(DEFAULT_LANES);
    let estimator = PathRiskEstimator::new(fixed(5));

    c.bench_function("select_lane_minimize", |b| {
        b.iter(|| estimator.select_lane(black_box(&field), black_box(&lanes), RiskMode::Minimize));
    });
    c.bench_function("select_lane_maximize", |b| {
        b.iter(|| estimator.select_lane(black_box(&field), black_box(&lanes), RiskMode::Maximize));
    });
}

/// Plans a bombard turn with a long breach history.
pub fn plan_turn_benchmark(c: &mut Criterion) {
    let field = busy_field(5);
    let mut orchestrator = TurnOrchestrator::new(AlgoConfig::default(), &standard_catalog(), 3);
    for x in 0..200 {
        orchestrator.record_breach(Coordinate::new(x % 28, 0));
    }

    c.bench_function("plan_turn_bombard", |b| {
        b.iter(|| orchestrator.plan_turn(black_box(&field)));
    });
}

criterion_group!(benches, lane_selection_benchmark, plan_turn_benchmark);
criterion_main!(benches);
