//! Proptest strategies for planning inputs.

use algo_core::prelude::*;
use proptest::collection::{hash_map, vec};
use proptest::prelude::*;

use crate::fixtures::ScriptedField;

/// Board size in cells along each axis.
pub const BOARD_SIZE: i32 = 28;

/// Any cell on the board.
pub fn coordinate() -> impl Strategy<Value = Coordinate> {
    (0..BOARD_SIZE, 0..BOARD_SIZE).prop_map(|(x, y)| Coordinate::new(x, y))
}

/// A cell on the agent's bottom edge rows.
pub fn edge_cell() -> impl Strategy<Value = Coordinate> {
    (0..BOARD_SIZE, 0..2).prop_map(|(x, y)| Coordinate::new(x, y))
}

/// Between one and twelve candidate lanes (duplicates allowed).
pub fn lanes() -> impl Strategy<Value = Vec<Coordinate>> {
    vec(coordinate(), 1..=12)
}

/// A short breach history.
pub fn breach_history() -> impl Strategy<Value = Vec<Coordinate>> {
    vec(edge_cell(), 0..20)
}

/// A scripted field where every lane has a random path through cells with
/// random attacker counts.
pub fn scripted_field(
    lanes: Vec<Coordinate>,
) -> impl Strategy<Value = (ScriptedField, Vec<Coordinate>)> {
    let count = lanes.len();
    (
        vec(vec(coordinate(), 0..10), count),
        hash_map(coordinate(), 0usize..6, 0..40),
    )
        .prop_map(move |(paths, attackers)| {
            let mut field = ScriptedField::new(5);
            for (lane, path) in lanes.iter().zip(paths) {
                field.paths.insert(*lane, path);
            }
            field.attackers = attackers;
            (field, lanes.clone())
        })
}

/// Lanes together with a field scripted for them.
pub fn lanes_and_field() -> impl Strategy<Value = (ScriptedField, Vec<Coordinate>)> {
    lanes().prop_flat_map(scripted_field)
}
