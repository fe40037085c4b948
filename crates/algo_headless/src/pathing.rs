//! Grid pathing for mobile units.
//!
//! Units move orthogonally one cell at a time through cells free of
//! structures. The route is computed with breadth-first search so every
//! step strictly shortens the remaining distance, and ties between equally
//! short steps are broken by a fixed direction preference so the same
//! board always yields the same path.
//!
//! If the target edge cannot be reached at all, the unit heads for the
//! reachable cell closest to that edge and stops there.

use std::collections::VecDeque;

use algo_core::coords::Coordinate;

use crate::arena::{in_arena, Edge, ARENA_SIZE};

/// Orthogonal neighbour offsets (North, South, East, West).
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Row-major distance field over the grid. `None` marks unreached cells.
struct DistanceField {
    cells: Vec<Option<u32>>,
}

impl DistanceField {
    fn new() -> Self {
        let side = usize::try_from(ARENA_SIZE).unwrap_or(0);
        Self {
            cells: vec![None; side * side],
        }
    }

    fn index(cell: Coordinate) -> Option<usize> {
        if !(0..ARENA_SIZE).contains(&cell.x) || !(0..ARENA_SIZE).contains(&cell.y) {
            return None;
        }
        usize::try_from(cell.y * ARENA_SIZE + cell.x).ok()
    }

    fn get(&self, cell: Coordinate) -> Option<u32> {
        Self::index(cell).and_then(|i| self.cells[i])
    }

    fn set(&mut self, cell: Coordinate, distance: u32) {
        if let Some(i) = Self::index(cell) {
            self.cells[i] = Some(distance);
        }
    }

    /// Breadth-first flood from `sources` through walkable cells.
    fn flood<F>(sources: &[Coordinate], is_blocked: &F) -> Self
    where
        F: Fn(Coordinate) -> bool,
    {
        let mut field = Self::new();
        let mut queue = VecDeque::new();
        for &source in sources {
            if walkable(source, is_blocked) && field.get(source).is_none() {
                field.set(source, 0);
                queue.push_back(source);
            }
        }

        while let Some(current) = queue.pop_front() {
            let next = field.get(current).unwrap_or(0) + 1;
            for (dx, dy) in DIRECTIONS {
                let neighbor = current.offset(dx, dy);
                if walkable(neighbor, is_blocked) && field.get(neighbor).is_none() {
                    field.set(neighbor, next);
                    queue.push_back(neighbor);
                }
            }
        }
        field
    }
}

fn walkable<F>(cell: Coordinate, is_blocked: &F) -> bool
where
    F: Fn(Coordinate) -> bool,
{
    in_arena(cell) && !is_blocked(cell)
}

/// Step order preferred when heading for `target`: forward vertically,
/// then forward horizontally, then the backward moves.
fn step_preference(target: Edge) -> [(i32, i32); 4] {
    let (dx, dy) = target.direction();
    [(0, dy), (dx, 0), (-dx, 0), (0, -dy)]
}

/// Cells a unit entering at `origin` walks through on its way to `target`,
/// origin included.
///
/// Returns an empty path when the origin is outside the arena or blocked.
pub fn path_to_edge<F>(origin: Coordinate, target: Edge, is_blocked: F) -> Vec<Coordinate>
where
    F: Fn(Coordinate) -> bool,
{
    if !walkable(origin, &is_blocked) {
        return Vec::new();
    }

    let reachable = DistanceField::flood(&[origin], &is_blocked);
    let mut goals: Vec<Coordinate> = target
        .cells()
        .into_iter()
        .filter(|&c| reachable.get(c).is_some())
        .collect();

    if goals.is_empty() {
        // Stuck: settle for the reachable cell nearest the target edge.
        let fallback = (0..ARENA_SIZE)
            .flat_map(|y| (0..ARENA_SIZE).map(move |x| Coordinate::new(x, y)))
            .filter(|&c| reachable.get(c).is_some())
            .min_by_key(|&c| (target.distance(c), reachable.get(c), c));
        match fallback {
            Some(cell) => goals.push(cell),
            None => return vec![origin],
        }
        tracing::trace!(%origin, ?target, goal = %goals[0], "Target edge unreachable");
    }

    let to_goal = DistanceField::flood(&goals, &is_blocked);
    let preference = step_preference(target);
    let mut path = vec![origin];
    let mut current = origin;

    while let Some(remaining) = to_goal.get(current).filter(|&d| d > 0) {
        let step = preference
            .iter()
            .map(|&(dx, dy)| current.offset(dx, dy))
            .find(|&next| to_goal.get(next) == Some(remaining - 1));
        match step {
            Some(next) => {
                path.push(next);
                current = next;
            }
            None => break,
        }
    }
    path
}
