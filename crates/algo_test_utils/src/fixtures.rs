//! Test fixtures and helpers.
//!
//! A standard unit catalogue, snapshot builders and a scripted battlefield
//! for driving the planners without a real board.

use std::collections::HashMap;

use algo_core::prelude::*;
use fixed::types::I32F32;

/// Create a fixed-point number from an integer.
#[must_use]
pub fn fixed(n: i32) -> I32F32 {
    I32F32::from_num(n)
}

/// Create a fixed-point number from a float (for tests only).
#[must_use]
pub fn fixed_f(n: f64) -> I32F32 {
    I32F32::from_num(n)
}

fn unit(shorthand: &str, sp: f64, mp: f64, damage: f64, range: f64) -> UnitStats {
    UnitStats {
        shorthand: shorthand.to_string(),
        cost: UnitCost::new(fixed_f(sp), fixed_f(mp)),
        damage_to_mobile: fixed_f(damage),
        range: fixed_f(range),
        upgrade: None,
    }
}

/// Unit stats in the shape the live game ships.
///
/// | Kind        | Wire | SP | MP | vs mobile | Range |
/// |-------------|------|----|----|-----------|-------|
/// | Wall        | FF   | 1  | 0  | 0         | 0     |
/// | Support     | EF   | 4  | 0  | 0         | 3.5   |
/// | Turret      | DF   | 2  | 0  | 5         | 2.5   |
/// | Scout       | PI   | 0  | 1  | 2         | 3.5   |
/// | Demolisher  | EI   | 0  | 3  | 8         | 4.5   |
/// | Interceptor | SI   | 0  | 1  | 20        | 4.5   |
#[must_use]
pub fn standard_stats() -> Vec<UnitStats> {
    let mut turret = unit("DF", 2.0, 0.0, 5.0, 2.5);
    turret.upgrade = Some(UpgradeStats {
        cost: UnitCost::new(fixed(4), Fixed::ZERO),
        damage_to_mobile: fixed(15),
        range: fixed_f(3.5),
    });
    let demolisher = unit("EI", 0.0, 3.0, 8.0, 4.5);

    vec![
        unit("FF", 1.0, 0.0, 0.0, 0.0),
        unit("EF", 4.0, 0.0, 0.0, 3.5),
        turret,
        unit("PI", 0.0, 1.0, 2.0, 3.5),
        demolisher,
        unit("SI", 0.0, 1.0, 20.0, 4.5),
    ]
}

/// Catalogue built from [`standard_stats`].
///
/// # Panics
///
/// Never: the standard list is complete.
#[must_use]
pub fn standard_catalog() -> UnitCatalog {
    UnitCatalog::new(standard_stats(), "UP").expect("standard catalogue is complete")
}

/// Add `count` hostile walls along `row`, starting at column 0.
#[must_use]
pub fn with_hostile_row(context: TurnContext, row: i32, count: usize) -> TurnContext {
    (0..count).fold(context, |ctx, i| {
        ctx.with_unit(UnitKind::Wall, Coordinate::new(column(i), row), Player::Them)
    })
}

/// Add `count` hostile turrets filling `zone` row by row.
///
/// # Panics
///
/// Panics if the zone is unbounded or too small for `count` structures.
#[must_use]
pub fn with_hostile_block(context: TurnContext, zone: Zone, count: usize) -> TurnContext {
    let (Some(columns), Some(rows)) = (zone.columns, zone.rows) else {
        panic!("hostile block needs a bounded zone");
    };
    let cells: Vec<Coordinate> = (rows.min..=rows.max)
        .flat_map(|y| (columns.min..=columns.max).map(move |x| Coordinate::new(x, y)))
        .collect();
    assert!(cells.len() >= count, "zone holds only {} cells", cells.len());

    cells
        .into_iter()
        .take(count)
        .fold(context, |ctx, cell| {
            ctx.with_unit(UnitKind::Turret, cell, Player::Them)
        })
}

fn column(i: usize) -> i32 {
    i32::try_from(i).expect("column index fits in i32")
}

/// Battlefield with hand-written answers to every query.
///
/// Unscripted paths are the origin cell alone, unscripted attacker counts
/// are zero and unscripted affordability is zero.
#[derive(Debug, Clone, Default)]
pub struct ScriptedField {
    /// Snapshot returned by `context()`.
    pub context: TurnContext,
    /// Path per lane origin.
    pub paths: HashMap<Coordinate, Vec<Coordinate>>,
    /// Attackers covering each cell.
    pub attackers: HashMap<Coordinate, usize>,
    /// Affordable count per kind.
    pub affordable: HashMap<UnitKind, u32>,
    /// Friendly deployment edges.
    pub edges: Vec<Coordinate>,
    /// Every submission received, in order.
    pub submissions: Vec<Vec<PlacementRequest>>,
}

impl ScriptedField {
    /// Empty field for a turn.
    #[must_use]
    pub fn new(turn_number: u32) -> Self {
        Self {
            context: TurnContext::new(turn_number, Resources::default()),
            ..Self::default()
        }
    }

    /// Replace the snapshot.
    #[must_use]
    pub fn with_context(mut self, context: TurnContext) -> Self {
        self.context = context;
        self
    }

    /// Script the path for a lane.
    #[must_use]
    pub fn with_path(mut self, origin: Coordinate, path: &[(i32, i32)]) -> Self {
        self.paths.insert(origin, coords(path));
        self
    }

    /// Script the attacker count for a cell.
    #[must_use]
    pub fn with_attackers(mut self, cell: Coordinate, attackers: usize) -> Self {
        self.attackers.insert(cell, attackers);
        self
    }

    /// Script affordability for a kind.
    #[must_use]
    pub fn with_affordable(mut self, kind: UnitKind, count: u32) -> Self {
        self.affordable.insert(kind, count);
        self
    }

    /// Script the friendly edges.
    #[must_use]
    pub fn with_edges(mut self, edges: Vec<Coordinate>) -> Self {
        self.edges = edges;
        self
    }

    /// Most recent submission, if any.
    #[must_use]
    pub fn last_submission(&self) -> Option<&[PlacementRequest]> {
        self.submissions.last().map(Vec::as_slice)
    }
}

impl Battlefield for ScriptedField {
    fn context(&self) -> &TurnContext {
        &self.context
    }

    fn path_to_edge(&self, origin: Coordinate) -> Vec<Coordinate> {
        self.paths
            .get(&origin)
            .cloned()
            .unwrap_or_else(|| vec![origin])
    }

    fn attackers_of(&self, location: Coordinate, _target_owner: Player) -> usize {
        self.attackers.get(&location).copied().unwrap_or(0)
    }

    fn affordable_count(&self, kind: UnitKind) -> u32 {
        self.affordable.get(&kind).copied().unwrap_or(0)
    }

    fn friendly_edges(&self) -> Vec<Coordinate> {
        self.edges.clone()
    }
}

impl GameEngine for ScriptedField {
    fn submit_placements(&mut self, requests: &[PlacementRequest]) {
        tracing::debug!(count = requests.len(), "Scripted field received placements");
        self.submissions.push(requests.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = standard_catalog();
        assert_eq!(catalog.damage(UnitKind::Turret), fixed(5));
        assert_eq!(catalog.shorthand(UnitKind::Interceptor), "SI");
        assert_eq!(catalog.cheapest_stationary(Currency::Mobility), UnitKind::Wall);
    }

    #[test]
    fn test_hostile_builders() {
        let ctx = with_hostile_row(TurnContext::default(), 14, 12);
        assert_eq!(ctx.count_stationary(Player::Them, &Zone::rows(14, 15), None), 12);

        let rear = Zone::new(Span::new(17, 22), Span::new(16, 19));
        let ctx = with_hostile_block(TurnContext::default(), rear, 11);
        assert_eq!(ctx.count_stationary(Player::Them, &rear, None), 11);
    }

    #[test]
    fn test_scripted_defaults() {
        let field = ScriptedField::new(3);
        let origin = Coordinate::new(13, 0);
        assert_eq!(field.path_to_edge(origin), vec![origin]);
        assert_eq!(field.attackers_of(origin, Player::Us), 0);
        assert_eq!(field.affordable_count(UnitKind::Scout), 0);
        assert_eq!(field.context().turn_number, 3);
    }
}
