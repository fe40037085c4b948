//! Static defensive layout.
//!
//! A layout is an ordered list of steps. Order matters: a wall placed in an
//! early step blocks a later step that names the same cell, so the listing
//! below is also the priority order when structure points run short.

use serde::{Deserialize, Serialize};

use crate::coords::{coords, Coordinate};
use crate::placement::{PlacementOrder, PlacementRequest};
use crate::units::UnitKind;

/// One layout entry: spawn or upgrade `kind` at every location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStep {
    /// Spawn or upgrade.
    pub order: PlacementOrder,
    /// Structure kind.
    pub kind: UnitKind,
    /// Cells, attempted in order.
    pub locations: Vec<Coordinate>,
}

impl LayoutStep {
    fn spawn(kind: UnitKind, pairs: &[(i32, i32)]) -> Self {
        Self {
            order: PlacementOrder::Spawn,
            kind,
            locations: coords(pairs),
        }
    }

    fn upgrade(kind: UnitKind, pairs: &[(i32, i32)]) -> Self {
        Self {
            order: PlacementOrder::Upgrade,
            kind,
            locations: coords(pairs),
        }
    }

    /// The request this step emits.
    #[must_use]
    pub fn to_request(&self) -> PlacementRequest {
        match self.order {
            PlacementOrder::Spawn => PlacementRequest::spawn(self.kind, self.locations.clone()),
            PlacementOrder::Upgrade => PlacementRequest::upgrade(self.kind, self.locations.clone()),
        }
    }
}

/// The full static layout, re-requested every turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseLayout {
    /// Steps in emission order.
    pub steps: Vec<LayoutStep>,
}

const PRIMARY_TURRETS: &[(i32, i32)] = &[(3, 12), (24, 12), (25, 12), (2, 12)];

const FRONT_WALLS: &[(i32, i32)] = &[
    (2, 13),
    (3, 13),
    (4, 13),
    (23, 13),
    (24, 13),
    (25, 13),
    (4, 12),
    (23, 12),
    (13, 8),
    (14, 8),
];

const CORNER_WALLS: &[(i32, i32)] = &[(0, 13), (1, 13), (26, 13), (27, 13)];

const HARDENED_WALLS: &[(i32, i32)] = &[(3, 13), (4, 13), (23, 13), (24, 13)];

const SUPPORT_CLUSTER: &[(i32, i32)] = &[(12, 6), (13, 6), (14, 6), (15, 6), (13, 5)];

const SECONDARY_TURRETS: &[(i32, i32)] =
    &[(2, 12), (25, 12), (6, 10), (21, 10), (9, 8), (18, 8)];

// Funnel toward the support cluster.
const OUTER_RING: &[(i32, i32)] = &[
    (0, 13),
    (1, 13),
    (2, 13),
    (3, 13),
    (4, 13),
    (23, 13),
    (24, 13),
    (25, 13),
    (26, 13),
    (27, 13),
    (4, 12),
    (5, 12),
    (6, 12),
    (21, 12),
    (22, 12),
    (23, 12),
    (6, 11),
    (7, 11),
    (20, 11),
    (21, 11),
    (7, 10),
    (20, 10),
    (7, 9),
    (8, 9),
    (9, 9),
    (10, 9),
    (17, 9),
    (18, 9),
    (19, 9),
    (20, 9),
];

impl Default for DefenseLayout {
    fn default() -> Self {
        Self {
            steps: vec![
                LayoutStep::spawn(UnitKind::Turret, PRIMARY_TURRETS),
                LayoutStep::upgrade(UnitKind::Turret, PRIMARY_TURRETS),
                LayoutStep::spawn(UnitKind::Wall, FRONT_WALLS),
                LayoutStep::spawn(UnitKind::Support, &[(13, 6)]),
                LayoutStep::upgrade(UnitKind::Support, &[(13, 6)]),
                LayoutStep::spawn(UnitKind::Support, &[(14, 6)]),
                LayoutStep::upgrade(UnitKind::Support, &[(14, 6)]),
                LayoutStep::spawn(UnitKind::Wall, CORNER_WALLS),
                LayoutStep::spawn(UnitKind::Wall, HARDENED_WALLS),
                LayoutStep::upgrade(UnitKind::Wall, HARDENED_WALLS),
                LayoutStep::spawn(UnitKind::Wall, &[(12, 8), (15, 8)]),
                LayoutStep::spawn(UnitKind::Turret, &[(12, 7), (15, 7)]),
                LayoutStep::upgrade(UnitKind::Support, SUPPORT_CLUSTER),
                LayoutStep::spawn(UnitKind::Support, SUPPORT_CLUSTER),
                LayoutStep::spawn(UnitKind::Turret, SECONDARY_TURRETS),
                LayoutStep::upgrade(UnitKind::Turret, SECONDARY_TURRETS),
                LayoutStep::spawn(UnitKind::Wall, OUTER_RING),
                LayoutStep::upgrade(UnitKind::Wall, OUTER_RING),
            ],
        }
    }
}

impl DefenseLayout {
    /// Requests for every step, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<PlacementRequest> {
        self.steps.iter().map(LayoutStep::to_request).collect()
    }

    /// Every cell the layout spawns a structure on.
    #[must_use]
    pub fn spawn_cells(&self) -> Vec<Coordinate> {
        self.steps
            .iter()
            .filter(|s| s.order == PlacementOrder::Spawn)
            .flat_map(|s| s.locations.iter().copied())
            .collect()
    }
}
