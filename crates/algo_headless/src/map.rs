//! Board model backing the planners during a live match.
//!
//! A [`GameMap`] is rebuilt from every turn-start frame. It answers the
//! planners' queries against that snapshot and turns their placement
//! requests into wire orders, enforcing what the engine would reject:
//! cells outside the arena or on the wrong half, occupied cells,
//! unaffordable units and impossible upgrades are all skipped silently.

use algo_core::battlefield::{Battlefield, GameEngine};
use algo_core::context::{Player, Resources, StationaryUnit, TurnContext};
use algo_core::coords::Coordinate;
use algo_core::math::Fixed;
use algo_core::placement::{PlacementOrder, PlacementRequest};
use algo_core::units::{UnitCatalog, UnitCost, UnitKind};

use crate::arena::{friendly_edge_cells, in_arena, on_our_half, Edge};
use crate::pathing;
use crate::protocol::{TurnFrame, TurnSubmission};

/// Upper bound on mobile units stacked on one cell by a single request.
const MAX_STACK: u32 = 1000;

/// Unit table index listing upgraded structures.
const UPGRADED_INDEX: usize = 7;

/// Snapshot of one turn plus the orders issued against it.
#[derive(Debug, Clone)]
pub struct GameMap {
    catalog: UnitCatalog,
    context: TurnContext,
    submission: TurnSubmission,
}

impl GameMap {
    /// Wrap an existing snapshot.
    #[must_use]
    pub fn new(catalog: UnitCatalog, context: TurnContext) -> Self {
        Self {
            catalog,
            context,
            submission: TurnSubmission::default(),
        }
    }

    /// Build the snapshot from a turn-start frame.
    #[must_use]
    pub fn from_frame(frame: &TurnFrame, catalog: &UnitCatalog) -> Self {
        let mut context = TurnContext::new(frame.turn_number(), frame.resources());
        for owner in [Player::Us, Player::Them] {
            let upgraded = frame.unit_cells(owner, UPGRADED_INDEX);
            for kind in UnitKind::STATIONARY {
                for location in frame.unit_cells(owner, kind.index()) {
                    context.stationary.push(StationaryUnit {
                        kind,
                        location,
                        owner,
                        upgraded: upgraded.contains(&location),
                    });
                }
            }
        }
        Self::new(catalog.clone(), context)
    }

    /// Orders issued so far this turn.
    #[must_use]
    pub fn submission(&self) -> &TurnSubmission {
        &self.submission
    }

    /// Hand over the orders, leaving none behind.
    pub fn take_submission(&mut self) -> TurnSubmission {
        std::mem::take(&mut self.submission)
    }

    fn try_spend(&mut self, cost: UnitCost) -> bool {
        let resources = &mut self.context.resources;
        if resources.structure < cost.structure || resources.mobility < cost.mobility {
            return false;
        }
        resources.structure -= cost.structure;
        resources.mobility -= cost.mobility;
        true
    }

    fn spawn_structure(&mut self, kind: UnitKind, location: Coordinate) {
        if !in_arena(location) || !on_our_half(location) || self.context.is_blocked(location) {
            return;
        }
        if !self.try_spend(self.catalog.cost(kind)) {
            return;
        }
        self.context.stationary.push(StationaryUnit {
            kind,
            location,
            owner: Player::Us,
            upgraded: false,
        });
        let shorthand = self.catalog.shorthand(kind).to_string();
        self.submission.build.push((shorthand, location.x, location.y));
    }

    fn spawn_mobile(&mut self, kind: UnitKind, location: Coordinate, quantity: u32) {
        let on_edge = Edge::FRIENDLY.iter().any(|edge| edge.contains(location));
        if !on_edge || self.context.is_blocked(location) {
            return;
        }
        let cost = self.catalog.cost(kind);
        let shorthand = self.catalog.shorthand(kind).to_string();
        for _ in 0..quantity.min(MAX_STACK) {
            if !self.try_spend(cost) {
                break;
            }
            self.submission
                .deploy
                .push((shorthand.clone(), location.x, location.y));
        }
    }

    fn upgrade(&mut self, location: Coordinate) {
        let Some(index) = self
            .context
            .stationary
            .iter()
            .position(|u| u.owner == Player::Us && u.location == location && !u.upgraded)
        else {
            return;
        };
        let kind = self.context.stationary[index].kind;
        let Some(cost) = self.catalog.get(kind).upgrade.as_ref().map(|u| u.cost) else {
            return;
        };
        if !self.try_spend(cost) {
            return;
        }
        self.context.stationary[index].upgraded = true;
        let shorthand = self.catalog.upgrade_shorthand().to_string();
        self.submission.build.push((shorthand, location.x, location.y));
    }

    fn apply(&mut self, request: &PlacementRequest) {
        for &location in &request.locations {
            match request.order {
                PlacementOrder::Upgrade => self.upgrade(location),
                PlacementOrder::Spawn if request.kind.is_stationary() => {
                    self.spawn_structure(request.kind, location);
                }
                PlacementOrder::Spawn => self.spawn_mobile(request.kind, location, request.quantity),
            }
        }
    }

    /// Attack range and damage of a structure, upgrades included.
    fn weapon(&self, unit: &StationaryUnit) -> (Fixed, Fixed) {
        let stats = self.catalog.get(unit.kind);
        match (&stats.upgrade, unit.upgraded) {
            (Some(up), true) => (up.damage_to_mobile, up.range),
            _ => (stats.damage_to_mobile, stats.range),
        }
    }
}

impl Battlefield for GameMap {
    fn context(&self) -> &TurnContext {
        &self.context
    }

    fn path_to_edge(&self, origin: Coordinate) -> Vec<Coordinate> {
        pathing::path_to_edge(origin, Edge::target_for(origin), |c| {
            self.context.is_blocked(c)
        })
    }

    fn attackers_of(&self, location: Coordinate, target_owner: Player) -> usize {
        self.context
            .stationary
            .iter()
            .filter(|u| u.owner == target_owner.opponent())
            .filter(|u| {
                let (damage, range) = self.weapon(u);
                let distance_squared =
                    Fixed::saturating_from_num(u.location.distance_squared(location));
                damage > Fixed::ZERO && distance_squared <= range.saturating_mul(range)
            })
            .count()
    }

    fn affordable_count(&self, kind: UnitKind) -> u32 {
        let Resources {
            structure,
            mobility,
        } = self.context.resources;
        self.catalog.cost(kind).affordable(structure, mobility)
    }

    fn friendly_edges(&self) -> Vec<Coordinate> {
        friendly_edge_cells()
    }
}

impl GameEngine for GameMap {
    fn submit_placements(&mut self, requests: &[PlacementRequest]) {
        for request in requests {
            self.apply(request);
        }
        tracing::debug!(
            build = self.submission.build.len(),
            deploy = self.submission.deploy.len(),
            structure_left = %self.context.resources.structure,
            mobility_left = %self.context.resources.mobility,
            "Applied placements"
        );
    }
}
