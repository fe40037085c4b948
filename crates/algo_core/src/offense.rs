//! Offense planning.
//!
//! The offense is a pure function of the turn number and the current
//! snapshot. Nothing is carried between turns: every turn starts over from
//! the top of the state list below.
//!
//! | State       | Entered when                                           |
//! |-------------|--------------------------------------------------------|
//! | `EarlyGame` | turn < `early_game_turns`                              |
//! | `Assess`    | every turn after the early game                        |
//! | `Bombard`   | front-zone hostiles > `front_threshold`                |
//! | `Swarm`     | rear-zone hostiles > `rear_threshold` on an odd turn   |
//! | `Support`   | every turn after the early game                        |

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battlefield::Battlefield;
use crate::config::{OffenseConfig, StallPolicy};
use crate::context::{Player, TurnContext};
use crate::coords::Coordinate;
use crate::placement::{PlacementRequest, AS_MANY_AS_AFFORDABLE};
use crate::risk::{PathRiskEstimator, RiskMode};
use crate::units::{Currency, UnitCatalog, UnitCost, UnitKind};

/// Upper bound on single-unit stall requests in one turn.
const MAX_RANDOM_STALL: u32 = 64;

/// Offense states visited during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OffenseState {
    /// Probe with scouts and stall with interceptors.
    EarlyGame,
    /// Count hostile structures in the watched zones.
    Assess,
    /// Long-range demolisher formation against a crowded front.
    Bombard,
    /// Full-budget scout rush.
    Swarm,
    /// Support structures behind the lines.
    Support,
}

/// Zone counts for a post-early-game turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    /// Hostile structures in the front zone.
    pub front_hostiles: usize,
    /// Hostile structures in the rear zone.
    pub rear_hostiles: usize,
    /// Front zone is crowded enough to bombard.
    pub bombard: bool,
    /// Rear zone is crowded and the turn is odd.
    pub swarm: bool,
}

/// Plans mobile-unit pushes and the support line.
#[derive(Debug, Clone)]
pub struct OffensePlanner {
    config: OffenseConfig,
    risk: PathRiskEstimator,
    formation_kind: UnitKind,
    scout_cost: UnitCost,
    interceptor_cost: UnitCost,
}

impl OffensePlanner {
    /// Create a planner. Damage weights and costs come from `catalog`.
    #[must_use]
    pub fn new(config: OffenseConfig, catalog: &UnitCatalog) -> Self {
        Self {
            config,
            risk: PathRiskEstimator::new(catalog.damage(UnitKind::Turret)),
            formation_kind: catalog.cheapest_stationary(Currency::Mobility),
            scout_cost: catalog.cost(UnitKind::Scout),
            interceptor_cost: catalog.cost(UnitKind::Interceptor),
        }
    }

    /// Whether `turn_number` is still in the early game.
    #[must_use]
    pub fn is_early_game(&self, turn_number: u32) -> bool {
        turn_number < self.config.early_game_turns
    }

    /// Count hostiles in the watched zones and decide the branches.
    #[must_use]
    pub fn assess(&self, context: &TurnContext) -> Assessment {
        let front_hostiles = context.count_stationary(Player::Them, &self.config.front_zone, None);
        let rear_hostiles = context.count_stationary(Player::Them, &self.config.rear_zone, None);
        Assessment {
            front_hostiles,
            rear_hostiles,
            bombard: front_hostiles > self.config.front_threshold,
            swarm: rear_hostiles > self.config.rear_threshold && context.turn_number % 2 == 1,
        }
    }

    /// States this turn passes through, in order.
    #[must_use]
    pub fn states(&self, context: &TurnContext) -> Vec<OffenseState> {
        if self.is_early_game(context.turn_number) {
            return vec![OffenseState::EarlyGame];
        }
        let assessment = self.assess(context);
        let mut states = vec![OffenseState::Assess];
        if assessment.bombard {
            states.push(OffenseState::Bombard);
        }
        if assessment.swarm {
            states.push(OffenseState::Swarm);
        }
        states.push(OffenseState::Support);
        states
    }

    /// Requests for this turn's offense.
    pub fn plan<B, R>(&self, field: &B, rng: &mut R) -> Vec<PlacementRequest>
    where
        B: Battlefield + ?Sized,
        R: Rng + ?Sized,
    {
        let context = field.context();
        if self.is_early_game(context.turn_number) {
            return self.early_game(field, rng);
        }

        let assessment = self.assess(context);
        tracing::debug!(
            turn = context.turn_number,
            front = assessment.front_hostiles,
            rear = assessment.rear_hostiles,
            bombard = assessment.bombard,
            swarm = assessment.swarm,
            "Assessed hostile structures"
        );

        let mut requests = Vec::new();
        if assessment.bombard {
            requests.extend(self.bombard(field));
        }
        if assessment.swarm {
            requests.extend(self.swarm(field));
        }
        requests.push(PlacementRequest::spawn(
            UnitKind::Support,
            self.config.support_sites.clone(),
        ));
        requests
    }

    fn early_game<B, R>(&self, field: &B, rng: &mut R) -> Vec<PlacementRequest>
    where
        B: Battlefield + ?Sized,
        R: Rng + ?Sized,
    {
        let mut requests = Vec::new();
        // Keep one scout's worth back.
        let scouts = field.affordable_count(UnitKind::Scout).saturating_sub(1);

        if let Some(lane) = self.safest_lane(field) {
            requests.push(PlacementRequest::spawn_many(UnitKind::Scout, lane, scouts));
        }

        match &self.config.stall {
            StallPolicy::Fixed(sites) => {
                requests.extend(
                    sites
                        .iter()
                        .map(|&site| PlacementRequest::spawn(UnitKind::Interceptor, vec![site])),
                );
            }
            StallPolicy::RandomEdges => {
                requests.extend(self.random_stall(field, scouts, rng));
            }
        }
        requests
    }

    fn random_stall<B, R>(&self, field: &B, planned_scouts: u32, rng: &mut R) -> Vec<PlacementRequest>
    where
        B: Battlefield + ?Sized,
        R: Rng + ?Sized,
    {
        let context = field.context();
        let deploy = context.unblocked(&field.friendly_edges());
        if deploy.is_empty() {
            return Vec::new();
        }

        let spent = self
            .scout_cost
            .mobility
            .saturating_mul_int(i64::from(planned_scouts));
        let mobility_left = context.resources.mobility.saturating_sub(spent);
        let budget = self
            .interceptor_cost
            .affordable(context.resources.structure, mobility_left)
            .min(MAX_RANDOM_STALL);

        (0..budget)
            .map(|_| {
                let site = deploy[rng.gen_range(0..deploy.len())];
                PlacementRequest::spawn(UnitKind::Interceptor, vec![site])
            })
            .collect()
    }

    fn bombard<B>(&self, field: &B) -> Vec<PlacementRequest>
    where
        B: Battlefield + ?Sized,
    {
        let columns = self.config.formation_columns;
        let line: Vec<Coordinate> = (columns.min..=columns.max)
            .rev()
            .map(|x| Coordinate::new(x, self.config.formation_row))
            .collect();
        let mut requests = vec![PlacementRequest::spawn(self.formation_kind, line)];

        // Sized by scout affordability, not demolisher affordability.
        let demolishers = field.affordable_count(UnitKind::Scout).saturating_sub(1);
        if let Some(lane) = self.safest_lane(field) {
            requests.push(PlacementRequest::spawn_many(
                UnitKind::Demolisher,
                lane,
                demolishers,
            ));
        }
        requests
    }

    fn swarm<B>(&self, field: &B) -> Vec<PlacementRequest>
    where
        B: Battlefield + ?Sized,
    {
        self.risk
            .select_lane(field, &self.config.lanes, self.config.swarm_lane)
            .map(|lane| {
                PlacementRequest::spawn_many(UnitKind::Scout, lane, AS_MANY_AS_AFFORDABLE)
            })
            .into_iter()
            .collect()
    }

    fn safest_lane<B>(&self, field: &B) -> Option<Coordinate>
    where
        B: Battlefield + ?Sized,
    {
        let lane = self
            .risk
            .select_lane(field, &self.config.lanes, RiskMode::Minimize);
        if lane.is_none() {
            tracing::warn!("No candidate lanes configured, skipping mobile deployment");
        }
        lane
    }
}
