//! Per-turn pipeline.
//!
//! Every turn runs the same fixed sequence and submits the result once:
//!
//! 1. Static defense layout
//! 2. Reactive turrets for every remembered breach
//! 3. Offense (early game, or assess/bombard/swarm/support)
//!
//! Between turns the orchestrator listens to action frames and records
//! breaches in its ledger. The ledger is the only state that survives a
//! turn.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::battlefield::{Battlefield, GameEngine};
use crate::breach::BreachLedger;
use crate::config::AlgoConfig;
use crate::coords::Coordinate;
use crate::defense::DefensePlanner;
use crate::frame::ActionFrame;
use crate::offense::OffensePlanner;
use crate::placement::PlacementRequest;
use crate::units::UnitCatalog;

/// Owns the planners, the breach ledger and the seeded RNG.
#[derive(Debug, Clone)]
pub struct TurnOrchestrator {
    defense: DefensePlanner,
    offense: OffensePlanner,
    ledger: BreachLedger,
    rng: ChaCha8Rng,
    last_turn: u32,
}

impl TurnOrchestrator {
    /// Create an orchestrator for one match.
    #[must_use]
    pub fn new(config: AlgoConfig, catalog: &UnitCatalog, seed: u64) -> Self {
        Self {
            defense: DefensePlanner::new(config.defense),
            offense: OffensePlanner::new(config.offense, catalog),
            ledger: BreachLedger::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            last_turn: 0,
        }
    }

    /// Breaches recorded so far.
    #[must_use]
    pub fn ledger(&self) -> &BreachLedger {
        &self.ledger
    }

    /// Offense planner, for inspecting states.
    #[must_use]
    pub fn offense(&self) -> &OffensePlanner {
        &self.offense
    }

    /// Record a breach directly, stamped with the last planned turn.
    pub fn record_breach(&mut self, location: Coordinate) {
        self.ledger.record_breach(location, self.last_turn);
    }

    /// Feed one raw action frame.
    ///
    /// Hostile breaches are appended to the ledger. A frame that cannot be
    /// parsed is logged and dropped.
    pub fn on_action_frame(&mut self, raw: &str) {
        let frame = match ActionFrame::from_json(raw) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!("Skipping unreadable action frame: {}", e);
                return;
            }
        };

        let turn = frame.turn_number().unwrap_or(self.last_turn);
        for event in frame.hostile_breaches() {
            self.ledger.record_breach(event.location, turn);
        }
    }

    /// Build this turn's plan without submitting it.
    pub fn plan_turn<B>(&mut self, field: &B) -> Vec<PlacementRequest>
    where
        B: Battlefield + ?Sized,
    {
        let turn = field.context().turn_number;
        self.last_turn = turn;

        let mut plan = self.defense.static_layout();
        let static_count = plan.len();

        let reactive = self.defense.reactive_layout(&self.ledger);
        let reactive_count = reactive.len();
        plan.extend(reactive);

        let offense = self.offense.plan(field, &mut self.rng);
        let offense_count = offense.len();
        plan.extend(offense);

        tracing::info!(
            turn,
            static_requests = static_count,
            reactive_requests = reactive_count,
            offense_requests = offense_count,
            states = ?self.offense.states(field.context()),
            "Planned turn"
        );
        for request in &plan {
            tracing::debug!(
                order = ?request.order,
                kind = ?request.kind,
                cells = request.locations.len(),
                quantity = request.quantity,
                "Request"
            );
        }
        plan
    }

    /// Plan the turn and hand it to the engine in one submission.
    pub fn on_turn<E>(&mut self, engine: &mut E) -> Vec<PlacementRequest>
    where
        E: GameEngine + ?Sized,
    {
        let plan = self.plan_turn(&*engine);
        engine.submit_placements(&plan);
        plan
    }
}
