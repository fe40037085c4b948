//! Lane risk estimation.
//!
//! A lane is an edge cell where a mobile unit can be deployed. Its risk is
//! scored by walking the path the engine predicts for a unit entering there
//! and summing what the unit would meet on every cell.

use serde::{Deserialize, Serialize};

use crate::battlefield::Battlefield;
use crate::context::Player;
use crate::coords::Coordinate;
use crate::math::Fixed;

/// Scoring mode for a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskMode {
    /// Expected damage taken: attackers covering each path cell times the
    /// reference damage. Lane selection picks the lowest score.
    Minimize,
    /// Contested-cell tally: hostile structures standing on each path cell.
    /// Lane selection picks the highest score. This is a weaker signal than
    /// [`RiskMode::Minimize`] and deliberately ignores attack range.
    Maximize,
}

/// Scores lanes against the current battlefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRiskEstimator {
    reference_damage: Fixed,
}

impl PathRiskEstimator {
    /// Create an estimator weighting each attacker by `reference_damage`
    /// (the Turret's damage against mobile units).
    #[must_use]
    pub const fn new(reference_damage: Fixed) -> Self {
        Self { reference_damage }
    }

    /// Score a single lane. Zero when nothing hostile lies on the path.
    pub fn estimate_risk<B>(&self, field: &B, lane: Coordinate, mode: RiskMode) -> Fixed
    where
        B: Battlefield + ?Sized,
    {
        let path = field.path_to_edge(lane);
        let mut risk = Fixed::ZERO;

        match mode {
            RiskMode::Minimize => {
                for cell in &path {
                    let attackers = field.attackers_of(*cell, Player::Us);
                    risk = risk.saturating_add(
                        Fixed::saturating_from_num(attackers)
                            .saturating_mul(self.reference_damage),
                    );
                }
            }
            RiskMode::Maximize => {
                let context = field.context();
                for cell in &path {
                    let occupants = context.stationary_at(*cell, Player::Them);
                    risk = risk.saturating_add(Fixed::saturating_from_num(occupants));
                }
            }
        }

        tracing::trace!(%lane, ?mode, path_len = path.len(), %risk, "Scored lane");
        risk
    }

    /// Pick the lowest-risk (`Minimize`) or highest-risk (`Maximize`) lane.
    ///
    /// Comparison is strict, so ties keep the earliest candidate. Returns
    /// `None` only when `candidates` is empty.
    pub fn select_lane<B>(
        &self,
        field: &B,
        candidates: &[Coordinate],
        mode: RiskMode,
    ) -> Option<Coordinate>
    where
        B: Battlefield + ?Sized,
    {
        let mut best: Option<(Coordinate, Fixed)> = None;

        for &lane in candidates {
            let risk = self.estimate_risk(field, lane, mode);
            let better = match best {
                None => true,
                Some((_, best_risk)) => match mode {
                    RiskMode::Minimize => risk < best_risk,
                    RiskMode::Maximize => risk > best_risk,
                },
            };
            if better {
                best = Some((lane, risk));
            }
        }

        if let Some((lane, risk)) = best {
            tracing::debug!(%lane, %risk, ?mode, "Selected lane");
        }
        best.map(|(lane, _)| lane)
    }
}
