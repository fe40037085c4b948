//! Defense planning: the static layout plus reactive patches.

use crate::breach::BreachLedger;
use crate::config::DefenseConfig;
use crate::placement::PlacementRequest;
use crate::units::UnitKind;

/// Plans structure placements.
#[derive(Debug, Clone)]
pub struct DefensePlanner {
    config: DefenseConfig,
}

impl DefensePlanner {
    /// Create a planner from configuration.
    #[must_use]
    pub fn new(config: DefenseConfig) -> Self {
        Self { config }
    }

    /// The fixed layout, requested every turn.
    ///
    /// Re-requesting something already built or upgraded is a no-op on the
    /// engine side, so this needs no knowledge of the board.
    #[must_use]
    pub fn static_layout(&self) -> Vec<PlacementRequest> {
        self.config.layout.requests()
    }

    /// One turret per breach, one row inward from where it happened.
    ///
    /// Building above the breach keeps our own edge cells free for
    /// deployments. The whole history is replayed every turn, duplicates
    /// included, unless compaction is switched on.
    #[must_use]
    pub fn reactive_layout(&self, ledger: &BreachLedger) -> Vec<PlacementRequest> {
        let breaches = if self.config.compact_reactive {
            ledger.distinct_breaches()
        } else {
            ledger.all_breaches()
        };

        breaches
            .into_iter()
            .map(|b| PlacementRequest::spawn(UnitKind::Turret, vec![b.offset(0, 1)]))
            .collect()
    }
}

impl Default for DefensePlanner {
    fn default() -> Self {
        Self::new(DefenseConfig::default())
    }
}
