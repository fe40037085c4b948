//! Interface the game engine implements for the planners.
//!
//! Everything here is a synchronous, total query against the snapshot the
//! engine fetched at the start of the turn: no call may block on IO and
//! none can fail. Empty paths, zero counts and zero affordability are all
//! ordinary answers.

use crate::context::{Player, TurnContext};
use crate::coords::Coordinate;
use crate::placement::PlacementRequest;
use crate::units::UnitKind;

/// Read-only board queries.
pub trait Battlefield {
    /// Snapshot for the current turn.
    fn context(&self) -> &TurnContext;

    /// Cells a mobile unit entering at `origin` would walk through, ending
    /// at the opposing edge (or wherever it gets stuck).
    fn path_to_edge(&self, origin: Coordinate) -> Vec<Coordinate>;

    /// Number of structures hostile to `target_owner` able to hit `location`.
    fn attackers_of(&self, location: Coordinate, target_owner: Player) -> usize;

    /// Whole units of `kind` the agent can currently afford.
    fn affordable_count(&self, kind: UnitKind) -> u32;

    /// Cells on the agent's own edges where mobile units may be deployed.
    fn friendly_edges(&self) -> Vec<Coordinate>;
}

/// A battlefield that also accepts the turn's placements.
pub trait GameEngine: Battlefield {
    /// Submit requests in emission order.
    ///
    /// Fire-and-forget from the planner's side: nothing is returned and
    /// partial fulfilment is not reported back.
    fn submit_placements(&mut self, requests: &[PlacementRequest]);
}
