//! Arena geometry.
//!
//! The playable area is a diamond inscribed in a 28×28 grid. We hold the
//! bottom half (rows 0..14), the opponent the top half. Each half has two
//! diagonal edges; a mobile unit entering on one edge walks toward the
//! diagonally opposite edge.
//!
//! ```text
//!        TOP_LEFT  /\  TOP_RIGHT
//!                 /  \
//!                 \  /
//!    BOTTOM_LEFT   \/  BOTTOM_RIGHT
//! ```

use algo_core::coords::Coordinate;

/// Grid size along each axis.
pub const ARENA_SIZE: i32 = 28;

/// Half the grid size; rows below this belong to us.
pub const HALF_ARENA: i32 = ARENA_SIZE / 2;

/// Whether a cell lies inside the diamond.
#[must_use]
pub fn in_arena(cell: Coordinate) -> bool {
    let Coordinate { x, y } = cell;
    if !(0..ARENA_SIZE).contains(&y) {
        return false;
    }
    if y < HALF_ARENA {
        let half_width = y + 1;
        x >= HALF_ARENA - half_width && x < HALF_ARENA + half_width
    } else {
        let half_width = ARENA_SIZE - y;
        x >= HALF_ARENA - half_width && x < HALF_ARENA + half_width
    }
}

/// Whether a cell is on our half of the board.
#[must_use]
pub fn on_our_half(cell: Coordinate) -> bool {
    cell.y < HALF_ARENA
}

/// One of the four diagonal edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Opponent's left edge, from (13, 27) down to (0, 14).
    TopLeft,
    /// Opponent's right edge, from (14, 27) down to (27, 14).
    TopRight,
    /// Our left edge, from (13, 0) up to (0, 13).
    BottomLeft,
    /// Our right edge, from (14, 0) up to (27, 13).
    BottomRight,
}

impl Edge {
    /// All edges.
    pub const ALL: [Self; 4] = [Self::TopLeft, Self::TopRight, Self::BottomLeft, Self::BottomRight];

    /// Our two deployment edges.
    pub const FRIENDLY: [Self; 2] = [Self::BottomLeft, Self::BottomRight];

    /// Cells on this edge, from the middle of the board outward.
    #[must_use]
    pub fn cells(self) -> Vec<Coordinate> {
        (0..HALF_ARENA)
            .map(|i| match self {
                Self::TopLeft => Coordinate::new(HALF_ARENA - 1 - i, ARENA_SIZE - 1 - i),
                Self::TopRight => Coordinate::new(HALF_ARENA + i, ARENA_SIZE - 1 - i),
                Self::BottomLeft => Coordinate::new(HALF_ARENA - 1 - i, i),
                Self::BottomRight => Coordinate::new(HALF_ARENA + i, i),
            })
            .collect()
    }

    /// Whether `cell` lies on this edge.
    #[must_use]
    pub fn contains(self, cell: Coordinate) -> bool {
        in_arena(cell) && self.distance(cell) == 0
    }

    /// Edge a unit starting here walks toward.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }

    /// Diagonal step direction pointing at this edge.
    #[must_use]
    pub const fn direction(self) -> (i32, i32) {
        match self {
            Self::TopLeft => (-1, 1),
            Self::TopRight => (1, 1),
            Self::BottomLeft => (-1, -1),
            Self::BottomRight => (1, -1),
        }
    }

    /// Steps (orthogonal moves along the edge's normal) from an in-arena
    /// cell to this edge. Zero on the edge itself.
    #[must_use]
    pub const fn distance(self, cell: Coordinate) -> i32 {
        let Coordinate { x, y } = cell;
        match self {
            Self::TopLeft => (HALF_ARENA + x) - y,
            Self::TopRight => (ARENA_SIZE + HALF_ARENA - 1) - (x + y),
            Self::BottomLeft => (x + y) - (HALF_ARENA - 1),
            Self::BottomRight => HALF_ARENA - (x - y),
        }
    }

    /// Edge containing `cell`, if any. Corner cells report the first match.
    #[must_use]
    pub fn containing(cell: Coordinate) -> Option<Self> {
        Self::ALL.into_iter().find(|edge| edge.contains(cell))
    }

    /// Edge a unit entering at `origin` heads for.
    ///
    /// Cells on an edge head for the opposite one. Interior cells head for
    /// the far edge on the other side of the board from the half they
    /// start in.
    #[must_use]
    pub fn target_for(origin: Coordinate) -> Self {
        if let Some(edge) = Self::containing(origin) {
            return edge.opposite();
        }
        match (origin.x < HALF_ARENA, on_our_half(origin)) {
            (true, true) => Self::TopRight,
            (false, true) => Self::TopLeft,
            (true, false) => Self::BottomRight,
            (false, false) => Self::BottomLeft,
        }
    }
}

/// Cells of our two deployment edges.
#[must_use]
pub fn friendly_edge_cells() -> Vec<Coordinate> {
    Edge::FRIENDLY.into_iter().flat_map(Edge::cells).collect()
}
