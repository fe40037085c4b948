//! Grid coordinates and rectangular zones.

use serde::{Deserialize, Serialize};

/// A cell on the board, addressed by (column, row).
///
/// Serialized as a pair: `[x, y]` in the game's JSON wire format and
/// `(x, y)` in RON configuration.
///
/// # Example
///
/// ```
/// use algo_core::coords::Coordinate;
///
/// let breach = Coordinate::new(5, 0);
/// assert_eq!(breach.offset(0, 1), Coordinate::new(5, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Coordinate {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by a column/row delta, clamping at the `i32` bounds.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Squared Euclidean distance (avoids sqrt for range checks).
    #[must_use]
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }
}

impl From<[i32; 2]> for Coordinate {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for [i32; 2] {
    fn from(c: Coordinate) -> Self {
        [c.x, c.y]
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Build a coordinate list from `(x, y)` pairs.
#[must_use]
pub fn coords(pairs: &[(i32, i32)]) -> Vec<Coordinate> {
    pairs.iter().copied().map(Coordinate::from).collect()
}

/// Inclusive integer interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Lowest value included.
    pub min: i32,
    /// Highest value included.
    pub max: i32,
}

impl Span {
    /// Create a new inclusive span.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Check whether `value` lies within the span.
    #[must_use]
    pub const fn contains(self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A rectangular board region. An absent bound matches every column/row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Zone {
    /// Columns covered, or all columns when `None`.
    #[serde(default)]
    pub columns: Option<Span>,
    /// Rows covered, or all rows when `None`.
    #[serde(default)]
    pub rows: Option<Span>,
}

impl Zone {
    /// The whole board.
    pub const EVERYWHERE: Self = Self {
        columns: None,
        rows: None,
    };

    /// Zone bounded in both dimensions.
    #[must_use]
    pub const fn new(columns: Span, rows: Span) -> Self {
        Self {
            columns: Some(columns),
            rows: Some(rows),
        }
    }

    /// Full-width band of rows.
    #[must_use]
    pub const fn rows(min: i32, max: i32) -> Self {
        Self {
            columns: None,
            rows: Some(Span::new(min, max)),
        }
    }

    /// Check whether a location falls inside the zone.
    #[must_use]
    pub fn contains(&self, location: Coordinate) -> bool {
        self.columns.map_or(true, |s| s.contains(location.x))
            && self.rows.map_or(true, |s| s.contains(location.y))
    }
}
