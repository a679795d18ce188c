//! Point and cell types shared by the traversal and its callers.

use core::fmt;
use libm::floor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in continuous grid space, where one unit is one cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Point {
    /// The x-coordinate in cell units.
    pub x: f64,
    /// The y-coordinate in cell units.
    pub y: f64,
}

impl Point {
    /// Creates a new `Point`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if neither coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the cell containing this point.
    ///
    /// Coordinates are floored toward negative infinity, so `-0.3` lands in
    /// cell `-1`. Values outside the `i32` range saturate; use
    /// [`GridTraversal::new`](crate::GridTraversal::new) when that matters.
    pub fn cell(&self) -> Cell {
        Cell::new(floor(self.x) as i32, floor(self.y) as i32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// An integer grid cell covering `[x, x + 1) × [y, y + 1)`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// The column index.
    pub x: i32,
    /// The row index.
    pub y: i32,
}

impl Cell {
    /// Creates a new `Cell`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the cell shifted by `(dx, dy)`, or `None` on `i32` overflow.
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Returns `true` if `other` shares an edge with this cell.
    pub fn is_4_adjacent(&self, other: &Cell) -> bool {
        let dx = (i64::from(self.x) - i64::from(other.x)).abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).abs();
        dx + dy == 1
    }

    /// Manhattan distance to `other`, in cells.
    pub fn manhattan_distance(&self, other: &Cell) -> u64 {
        (i64::from(self.x) - i64::from(other.x)).unsigned_abs()
            + (i64::from(self.y) - i64::from(other.y)).unsigned_abs()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
