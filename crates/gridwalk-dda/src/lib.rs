#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for walking the unit grid cells crossed by a 2D line segment."]
#![doc = ""]
#![doc = "Given two points in continuous grid space (one unit per cell), the walk yields every"]
#![doc = "cell the segment enters after the start cell, in order, ending with the end cell."]
#![doc = "It is the incremental DDA of Amanatides & Woo's fast voxel traversal, with explicit"]
#![doc = "handling for zero-length and axis-aligned segments."]

use core::ops::ControlFlow;

pub mod error;
pub mod point_types;
pub mod traversal;

pub use error::TraversalError;
pub use point_types::{Cell, Point};
pub use traversal::{GridTraversal, Step, Steps};

/// Calls `visit` for every cell the segment from `start` to `end` enters
/// after the start cell.
///
/// # Returns
///
/// The number of cells visited. A zero-length segment, or one that stays
/// inside its start cell, visits nothing.
///
/// # Errors
///
/// Propagates the input validation errors of [`GridTraversal::new`].
pub fn traverse<F>(start: Point, end: Point, mut visit: F) -> Result<usize, TraversalError>
where
    F: FnMut(Cell),
{
    let mut visited = 0;
    for cell in GridTraversal::new(start, end)? {
        visit(cell);
        visited += 1;
    }
    Ok(visited)
}

/// Like [`traverse`], but `visit` may stop the walk by returning
/// [`ControlFlow::Break`].
///
/// # Returns
///
/// `ControlFlow::Break(b)` with the callback's value if it stopped the walk,
/// otherwise `ControlFlow::Continue(n)` with the number of cells visited.
///
/// # Errors
///
/// Propagates the input validation errors of [`GridTraversal::new`].
pub fn try_traverse<B, F>(
    start: Point,
    end: Point,
    mut visit: F,
) -> Result<ControlFlow<B, usize>, TraversalError>
where
    F: FnMut(Cell) -> ControlFlow<B>,
{
    let mut visited = 0;
    for cell in GridTraversal::new(start, end)? {
        visited += 1;
        if let ControlFlow::Break(b) = visit(cell) {
            return Ok(ControlFlow::Break(b));
        }
    }
    Ok(ControlFlow::Continue(visited))
}

/// Like [`traverse`], but visits at most `max_steps` cells.
///
/// # Errors
///
/// Returns `Err(TraversalError::IncompleteTraversal)` if the budget runs out
/// before the end cell is reached. Cells up to that point have already been
/// passed to `visit`. Also propagates the errors of [`GridTraversal::new`].
pub fn traverse_with_budget<F>(
    start: Point,
    end: Point,
    max_steps: usize,
    mut visit: F,
) -> Result<usize, TraversalError>
where
    F: FnMut(Cell),
{
    let mut walk = GridTraversal::new(start, end)?.with_max_steps(max_steps);
    for cell in walk.by_ref() {
        visit(cell);
    }

    let visited = walk.steps_taken();
    if walk.is_complete() {
        Ok(visited)
    } else {
        Err(TraversalError::IncompleteTraversal { visited })
    }
}
