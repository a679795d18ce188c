//! Incremental DDA walk over unit grid cells.
//!
//! The walk tracks, per axis, the parametric distance `t_max` (as a fraction
//! of the whole segment) at which the segment crosses the next cell boundary,
//! and the parametric distance `t_delta` one full cell consumes. Each step
//! advances whichever axis crosses first. Ties go to the y axis.

use core::iter::FusedIterator;
use libm::{fabs, floor};
use tracing::{debug, trace};

use crate::error::TraversalError;
use crate::point_types::{Cell, Point};

/// Per-axis stepping state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisWalk {
    /// `+1` or `-1`. Equal coordinates default to `+1`.
    step: i32,
    /// Parametric distance at which the next boundary on this axis is crossed.
    t_max: f64,
    /// Parametric distance consumed by one full cell on this axis.
    t_delta: f64,
}

impl AxisWalk {
    fn new(start: f64, end: f64, cell: i32) -> Self {
        let step = if end < start { -1 } else { 1 };
        let dist = fabs(end - start);

        // A flat axis never triggers a step.
        if dist == 0.0 {
            return Self {
                step,
                t_max: f64::INFINITY,
                t_delta: f64::INFINITY,
            };
        }

        let to_boundary = if step < 0 {
            start - f64::from(cell)
        } else {
            1.0 + f64::from(cell) - start
        };

        Self {
            step,
            t_max: to_boundary / dist,
            t_delta: 1.0 / dist,
        }
    }
}

/// One cell emitted by the walk together with where the segment enters it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// The cell that was entered.
    pub cell: Cell,
    /// Parametric distance along the segment (`0.0` at the start point,
    /// `1.0` at the end point) at which the segment enters `cell`.
    pub t: f64,
}

/// Lazy walk over the cells crossed by the segment from `start` to `end`.
///
/// By default the start cell is not yielded; every cell the segment enters
/// after it is, in order, up to and including the end cell. The walk is
/// finite and cannot be restarted.
///
/// An end point lying exactly on a cell boundary only touches the cell
/// beyond that boundary, so that cell is never entered: walking from
/// `(0.5, 0.5)` to `(3.0, 0.5)` yields `(1, 0), (2, 0)` even though
/// [`end_cell`](Self::end_cell) is `(3, 0)`. A start point on a boundary
/// still counts as inside its cell.
///
/// ```
/// use gridwalk_dda::{Cell, GridTraversal, Point};
///
/// let cells: Vec<Cell> = GridTraversal::new(Point::new(0.1, 0.0), Point::new(3.9, 0.0))
///     .unwrap()
///     .collect();
/// assert_eq!(cells, [Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0)]);
/// ```
#[derive(Debug)]
pub struct GridTraversal {
    start: Cell,
    end: Cell,
    cell: Cell,
    x: AxisWalk,
    y: AxisWalk,
    emit_start: bool,
    steps_taken: usize,
    max_steps: Option<usize>,
    /// Set when the walk stopped early (budget or index overflow).
    halted: bool,
}

impl GridTraversal {
    /// Sets up a walk from `start` to `end`, both in grid space.
    ///
    /// # Errors
    ///
    /// Returns `Err(TraversalError::NonFiniteCoordinate)` if any coordinate is NaN or infinite.
    /// Returns `Err(TraversalError::SpanOverflow)` if `end - start` overflows.
    /// Returns `Err(TraversalError::CellOutOfRange)` if an endpoint's cell does not fit in `i32`.
    pub fn new(start: Point, end: Point) -> Result<Self, TraversalError> {
        if !start.is_finite() {
            return Err(TraversalError::NonFiniteCoordinate("start point must be finite"));
        }
        if !end.is_finite() {
            return Err(TraversalError::NonFiniteCoordinate("end point must be finite"));
        }
        if !(end.x - start.x).is_finite() || !(end.y - start.y).is_finite() {
            return Err(TraversalError::SpanOverflow("endpoint difference exceeds f64 range"));
        }

        let start_cell = checked_cell(start)
            .ok_or(TraversalError::CellOutOfRange("start cell exceeds i32 range"))?;
        let end_cell = checked_cell(end)
            .ok_or(TraversalError::CellOutOfRange("end cell exceeds i32 range"))?;

        let x = AxisWalk::new(start.x, end.x, start_cell.x);
        let y = AxisWalk::new(start.y, end.y, start_cell.y);
        trace!(%start, %end, %start_cell, %end_cell, "grid traversal initialised");

        Ok(Self {
            start: start_cell,
            end: end_cell,
            cell: start_cell,
            x,
            y,
            emit_start: false,
            steps_taken: 0,
            max_steps: None,
            halted: false,
        })
    }

    /// Also yield the start cell, first, with `t = 0.0`.
    #[must_use]
    pub fn include_start(mut self) -> Self {
        self.emit_start = self.steps_taken == 0;
        self
    }

    /// Stop after `max_steps` cells beyond the start cell.
    ///
    /// Use [`is_complete`](Self::is_complete) afterwards to tell a finished
    /// walk from one that was cut short.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// The cell containing the start point.
    pub fn start_cell(&self) -> Cell {
        self.start
    }

    /// The cell containing the end point.
    pub fn end_cell(&self) -> Cell {
        self.end
    }

    /// The cell most recently entered (the start cell before the first step).
    pub fn current_cell(&self) -> Cell {
        self.cell
    }

    /// Number of cells entered beyond the start cell so far.
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Returns `true` once both axes have covered their full parametric span.
    pub fn is_complete(&self) -> bool {
        self.x.t_max >= 1.0 && self.y.t_max >= 1.0
    }

    /// Manhattan distance from the current cell to the end cell.
    ///
    /// For segments that do not end exactly on a cell boundary this is the
    /// number of cells left to emit.
    pub fn remaining_hint(&self) -> u64 {
        self.cell.manhattan_distance(&self.end)
    }

    /// Converts the walk into an iterator that also reports entry distances.
    pub fn steps(self) -> Steps {
        Steps { inner: self }
    }

    fn advance(&mut self) -> Option<Step> {
        if self.emit_start {
            self.emit_start = false;
            return Some(Step {
                cell: self.cell,
                t: 0.0,
            });
        }

        if self.halted || self.is_complete() {
            return None;
        }

        if self.max_steps.is_some_and(|max| self.steps_taken >= max) {
            debug!(
                steps = self.steps_taken,
                cell = %self.cell,
                end = %self.end,
                "step budget exhausted before reaching end cell"
            );
            self.halted = true;
            return None;
        }

        let (t, next) = if self.x.t_max < self.y.t_max {
            let t = self.x.t_max;
            self.x.t_max += self.x.t_delta;
            (t, self.cell.offset(self.x.step, 0))
        } else {
            let t = self.y.t_max;
            self.y.t_max += self.y.t_delta;
            (t, self.cell.offset(0, self.y.step))
        };

        let Some(next) = next else {
            debug!(cell = %self.cell, "cell index overflow, stopping traversal");
            self.halted = true;
            return None;
        };

        self.cell = next;
        self.steps_taken += 1;
        Some(Step { cell: next, t })
    }
}

impl Iterator for GridTraversal {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|step| step.cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(self.emit_start), None)
    }
}

impl FusedIterator for GridTraversal {}

/// Iterator over [`Step`]s, created by [`GridTraversal::steps`].
#[derive(Debug)]
pub struct Steps {
    inner: GridTraversal,
}

impl Steps {
    /// The underlying walk, e.g. to check [`GridTraversal::is_complete`].
    pub fn traversal(&self) -> &GridTraversal {
        &self.inner
    }
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for Steps {}

fn checked_cell(p: Point) -> Option<Cell> {
    let fx = floor(p.x);
    let fy = floor(p.y);
    let range = f64::from(i32::MIN)..=f64::from(i32::MAX);
    if range.contains(&fx) && range.contains(&fy) {
        Some(Cell::new(fx as i32, fy as i32))
    } else {
        None
    }
}
