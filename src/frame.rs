use anyhow::ensure;
use gridwalk_dda::{Cell, Point};

/// Maps world coordinates onto the unbounded unit grid the traversal walks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFrame {
    /// World coordinates of the lower corner of cell (0, 0).
    origin: Point,
    /// World units per cell.
    resolution: f64,
}

impl GridFrame {
    pub fn new(origin: Point, resolution: f64) -> anyhow::Result<Self> {
        ensure!(origin.is_finite(), "grid origin must be finite, got {}", origin);
        ensure!(
            resolution.is_finite() && resolution > 0.0,
            "resolution must be positive and finite, got {}",
            resolution
        );
        Ok(Self { origin, resolution })
    }

    /// Converts a world point to continuous grid coordinates.
    pub fn world_to_grid(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.origin.x) / self.resolution,
            (p.y - self.origin.y) / self.resolution,
        )
    }

    /// World coordinates of the cell's lower corner.
    pub fn cell_corner(&self, cell: Cell) -> Point {
        Point::new(
            self.origin.x + f64::from(cell.x) * self.resolution,
            self.origin.y + f64::from(cell.y) * self.resolution,
        )
    }

    /// World coordinates of the cell's centre.
    pub fn cell_center(&self, cell: Cell) -> Point {
        let corner = self.cell_corner(cell);
        Point::new(corner.x + 0.5 * self.resolution, corner.y + 0.5 * self.resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_rejects_bad_resolution() {
        assert!(GridFrame::new(Point::new(0.0, 0.0), 0.0).is_err());
        assert!(GridFrame::new(Point::new(0.0, 0.0), -1.0).is_err());
        assert!(GridFrame::new(Point::new(0.0, 0.0), f64::NAN).is_err());
        assert!(GridFrame::new(Point::new(f64::INFINITY, 0.0), 1.0).is_err());
    }

    #[test]
    fn test_world_to_grid() {
        let frame = GridFrame::new(Point::new(-1.0, 2.0), 0.5).unwrap();
        let p = frame.world_to_grid(Point::new(0.25, 1.0));
        assert!((p.x - 2.5).abs() < EPSILON);
        assert!((p.y - -2.0).abs() < EPSILON);
        assert_eq!(p.cell(), Cell::new(2, -2));
    }

    #[test]
    fn test_cell_corner_and_center() {
        let frame = GridFrame::new(Point::new(-1.0, 2.0), 0.5).unwrap();
        let corner = frame.cell_corner(Cell::new(2, -2));
        assert!((corner.x - 0.0).abs() < EPSILON);
        assert!((corner.y - 1.0).abs() < EPSILON);
        let center = frame.cell_center(Cell::new(2, -2));
        assert!((center.x - 0.25).abs() < EPSILON);
        assert!((center.y - 1.25).abs() < EPSILON);
        assert_eq!(frame.world_to_grid(center).cell(), Cell::new(2, -2));
    }
}
