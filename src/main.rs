mod settings; // segment list, frame and budget settings
mod frame;  // world <-> grid coordinate mapping

use anyhow::Context;
use gridwalk_dda::{Cell, GridTraversal, TraversalError};
use tracing::{debug, info, warn};
use tracing_subscriber::{self, EnvFilter};

use settings::{Segment, Settings};
use frame::GridFrame;

/// Outcome of walking one configured segment.
#[derive(Debug, Clone, PartialEq)]
struct SegmentReport {
    start_cell: Cell,
    end_cell: Cell,
    cells: Vec<Cell>,
    complete: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| settings::DEFAULT_CONFIG_PATH.to_string());
    let settings = settings::load_settings(&path)?;
    let frame = GridFrame::new(settings.origin, settings.resolution)
        .context("invalid grid frame in configuration")?;

    if settings.segments.is_empty() {
        warn!("No segments configured, nothing to walk.");
    }

    for (i, segment) in settings.segments.iter().enumerate() {
        match walk_segment(&frame, &settings, segment) {
            Ok(report) => {
                if !report.complete {
                    warn!(
                        segment = i,
                        visited = report.cells.len(),
                        "Step budget exhausted before the end cell; output is partial."
                    );
                }
                println!(
                    "segment {}: {} -> {} [{} -> {}]: {}",
                    i,
                    segment.start,
                    segment.end,
                    report.start_cell,
                    report.end_cell,
                    format_cells(&report.cells)
                );
            }
            Err(e) => warn!(segment = i, error = %e, "Skipping segment."),
        }
    }

    info!("Done.");
    Ok(())
}

fn walk_segment(
    frame: &GridFrame,
    settings: &Settings,
    segment: &Segment,
) -> Result<SegmentReport, TraversalError> {
    let start = frame.world_to_grid(segment.start);
    let end = frame.world_to_grid(segment.end);
    info!(%start, %end, "Walking segment in grid space");

    let mut walk = GridTraversal::new(start, end)?;
    if settings.include_start {
        walk = walk.include_start();
    }
    if let Some(max_steps) = settings.max_steps {
        walk = walk.with_max_steps(max_steps);
    }

    let start_cell = walk.start_cell();
    let end_cell = walk.end_cell();
    let mut cells = Vec::new();
    for cell in walk.by_ref() {
        debug!(%cell, center = %frame.cell_center(cell), "Visited cell");
        cells.push(cell);
    }

    Ok(SegmentReport {
        start_cell,
        end_cell,
        cells,
        complete: walk.is_complete(),
    })
}

fn format_cells(cells: &[Cell]) -> String {
    if cells.is_empty() {
        return "(none)".to_string();
    }
    cells
        .iter()
        .map(Cell::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_dda::Point;

    fn segment(start: (f64, f64), end: (f64, f64)) -> Segment {
        Segment {
            start: Point::new(start.0, start.1),
            end: Point::new(end.0, end.1),
        }
    }

    #[test]
    fn test_walk_segment_scales_world_coordinates() {
        let frame = GridFrame::new(Point::new(0.0, 0.0), 0.5).unwrap();
        let report =
            walk_segment(&frame, &Settings::default(), &segment((0.05, 0.0), (1.95, 0.0))).unwrap();
        assert_eq!(report.start_cell, Cell::new(0, 0));
        assert_eq!(report.end_cell, Cell::new(3, 0));
        assert_eq!(report.cells, [Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0)]);
        assert!(report.complete);
    }

    #[test]
    fn test_walk_segment_honours_settings() {
        let frame = GridFrame::new(Point::new(0.0, 0.0), 1.0).unwrap();
        let settings = Settings {
            include_start: true,
            max_steps: Some(2),
            ..Settings::default()
        };
        let report = walk_segment(&frame, &settings, &segment((0.5, 0.5), (5.5, 0.5))).unwrap();
        assert_eq!(report.cells, [Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]);
        assert!(!report.complete);
    }

    #[test]
    fn test_walk_segment_rejects_non_finite() {
        let frame = GridFrame::new(Point::new(0.0, 0.0), 1.0).unwrap();
        let result = walk_segment(&frame, &Settings::default(), &segment((f64::NAN, 0.0), (1.0, 1.0)));
        assert!(matches!(result, Err(TraversalError::NonFiniteCoordinate(_))));
    }

    #[test]
    fn test_format_cells() {
        assert_eq!(format_cells(&[]), "(none)");
        assert_eq!(format_cells(&[Cell::new(1, 0), Cell::new(-1, 2)]), "(1, 0) (-1, 2)");
    }
}
