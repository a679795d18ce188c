use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use gridwalk_dda::Point;
use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// A segment to walk, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// World units per grid cell.
    pub resolution: f64,
    /// World coordinates of the lower corner of cell (0, 0).
    pub origin: Point,
    /// Optional cap on cells emitted per segment.
    pub max_steps: Option<usize>,
    /// Report the start cell as well.
    pub include_start: bool,
    pub segments: Vec<Segment>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: 1.0,
            origin: Point::new(0.0, 0.0),
            max_steps: None,
            include_start: false,
            segments: Vec::new(),
        }
    }
}

/// Loads settings from `path` (optional) layered under `GRIDWALK__*` environment overrides.
pub fn load_settings(path: &str) -> anyhow::Result<Settings> {
    info!("Attempting to load configuration from {}", path);

    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix("GRIDWALK").separator("__"))
        .build()
        .and_then(|c| c.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!(segments = settings.segments.len(), resolution = settings.resolution, "Successfully loaded configuration");
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e).with_context(|| format!("loading configuration from {}", path))
        }
    }
}
