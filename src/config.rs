//! Environment configuration.
//!
//! Two knobs, both optional:
//!
//! - `MAPBOX_ACCESS_TOKEN`: the map-tile credential. When present the
//!   canvas draws the world-map backdrop behind the regions; when absent
//!   the backdrop is skipped and the status bar shows a dim hint. The
//!   quiz itself never depends on it.
//! - `GEOQUEST_LOG`: a tracing filter (e.g. `info`, `geoquest=debug`).
//!   When set, logs are written to a file under the user data directory,
//!   since stdout belongs to the TUI.

use std::path::PathBuf;

/// The environment variable carrying the tile-access credential.
pub const TILE_TOKEN_VAR: &str = "MAPBOX_ACCESS_TOKEN";

/// The environment variable enabling and filtering file logging.
pub const LOG_FILTER_VAR: &str = "GEOQUEST_LOG";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Tile-access credential; gates the basemap backdrop only.
    pub tile_token: Option<String>,
    /// Tracing filter string, when file logging is requested.
    pub log_filter: Option<String>,
    /// Alternative dataset path from `--data <path>`.
    pub dataset_path: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the process environment and arguments.
    pub fn from_env<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut dataset_path = None;
        while let Some(arg) = args.next() {
            if arg == "--data" {
                dataset_path = args.next().map(PathBuf::from);
            }
        }
        Self {
            tile_token: non_empty_var(TILE_TOKEN_VAR),
            log_filter: non_empty_var(LOG_FILTER_VAR),
            dataset_path,
        }
    }

    /// Whether the basemap backdrop should be drawn.
    pub fn basemap_enabled(&self) -> bool {
        self.tile_token.is_some()
    }

    /// Where log output goes when `GEOQUEST_LOG` is set. Falls back to
    /// the working directory when no data directory can be determined.
    pub fn log_path(&self) -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("geoquest"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("geoquest.log")
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
