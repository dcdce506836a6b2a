//! The map view: geographic viewport, screen↔geo projection, and click
//! hit-testing.
//!
//! This is the rendering collaborator of the guess engine. It owns
//! everything geometric: where the camera points, which canvas cell maps
//! to which longitude/latitude, and which region a mouse click landed on.
//! The engine owns everything about guess state. The engine never
//! sees coordinates and the map never mutates the conquered set.
//!
//! Hit areas work the way the rest of the UI handles clicks: the renderer
//! records the canvas rect it drew into, and the event loop asks the view
//! to resolve a terminal cell against that rect.

use std::sync::Arc;

use ratatui::layout::Rect;

use crate::dataset::RegionDataset;

/// Initial camera, centered on the dataset's home country.
pub const DEFAULT_CENTER: (f64, f64) = (77.570839, 12.977439);

/// Initial horizontal span in degrees of longitude.
pub const DEFAULT_SPAN: f64 = 44.0;

const MIN_SPAN: f64 = 2.0;
const MAX_SPAN: f64 = 120.0;
const ZOOM_STEP: f64 = 1.25;

/// A terminal cell is roughly twice as tall as it is wide; scaling the
/// latitude span by this keeps the map's aspect close to square.
const CELL_ASPECT: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct MapView {
    dataset: Arc<RegionDataset>,
    /// Camera center as `(lon, lat)`.
    center: (f64, f64),
    /// Visible longitude span in degrees.
    span: f64,
    /// Inner rect of the canvas from the last render; clicks outside it
    /// are not map clicks.
    last_area: Option<Rect>,
    /// Region under the mouse cursor, for the hover outline.
    hovered: Option<String>,
}

impl MapView {
    pub fn new(dataset: Arc<RegionDataset>) -> Self {
        Self {
            dataset,
            center: DEFAULT_CENTER,
            span: DEFAULT_SPAN,
            last_area: None,
            hovered: None,
        }
    }

    /// Longitude bounds of the visible window.
    pub fn x_bounds(&self) -> [f64; 2] {
        [self.center.0 - self.span / 2.0, self.center.0 + self.span / 2.0]
    }

    /// Latitude bounds, derived from the longitude span, the rendered
    /// rect's aspect ratio, and the terminal cell aspect.
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.span / 2.0 * self.vertical_ratio();
        [self.center.1 - half, self.center.1 + half]
    }

    fn vertical_ratio(&self) -> f64 {
        match self.last_area {
            Some(area) if area.width > 0 => {
                f64::from(area.height) * CELL_ASPECT / f64::from(area.width)
            }
            _ => 0.5,
        }
    }

    /// Pan by a fraction of the visible span.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.center.0 += dx * self.span;
        self.center.1 += dy * self.span * self.vertical_ratio();
        self.center.0 = self.center.0.clamp(-180.0, 180.0);
        self.center.1 = self.center.1.clamp(-85.0, 85.0);
    }

    pub fn zoom_in(&mut self) {
        self.span = (self.span / ZOOM_STEP).max(MIN_SPAN);
    }

    pub fn zoom_out(&mut self) {
        self.span = (self.span * ZOOM_STEP).min(MAX_SPAN);
    }

    /// Remember the inner canvas rect just rendered. Called from the
    /// renderer each frame so click resolution matches what is on screen.
    pub fn record_area(&mut self, area: Rect) {
        self.last_area = Some(area);
    }

    /// Convert a terminal cell to `(lon, lat)`, or `None` when the cell
    /// lies outside the last rendered canvas.
    pub fn screen_to_geo(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let area = self.last_area?;
        if !area.contains(ratatui::layout::Position::new(column, row)) {
            return None;
        }
        let [min_lon, max_lon] = self.x_bounds();
        let [min_lat, max_lat] = self.y_bounds();

        // Sample the cell center; canvas rows grow downward while
        // latitude grows upward.
        let fx = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
        let fy = (f64::from(row - area.y) + 0.5) / f64::from(area.height);
        let lon = min_lon + fx * (max_lon - min_lon);
        let lat = max_lat - fy * (max_lat - min_lat);
        Some((lon, lat))
    }

    /// Resolve a click to the first region containing the point, dataset
    /// order. Returns `None` for clicks outside the canvas or on open
    /// water.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<&str> {
        let (lon, lat) = self.screen_to_geo(column, row)?;
        self.dataset.region_at(lon, lat).map(|region| region.name.as_str())
    }

    /// Track the region under the cursor. Returns true when the hovered
    /// region changed, so the caller can request a redraw.
    pub fn update_hover(&mut self, column: u16, row: u16) -> bool {
        let hit = self
            .screen_to_geo(column, row)
            .and_then(|(lon, lat)| self.dataset.region_at(lon, lat))
            .map(|region| region.name.clone());
        if hit != self.hovered {
            self.hovered = hit;
            true
        } else {
            false
        }
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn dataset(&self) -> &RegionDataset {
        &self.dataset
    }
}
