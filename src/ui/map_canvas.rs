//! The map canvas: regions drawn on a braille canvas, with an optional
//! world-map backdrop.
//!
//! Per-feature styling mirrors the dataset-layer contract: every region
//! asks the engine for its fill color on every draw. A zero-alpha fill
//! draws nothing; an opaque fill is emulated by sampling points inside
//! the polygon at roughly braille resolution. Outlines are always drawn
//! so unguessed regions stay visible, and the hovered region is outlined
//! bright (the auto-highlight).

use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Map as WorldMap, MapResolution, Points},
        Block, Borders,
    },
    Frame,
};

use crate::app::{App, Focus};
use crate::dataset::Geometry;

use super::theme::{
    fill_color, COLOR_BASEMAP, COLOR_BORDER, COLOR_FOCUSED, COLOR_HOVER, COLOR_UNGUESSED_OUTLINE,
};

pub fn render_map(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Map;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { COLOR_FOCUSED } else { COLOR_BORDER }))
        .title(if focused { " Map ◄ " } else { " Map " });
    let inner = block.inner(area);

    // The click/hover hit test resolves against exactly this rect.
    app.map.record_area(inner);

    let x_bounds = app.map.x_bounds();
    let y_bounds = app.map.y_bounds();
    let basemap = app.config.basemap_enabled();

    // Sample step for fill emulation: about one braille dot.
    let step = if inner.width > 0 {
        (x_bounds[1] - x_bounds[0]) / (f64::from(inner.width) * 2.0)
    } else {
        1.0
    };

    let engine = &app.engine;
    let map = &app.map;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            if basemap {
                ctx.draw(&WorldMap {
                    color: COLOR_BASEMAP,
                    resolution: MapResolution::High,
                });
                ctx.layer();
            }

            for region in engine.dataset().iter() {
                let fill = fill_color(engine.color_for(&region.name));
                if let Some(color) = fill {
                    draw_fill(ctx, &region.geometry, color, step, x_bounds, y_bounds);
                }
                let outline = if map.hovered() == Some(region.name.as_str()) {
                    COLOR_HOVER
                } else if let Some(color) = fill {
                    color
                } else {
                    COLOR_UNGUESSED_OUTLINE
                };
                draw_outline(ctx, &region.geometry, outline);
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_outline(ctx: &mut Context, geometry: &Geometry, color: ratatui::style::Color) {
    let draw_ring = |ctx: &mut Context, ring: &[[f64; 2]]| {
        for pair in ring.windows(2) {
            ctx.draw(&CanvasLine {
                x1: pair[0][0],
                y1: pair[0][1],
                x2: pair[1][0],
                y2: pair[1][1],
                color,
            });
        }
    };
    match geometry {
        Geometry::Polygon { coordinates } => {
            for ring in coordinates {
                draw_ring(ctx, ring);
            }
        }
        Geometry::MultiPolygon { coordinates } => {
            for poly in coordinates {
                for ring in poly {
                    draw_ring(ctx, ring);
                }
            }
        }
    }
}

/// Emulate a filled polygon by sampling its bounding box on a grid and
/// plotting the points that fall inside. `step` is in degrees. The grid
/// only covers the part of the bounding box inside the visible window.
fn draw_fill(
    ctx: &mut Context,
    geometry: &Geometry,
    color: ratatui::style::Color,
    step: f64,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
) {
    if step <= 0.0 {
        return;
    }
    let Some((min_lon, min_lat, max_lon, max_lat)) =
        clip_bbox(geometry.bounding_box(), x_bounds, y_bounds)
    else {
        return;
    };
    let mut coords = Vec::new();
    let mut lat = min_lat;
    while lat <= max_lat {
        let mut lon = min_lon;
        while lon <= max_lon {
            if geometry.contains(lon, lat) {
                coords.push((lon, lat));
            }
            lon += step;
        }
        // Cell rows cover twice the horizontal dot pitch.
        lat += step * 2.0;
    }
    ctx.draw(&Points {
        coords: &coords,
        color,
    });
}

/// Intersect a `(min_lon, min_lat, max_lon, max_lat)` bounding box with
/// the visible window, or `None` when they do not overlap.
fn clip_bbox(
    bbox: (f64, f64, f64, f64),
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
) -> Option<(f64, f64, f64, f64)> {
    let (min_lon, min_lat, max_lon, max_lat) = bbox;
    let min_lon = min_lon.max(x_bounds[0]);
    let max_lon = max_lon.min(x_bounds[1]);
    let min_lat = min_lat.max(y_bounds[0]);
    let max_lat = max_lat.min(y_bounds[1]);
    if min_lon > max_lon || min_lat > max_lat {
        return None;
    }
    Some((min_lon, min_lat, max_lon, max_lat))
}
