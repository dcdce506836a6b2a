//! Color theme constants for the map and panels.

use ratatui::style::Color;

use crate::engine::Rgba;

/// Panel and block borders.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused component.
pub const COLOR_FOCUSED: Color = Color::Cyan;

/// Primary text.
pub const COLOR_ACCENT: Color = Color::White;

/// De-emphasized text (hints, timestamps, the basemap-off note).
pub const COLOR_DIM: Color = Color::DarkGray;

/// Input cursor block.
pub const COLOR_CURSOR: Color = Color::Magenta;

/// World-map backdrop, when the tile credential is present.
pub const COLOR_BASEMAP: Color = Color::Rgb(60, 60, 70);

/// Outline of regions not yet conquered.
pub const COLOR_UNGUESSED_OUTLINE: Color = Color::Gray;

/// Outline of the region under the mouse cursor.
pub const COLOR_HOVER: Color = Color::White;

/// Success notices (conquests).
pub const COLOR_SUCCESS: Color = Color::LightGreen;

/// Warning notices (failed guesses).
pub const COLOR_WARN: Color = Color::Yellow;

/// Progress gauge fill.
pub const COLOR_PROGRESS: Color = Color::LightGreen;

/// Translate the engine's RGBA fill into a terminal color. Zero alpha
/// means fully transparent: nothing is drawn at all.
pub fn fill_color(rgba: Rgba) -> Option<Color> {
    let [r, g, b, a] = rgba;
    (a > 0).then_some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{CONQUERED_FILL, UNGUESSED_FILL};

    #[test]
    fn transparent_fill_draws_nothing() {
        assert_eq!(fill_color(UNGUESSED_FILL), None);
        assert_eq!(fill_color(CONQUERED_FILL), Some(Color::Rgb(86, 144, 58)));
    }
}
