//! UI rendering.
//!
//! Layout, top to bottom: header line, map canvas beside the side panel
//! (progress + conquered list), the guess input, and a status bar that
//! carries outcome notices.

mod input;
mod map_canvas;
mod panels;
mod status_bar;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use self::theme::{COLOR_ACCENT, COLOR_DIM};

/// Minimum width before the side panel is dropped entirely.
const MIN_WIDE_LAYOUT: u16 = 70;

pub fn render(frame: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(5),    // map + side panel
            Constraint::Length(3), // input
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_header(frame, rows[0], app);

    if rows[1].width >= MIN_WIDE_LAYOUT {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(34)])
            .split(rows[1]);
        map_canvas::render_map(frame, cols[0], app);
        panels::render_side_panel(frame, cols[1], app);
    } else {
        map_canvas::render_map(frame, rows[1], app);
    }

    input::render_input(frame, rows[2], app);
    status_bar::render_status_bar(frame, rows[3], app);
}

fn render_header(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let (conquered, total) = app.engine.progress();
    let header = Line::from(vec![
        Span::styled(
            " GEOQUEST ",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("— conquer the map, {conquered}/{total} regions taken"),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}
