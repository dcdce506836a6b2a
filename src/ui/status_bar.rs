//! Bottom status bar: the current notice, keybind hints, and the
//! basemap-off reminder when no tile credential is configured.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, NoticeKind};
use crate::config::TILE_TOKEN_VAR;

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_SUCCESS, COLOR_WARN};

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Success => COLOR_SUCCESS,
            NoticeKind::Info => COLOR_ACCENT,
            NoticeKind::Warn => COLOR_WARN,
        };
        spans.push(Span::styled(notice.text.clone(), Style::default().fg(color)));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled(
        "Enter guess · Tab focus · click to check · ←↓↑→ pan · +/- zoom · Esc quit",
        Style::default().fg(COLOR_DIM),
    ));

    if !app.config.basemap_enabled() {
        spans.push(Span::styled(
            format!("  [basemap off: {TILE_TOKEN_VAR} not set]"),
            Style::default().fg(COLOR_DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
