//! Right panel: conquest progress gauge and the conquered list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::App;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_PROGRESS};

pub fn render_side_panel(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_progress(frame, chunks[0], app);
    render_conquered_list(frame, chunks[1], app);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let (conquered, total) = app.engine.progress();
    let ratio = if total == 0 {
        0.0
    } else {
        conquered as f64 / total as f64
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(" Progress "),
        )
        .gauge_style(Style::default().fg(COLOR_PROGRESS))
        .label(format!("{conquered} / {total}"))
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

/// The conquered list, in guess order, newest visible when space runs out.
fn render_conquered_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Conquered ");
    let inner_height = block.inner(area).height as usize;

    let entries = app.engine.conquered();
    let skip = entries.len().saturating_sub(inner_height);

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, entry)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>3}. ", i + 1),
                    Style::default().fg(COLOR_DIM),
                ),
                Span::styled(
                    entry.name.clone(),
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", entry.conquered_at.format("%H:%M:%S")),
                    Style::default().fg(COLOR_DIM),
                ),
            ])
        })
        .collect();

    let paragraph = if lines.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "Type a region name to begin",
            Style::default().fg(COLOR_DIM),
        )))
        .block(block)
    } else {
        Paragraph::new(lines).block(block)
    };
    frame.render_widget(paragraph, area);
}
