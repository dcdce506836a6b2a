//! Guess input area.

use ratatui::{layout::Rect, Frame};

use crate::app::{App, Focus};

pub fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Input;
    let title = if focused { " Guess ◄ " } else { " Guess " };
    app.input.render(
        area,
        frame.buffer_mut(),
        title,
        "type a region name…",
        focused,
    );
}
