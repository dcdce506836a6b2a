//! Single-line guess input with cursor handling, horizontal scrolling,
//! and recall of previous guesses.
//!
//! The widget guarantees the submit post-condition the rest of the app
//! relies on: [`GuessInput::take`] drains the buffer and is the only way
//! a submission reads it, so the field is empty after every attempt
//! regardless of the guess outcome.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CURSOR, COLOR_DIM, COLOR_FOCUSED};

/// Maximum remembered guesses; old entries are dropped first.
const HISTORY_CAPACITY: usize = 64;

#[derive(Debug, Clone, Default)]
pub struct GuessInput {
    /// Characters of the current pending guess.
    chars: Vec<char>,
    /// Cursor position as a character index into `chars`.
    cursor: usize,
    /// Submitted guesses, oldest first.
    history: Vec<String>,
    /// Position while browsing history with Up/Down. `None` means the
    /// user is editing a fresh line.
    history_cursor: Option<usize>,
    /// The in-progress line stashed while browsing history.
    stash: Vec<char>,
}

impl GuessInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        // Typing leaves history-browsing mode but keeps the recalled text.
        self.history_cursor = None;
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
            self.history_cursor = None;
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
            self.history_cursor = None;
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.chars.len();
    }

    pub fn content(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Drain the pending guess, record it in history, and reset the
    /// cursor. The buffer is empty afterwards no matter what the
    /// engine later says about the text.
    pub fn take(&mut self) -> String {
        let text: String = self.chars.drain(..).collect();
        self.cursor = 0;
        self.history_cursor = None;
        if !text.trim().is_empty() {
            self.history.push(text.clone());
            if self.history.len() > HISTORY_CAPACITY {
                self.history.remove(0);
            }
        }
        text
    }

    /// Recall the previous guess (Up).
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next = match self.history_cursor {
            None => {
                self.stash = std::mem::take(&mut self.chars);
                self.history.len() - 1
            }
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.history_cursor = Some(next);
        self.chars = self.history[next].chars().collect();
        self.cursor = self.chars.len();
    }

    /// Move forward through history (Down); past the newest entry the
    /// stashed in-progress line comes back.
    pub fn history_next(&mut self) {
        match self.history_cursor {
            None => {}
            Some(i) if i + 1 < self.history.len() => {
                self.history_cursor = Some(i + 1);
                self.chars = self.history[i + 1].chars().collect();
                self.cursor = self.chars.len();
            }
            Some(_) => {
                self.history_cursor = None;
                self.chars = std::mem::take(&mut self.stash);
                self.cursor = self.chars.len();
            }
        }
    }

    /// Display width of the text before the cursor.
    fn width_before_cursor(&self) -> usize {
        self.chars[..self.cursor]
            .iter()
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    /// Render with a bordered block; `hint` is shown dim while empty.
    pub fn render(&self, area: Rect, buf: &mut Buffer, title: &str, hint: &str, focused: bool) {
        let border_color = if focused { COLOR_FOCUSED } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let visible = inner.width as usize;

        if self.chars.is_empty() {
            buf.set_stringn(inner.x, inner.y, hint, visible, Style::default().fg(COLOR_DIM));
            if focused {
                let under = hint.chars().next().unwrap_or(' ');
                buf.set_string(
                    inner.x,
                    inner.y,
                    under.to_string(),
                    Style::default().fg(COLOR_DIM).bg(COLOR_CURSOR),
                );
            }
            return;
        }

        // Scroll so the cursor stays visible, one cell reserved for it.
        let cursor_width = self.width_before_cursor();
        let scroll = cursor_width.saturating_sub(visible.saturating_sub(1));

        let mut x = 0usize;
        for (i, &c) in self.chars.iter().enumerate() {
            let w = c.width().unwrap_or(0);
            if x + w > scroll + visible {
                break;
            }
            if x >= scroll {
                let style = if focused && i == self.cursor {
                    Style::default().fg(COLOR_BORDER).bg(COLOR_CURSOR)
                } else {
                    Style::default().fg(COLOR_ACCENT)
                };
                buf.set_string(inner.x + (x - scroll) as u16, inner.y, c.to_string(), style);
            }
            x += w;
        }

        // Cursor at end of line sits on a blank cell.
        if focused && self.cursor == self.chars.len() {
            let cx = cursor_width.saturating_sub(scroll);
            if cx < visible {
                buf.set_string(
                    inner.x + cx as u16,
                    inner.y,
                    " ",
                    Style::default().bg(COLOR_CURSOR),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> GuessInput {
        let mut input = GuessInput::new();
        for c in text.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn take_drains_and_resets() {
        let mut input = typed("Karnataka");
        assert_eq!(input.take(), "Karnataka");
        assert!(input.is_empty());
        assert_eq!(input.content(), "");

        // And again for a non-matching guess; the drain is unconditional.
        let mut input = typed("Atlantis");
        assert_eq!(input.take(), "Atlantis");
        assert!(input.is_empty());
    }

    #[test]
    fn blank_submissions_are_not_recorded_in_history() {
        let mut input = typed("   ");
        input.take();
        input.history_prev();
        assert_eq!(input.content(), "");
    }

    #[test]
    fn editing_at_cursor() {
        let mut input = typed("Kerla");
        input.move_cursor_left();
        input.move_cursor_left();
        input.insert_char('a');
        assert_eq!(input.content(), "Kerala");

        input.move_cursor_home();
        input.delete_char();
        assert_eq!(input.content(), "erala");
        input.move_cursor_end();
        input.backspace();
        assert_eq!(input.content(), "eral");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut input = typed("Go");
        input.move_cursor_home();
        input.move_cursor_left();
        input.move_cursor_end();
        input.move_cursor_right();
        input.insert_char('a');
        assert_eq!(input.content(), "Goa");
    }

    #[test]
    fn history_recall_round_trip() {
        let mut input = typed("Kerala");
        input.take();
        for c in "Goa".chars() {
            input.insert_char(c);
        }
        input.take();

        for c in "Sik".chars() {
            input.insert_char(c);
        }
        input.history_prev();
        assert_eq!(input.content(), "Goa");
        input.history_prev();
        assert_eq!(input.content(), "Kerala");
        // Bounded at the oldest entry.
        input.history_prev();
        assert_eq!(input.content(), "Kerala");

        input.history_next();
        assert_eq!(input.content(), "Goa");
        // Past the newest entry the in-progress line returns.
        input.history_next();
        assert_eq!(input.content(), "Sik");
    }

    #[test]
    fn hint_is_visible_while_focused_and_empty() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));
        let input = GuessInput::new();
        input.render(Rect::new(0, 0, 20, 3), &mut buf, "Guess", "type a name", true);
        // The hint shows through, with the cursor parked on its first cell.
        assert_eq!(buf[(1, 1)].symbol(), "t");
        assert_eq!(buf[(2, 1)].symbol(), "y");
        assert_eq!(buf[(1, 1)].bg, COLOR_CURSOR);
    }

    #[test]
    fn typed_text_replaces_the_hint() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));
        let input = typed("Goa");
        input.render(Rect::new(0, 0, 20, 3), &mut buf, "Guess", "type a name", true);
        assert_eq!(buf[(1, 1)].symbol(), "G");
        assert_eq!(buf[(2, 1)].symbol(), "o");
        assert_eq!(buf[(3, 1)].symbol(), "a");
    }

    #[test]
    fn render_fits_small_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 3));
        let input = typed("a very long guess that scrolls");
        input.render(Rect::new(0, 0, 12, 3), &mut buf, "Guess", "", true);
        // No panic and the border is drawn.
        assert_ne!(buf[(0, 0)].symbol(), " ");
    }
}
