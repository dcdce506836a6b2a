//! Keyboard handling.
//!
//! Global bindings (quit, focus toggle) are resolved in the event loop;
//! everything else lands here and dispatches on [`Focus`].

use crossterm::event::{KeyCode, KeyEvent};

use super::{App, Focus};

impl App {
    /// Handle a key press that was not consumed by a global binding.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Map => self.handle_map_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Char(c) => self.input.insert_char(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete_char(),
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Home => self.input.move_cursor_home(),
            KeyCode::End => self.input.move_cursor_end(),
            KeyCode::Up => self.input.history_prev(),
            KeyCode::Down => self.input.history_next(),
            _ => return,
        }
        self.mark_dirty();
    }

    fn handle_map_key(&mut self, key: KeyEvent) {
        const PAN_STEP: f64 = 0.1;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.map.pan(-PAN_STEP, 0.0),
            KeyCode::Right | KeyCode::Char('l') => self.map.pan(PAN_STEP, 0.0),
            KeyCode::Up | KeyCode::Char('k') => self.map.pan(0.0, PAN_STEP),
            KeyCode::Down | KeyCode::Char('j') => self.map.pan(0.0, -PAN_STEP),
            KeyCode::Char('+') | KeyCode::Char('=') => self.map.zoom_in(),
            KeyCode::Char('-') => self.map.zoom_out(),
            _ => return,
        }
        self.mark_dirty();
    }

    /// Tab toggles which component owns the keyboard.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Map,
            Focus::Map => Focus::Input,
        };
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dataset::RegionDataset;
    use crossterm::event::KeyModifiers;
    use std::sync::Arc;

    fn app() -> App {
        let dataset = Arc::new(RegionDataset::bundled().unwrap().clone());
        App::new(dataset, Config::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typing_and_enter_submit_a_guess() {
        let mut app = app();
        for c in "goa".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input.content(), "goa");
        press(&mut app, KeyCode::Enter);
        assert!(app.input.is_empty());
        assert_eq!(app.engine.conquered()[0].name, "Goa");
    }

    #[test]
    fn focus_toggle_reroutes_keys() {
        let mut app = app();
        app.toggle_focus();
        assert_eq!(app.focus, Focus::Map);
        // Characters pan the map instead of entering the input buffer.
        press(&mut app, KeyCode::Char('h'));
        assert!(app.input.is_empty());
        app.toggle_focus();
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn history_keys_recall_previous_guess() {
        let mut app = app();
        for c in "kerala".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input.content(), "kerala");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.input.content(), "");
    }
}
