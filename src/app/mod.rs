//! Application state and logic for the TUI.
//!
//! [`App`] composes the region dataset, the guess engine, the map view,
//! and the input widget, and exposes the handful of mutations the event
//! loop calls. All state changes happen synchronously inside one event
//! dispatch; rendering reads the state immediately afterwards, so no
//! locking is involved anywhere.

mod handlers;
mod types;

pub use types::{Focus, Notice, NoticeKind};

use std::sync::Arc;

use crate::config::Config;
use crate::dataset::RegionDataset;
use crate::engine::GuessEngine;
use crate::map::MapView;
use crate::widgets::GuessInput;

/// Ticks (16 ms each) before a status notice fades.
const NOTICE_TTL_TICKS: u64 = 300;

pub struct App {
    pub engine: GuessEngine,
    pub map: MapView,
    pub input: GuessInput,
    pub focus: Focus,
    pub notice: Option<Notice>,
    pub config: Config,
    /// Redraw only when something changed.
    pub needs_redraw: bool,
    pub should_quit: bool,
    /// Monotonic 16 ms tick counter, drives notice expiry.
    pub tick_count: u64,
}

impl App {
    pub fn new(dataset: Arc<RegionDataset>, config: Config) -> Self {
        Self {
            engine: GuessEngine::new(dataset.clone()),
            map: MapView::new(dataset),
            input: GuessInput::new(),
            focus: Focus::default(),
            notice: None,
            config,
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// One 16 ms tick. Expires stale notices.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        let expired = self
            .notice
            .as_ref()
            .is_some_and(|notice| self.tick_count.saturating_sub(notice.born_at_tick) > NOTICE_TTL_TICKS);
        if expired {
            self.notice = None;
            self.mark_dirty();
        }
    }

    /// Submit the pending input as a guess.
    ///
    /// The input buffer is drained before the engine sees the text, so it
    /// is empty after every submission attempt regardless of outcome.
    pub fn submit_input(&mut self) {
        let raw = self.input.take();
        let outcome = self.engine.submit_guess(&raw);
        self.notice = Some(Notice::from_guess(&outcome, self.tick_count));
        self.mark_dirty();
    }

    /// Resolve a left click on the map and report the region's status.
    /// Read-only with respect to the conquered set: clicking checks
    /// progress, only typing conquers.
    pub fn handle_map_click(&mut self, column: u16, row: u16) {
        let hit = self.map.hit_test(column, row).map(str::to_string);
        let outcome = self.engine.query_region(hit.as_deref());
        tracing::debug!(?outcome, column, row, "map click");
        self.notice = Some(Notice::from_hit(&outcome, self.tick_count));
        self.mark_dirty();
    }

    /// Track the hovered region for the auto-highlight outline.
    pub fn handle_mouse_move(&mut self, column: u16, row: u16) {
        if self.map.update_hover(column, row) {
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn app() -> App {
        let dataset = Arc::new(RegionDataset::bundled().unwrap().clone());
        App::new(dataset, Config::default())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.input.insert_char(c);
        }
    }

    #[test]
    fn submit_clears_input_on_every_outcome() {
        let mut app = app();

        type_text(&mut app, "  karnataka ");
        app.submit_input();
        assert!(app.input.is_empty());
        assert_eq!(app.engine.conquered().len(), 1);

        type_text(&mut app, "Karnataka");
        app.submit_input();
        assert!(app.input.is_empty());
        assert_eq!(app.engine.conquered().len(), 1);

        type_text(&mut app, "Atlantis");
        app.submit_input();
        assert!(app.input.is_empty());
        assert_eq!(app.engine.conquered().len(), 1);
    }

    #[test]
    fn submit_sets_outcome_notice() {
        let mut app = app();
        type_text(&mut app, "Kerala");
        app.submit_input();
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(notice.text.contains("Kerala"));
    }

    #[test]
    fn map_click_never_conquers() {
        let mut app = app();
        app.map.record_area(Rect::new(0, 0, 80, 40));
        // Click every cell of the canvas; the conquered set must stay empty.
        for col in 0..80 {
            app.handle_map_click(col, 20);
        }
        assert!(app.engine.conquered().is_empty());
        assert!(app.notice.is_some());
    }

    #[test]
    fn notices_expire_after_ttl() {
        let mut app = app();
        type_text(&mut app, "Goa");
        app.submit_input();
        assert!(app.notice.is_some());

        for _ in 0..NOTICE_TTL_TICKS {
            app.tick();
        }
        assert!(app.notice.is_some(), "not expired at exactly the TTL");
        app.tick();
        assert!(app.notice.is_none());
    }

    #[test]
    fn dirty_flag_set_by_mutations() {
        let mut app = app();
        app.needs_redraw = false;
        type_text(&mut app, "Punjab");
        app.submit_input();
        assert!(app.needs_redraw);
    }

    #[test]
    fn guessing_marks_engine_state() {
        let mut app = app();
        type_text(&mut app, "sikkim");
        app.submit_input();
        assert!(matches!(
            app.engine.query_region(Some("Sikkim")),
            crate::engine::HitOutcome::Conquered(_)
        ));
        type_text(&mut app, "sikkim");
        app.submit_input();
        assert_eq!(app.engine.conquered().len(), 1);
    }
}
