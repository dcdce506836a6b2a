//! Render smoke tests on a TestBackend: the full frame renders without
//! panicking at various sizes and the key surfaces show up.

mod common;

use common::{fixture_app, type_text};
use geoquest::config::Config;
use geoquest::ui;
use ratatui::{backend::TestBackend, Terminal};

/// Collect the rendered buffer into one string per row.
fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
    rows(terminal).iter().any(|row| row.contains(needle))
}

#[test]
fn full_frame_renders_at_standard_size() {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    let mut app = fixture_app();
    terminal.draw(|f| ui::render(f, &mut app)).unwrap();

    assert!(contains(&terminal, "GEOQUEST"));
    assert!(contains(&terminal, "Progress"));
    assert!(contains(&terminal, "Conquered"));
    assert!(contains(&terminal, "Guess"));
    // The input hint is visible on the very first frame, before any typing.
    assert!(contains(&terminal, "type a region name"));
    // No tile token in the default config: the degradation hint shows.
    assert!(contains(&terminal, "basemap off"));
}

#[test]
fn conquered_region_appears_in_side_list() {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    let mut app = fixture_app();

    type_text(&mut app, "karnataka");
    app.submit_input();

    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
    assert!(contains(&terminal, "Karnataka"));
    assert!(contains(&terminal, "Conquered Karnataka!"));
    assert!(contains(&terminal, "1 / 3"));
}

#[test]
fn narrow_terminal_drops_side_panel_without_panicking() {
    let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
    let mut app = fixture_app();
    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
    assert!(contains(&terminal, "GEOQUEST"));
    assert!(!contains(&terminal, "Progress"));
}

#[test]
fn tiny_terminal_renders_without_panicking() {
    let mut terminal = Terminal::new(TestBackend::new(10, 6)).unwrap();
    let mut app = fixture_app();
    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
}

#[test]
fn basemap_hint_absent_when_token_configured() {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    let config = Config {
        tile_token: Some("pk.test-token".to_string()),
        ..Config::default()
    };
    let mut app = geoquest::app::App::new(common::fixture_dataset(), config);
    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
    assert!(!contains(&terminal, "basemap off"));
}

#[test]
fn pending_input_is_rendered() {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    let mut app = fixture_app();
    type_text(&mut app, "ker");
    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
    assert!(contains(&terminal, "ker"));
}
