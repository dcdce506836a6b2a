use std::io;
use std::sync::Arc;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use geoquest::app::App;
use geoquest::config::Config;
use geoquest::dataset::RegionDataset;
use geoquest::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("geoquest {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    let config = Config::from_env(std::env::args().skip(1));
    let _log_guard = init_logging(&config)?;

    // Load the dataset before touching the terminal so a bad file is
    // reported as a normal error message, not painted over the TUI.
    let dataset = match &config.dataset_path {
        Some(path) => Arc::new(RegionDataset::from_file(path)?),
        None => Arc::new(
            RegionDataset::bundled()
                .map_err(|err| eyre!("bundled dataset is invalid: {err}"))?
                .clone(),
        ),
    };
    tracing::info!(regions = dataset.len(), "dataset loaded");

    setup_panic_hook();

    // Terminal setup. Mouse capture feeds the click hit test and the
    // hover highlight.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(dataset, config);

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;
    result
}

/// File logging, enabled by `GEOQUEST_LOG`. Stdout belongs to the TUI.
fn init_logging(config: &Config) -> Result<Option<Arc<std::fs::File>>> {
    let Some(filter) = &config.log_filter else {
        return Ok(None);
    };
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = Arc::new(std::fs::File::create(&path)?);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(file.clone())
        .with_ansi(false)
        .init();
    tracing::info!(path = %path.display(), "logging to file");
    Ok(Some(file))
}

/// Restore the terminal on panic so the error is readable.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        // 16 ms tick drives notice expiry without busy-looping.
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            match key.code {
                                KeyCode::Char('c')
                                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                                {
                                    app.quit();
                                }
                                KeyCode::Esc => {
                                    app.quit();
                                }
                                KeyCode::Tab => {
                                    app.toggle_focus();
                                }
                                _ => {
                                    app.handle_key(key);
                                }
                            }
                        }
                        Event::Mouse(mouse) => match mouse.kind {
                            MouseEventKind::Down(MouseButton::Left) => {
                                app.handle_map_click(mouse.column, mouse.row);
                            }
                            MouseEventKind::Moved => {
                                app.handle_mouse_move(mouse.column, mouse.row);
                            }
                            MouseEventKind::ScrollUp => {
                                app.map.zoom_in();
                                app.mark_dirty();
                            }
                            MouseEventKind::ScrollDown => {
                                app.map.zoom_out();
                                app.mark_dirty();
                            }
                            _ => {}
                        },
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
