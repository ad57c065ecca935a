//! Terminal UI for Noughts.

mod app;
mod input;
mod ui;

pub use app::{Action, App};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::session::{ResetTicket, Session, Symbols, schedule_reset};

/// Sends tracing output to `path` so it does not draw over the board.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the interactive game until the user quits.
pub async fn run_tui(config: Config) -> Result<()> {
    init_file_logging(config.log_file())?;
    info!("Starting Noughts TUI");

    let glyphs = config.build_glyphs()?;
    let theme = config.build_theme()?;
    let mut app = App::new(Session::new(Symbols::new(*config.human())), glyphs, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &mut app, config.reset_delay()).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Noughts TUI exited");
    res
}

/// Draw, read input, apply due resets, repeat.
#[instrument(skip_all, fields(reset_delay_ms = reset_delay.as_millis() as u64))]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    reset_delay: Duration,
) -> Result<()> {
    let (reset_tx, mut reset_rx) = mpsc::unbounded_channel::<ResetTicket>();

    loop {
        terminal.draw(|f| {
            app.set_area(f.area());
            ui::draw(f, app);
        })?;

        while let Ok(ticket) = reset_rx.try_recv() {
            app.handle_reset(ticket);
        }

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                // Skip key release events (crossterm fires both press and release).
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if app.handle_key(key) == Action::Quit {
                        info!("User quit");
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if let Some(ticket) = app.take_pending_reset() {
            schedule_reset(ticket, reset_delay, reset_tx.clone());
        }

        sleep(Duration::from_millis(10)).await;
    }
}
