//! Terminal front end.
//!
//! A synchronous crossterm event loop: each key press becomes at most one
//! engine call, then the screen is redrawn from the engine's state.

mod app;
mod feedback;
mod input;
mod ui;

pub use app::{App, AppAction};
pub use feedback::{Cue, Feedback, Tone};
pub use input::move_cursor;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the TUI until the player quits.
#[instrument(skip_all)]
pub fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting Noughts TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Some(cue) = app.take_cue()
            && *app.config().bell()
        {
            ring_bell(cue)?;
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == AppAction::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}

/// The terminal bell stands in for sound effects; plain moves stay silent.
fn ring_bell(cue: Cue) -> Result<()> {
    debug!(?cue, "Playing cue");
    let rings = match cue {
        Cue::Move => 0,
        Cue::Reset | Cue::Draw => 1,
        Cue::Win => 2,
    };
    let mut stdout = io::stdout();
    for _ in 0..rings {
        stdout.write_all(b"\x07")?;
    }
    stdout.flush()?;
    Ok(())
}
