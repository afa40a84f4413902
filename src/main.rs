//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use noughts::tui::Feedback;
use noughts::{AppConfig, ConfigError, GameEngine, Position};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let startup_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let config = load_config(cli.config.as_deref(), startup_filter, std::io::stderr)?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// Loads the config under a temporary subscriber.
///
/// The real subscriber depends on the config (log file, filter), so config
/// loading logs through this one instead.
fn load_config<W>(
    path: Option<&Path>,
    filter: EnvFilter,
    writer: W,
) -> Result<AppConfig, ConfigError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(bootstrap, || AppConfig::load(path))
}

/// Filter from `RUST_LOG`, falling back to the configured one.
fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the terminal UI, logging to a file so the screen stays clean.
fn run_tui(config: AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    noughts::tui::run_tui(config)
}

/// Apply moves from the command line and print the resulting game.
#[instrument(skip(config))]
fn run_replay(config: &AppConfig, moves: &[String], json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    let indices = moves
        .iter()
        .map(|m| {
            Position::from_label_or_number(m)
                .map(Position::to_index)
                .with_context(|| format!("Not a cell: {:?}", m))
        })
        .collect::<Result<Vec<_>>>()?;

    let (engine, last) = match GameEngine::replay(&indices) {
        Ok(replayed) => replayed,
        Err(reason) => bail!("Replay stopped: {}", reason),
    };
    info!(moves = indices.len(), phase = %engine.phase(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&engine)?);
        return Ok(());
    }

    println!("{}\n", engine.board().display());
    match last {
        Some(result) if result.is_terminal() => {
            println!("{}", Feedback::for_move(result, config).message())
        }
        _ => println!("{}'s turn", config.mark(engine.active_player())),
    }
    Ok(())
}
