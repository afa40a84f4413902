//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (overrides NOUGHTS_CONFIG and ./noughts.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui,

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Moves as cell indices (0-8) or labels such as "center"
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the game as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
