//! Noughts - a tic-tac-toe game engine with a terminal front end.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, the active player and the
//!   phase; [`GameEngine::attempt_move`] and [`GameEngine::reset`] are the
//!   only ways to change them
//! - **Rules**: pure win/draw checks over a [`Board`]
//! - **TUI**: a ratatui front end that maps key presses to engine calls and
//!   renders the returned [`MoveResult`]s
//!
//! # Example
//!
//! ```
//! use noughts::{GameEngine, GamePhase, MoveResult, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.attempt_move(index);
//! }
//! assert_eq!(engine.attempt_move(2), MoveResult::Win(Player::X));
//! assert_eq!(engine.phase(), GamePhase::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, CONFIG_ENV_VAR, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameEngine, GamePhase, Move, MoveResult, Player, Position, Rejection, Square,
};
