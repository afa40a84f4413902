//! What the player sees and hears after each action.
//!
//! The engine only reports [`MoveResult`]s. This module turns them into a
//! status line, a tone for colouring it, and a cue for the bell.

use crate::config::AppConfig;
use crate::games::tictactoe::{GameEngine, GamePhase, MoveResult};

/// Sound-style cue for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A cell was selected.
    Move,
    /// The selection won the game.
    Win,
    /// The selection filled the board.
    Draw,
    /// A new game started.
    Reset,
}

/// Colour family of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Normal play.
    #[default]
    Neutral,
    /// Someone won.
    Success,
    /// A draw, or a refused move.
    Warning,
}

/// Status line plus the cue to play for it.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Feedback {
    message: String,
    tone: Tone,
    cue: Option<Cue>,
}

impl Feedback {
    /// Feedback shown before any move is made.
    pub fn welcome(engine: &GameEngine, config: &AppConfig) -> Self {
        Self {
            message: Self::status(engine, config),
            tone: Tone::Neutral,
            cue: None,
        }
    }

    /// Feedback after a cell was selected.
    ///
    /// Every selection cues a move sound, accepted or not; a win or draw
    /// replaces it with its own cue.
    pub fn for_move(result: MoveResult, config: &AppConfig) -> Self {
        let (message, tone, cue) = match result {
            MoveResult::Continue(next) => {
                (format!("{}'s turn", config.mark(next)), Tone::Neutral, Cue::Move)
            }
            MoveResult::Win(winner) => {
                (format!("{} won!", config.mark(winner)), Tone::Success, Cue::Win)
            }
            MoveResult::Draw => ("Match is draw".to_string(), Tone::Warning, Cue::Draw),
            MoveResult::Rejected(reason) => (reason.to_string(), Tone::Warning, Cue::Move),
        };
        Self {
            message,
            tone,
            cue: Some(cue),
        }
    }

    /// Feedback after the game was reset.
    pub fn for_reset() -> Self {
        Self {
            message: "New Game".to_string(),
            tone: Tone::Neutral,
            cue: Some(Cue::Reset),
        }
    }

    /// Describes the engine's current phase.
    pub fn status(engine: &GameEngine, config: &AppConfig) -> String {
        match engine.phase() {
            GamePhase::InProgress => format!("{}'s turn", config.mark(engine.active_player())),
            GamePhase::Won(winner) => format!("{} won!", config.mark(winner)),
            GamePhase::Draw => "Match is draw".to_string(),
        }
    }
}
