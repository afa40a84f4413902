//! Moves and their outcomes.
//!
//! Every call to [`GameEngine::attempt_move`](super::GameEngine::attempt_move)
//! answers with a [`MoveResult`]. Rejections are ordinary values: the caller
//! renders them, nothing is thrown and nothing needs retrying.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// An accepted move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player placed their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was refused. The engine state is untouched in every case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Error,
)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell (must be 0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),
}

/// Outcome of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move was accepted and the game goes on; holds the next player.
    Continue(Player),
    /// The move completed a line; holds the winner.
    Win(Player),
    /// The move filled the board without a winner.
    Draw,
    /// The move was refused.
    Rejected(Rejection),
}

impl MoveResult {
    /// Returns true unless the move was rejected.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveResult::Rejected(_))
    }

    /// Returns true if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveResult::Win(_) | MoveResult::Draw)
    }

    /// Returns the rejection, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveResult::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveResult::Continue(next) => write!(f, "Player {}'s turn", next),
            MoveResult::Win(winner) => write!(f, "Player {} wins", winner),
            MoveResult::Draw => write!(f, "Draw"),
            MoveResult::Rejected(reason) => write!(f, "Rejected: {}", reason),
        }
    }
}
