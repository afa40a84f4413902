//! The tic-tac-toe game engine.
//!
//! [`GameEngine`] owns the board, the active player and the phase. It is
//! mutated only through [`GameEngine::attempt_move`] and [`GameEngine::reset`];
//! everything else is a read-only query.

use super::Position;
use super::action::{Move, MoveResult, Rejection};
use super::invariants::{EngineInvariants, InvariantSet};
#[cfg(debug_assertions)]
use super::invariants::{MonotonicBoardInvariant, TransitionInvariant};
use super::rules;
use super::types::{Board, GamePhase, Player, Square};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    pub(super) board: Board,
    pub(super) active: Player,
    pub(super) phase: GamePhase,
    pub(super) history: Vec<Move>,
}

impl GameEngine {
    /// The player who moves first in every game.
    pub const FIRST_PLAYER: Player = Player::X;

    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: Self::FIRST_PLAYER,
            phase: GamePhase::InProgress,
            history: Vec::new(),
        }
    }

    /// Attempts to place the active player's mark at `index` (0-8).
    ///
    /// Checks run in order: index range, game over, occupied square. A
    /// rejected move leaves the engine exactly as it was.
    #[instrument(skip(self), fields(player = %self.active, phase = %self.phase))]
    pub fn attempt_move(&mut self, index: usize) -> MoveResult {
        let Some(pos) = Position::from_index(index) else {
            warn!(index, "Rejected move outside the board");
            return MoveResult::Rejected(Rejection::InvalidIndex(index));
        };

        if self.phase.is_terminal() {
            debug!(%pos, "Rejected move after game over");
            return MoveResult::Rejected(Rejection::GameOver);
        }

        if !self.board.is_empty(pos) {
            debug!(%pos, "Rejected move on occupied square");
            return MoveResult::Rejected(Rejection::CellOccupied(pos));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.active;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        let result = self.update_phase(player);

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated after {:?}",
            result
        );
        #[cfg(debug_assertions)]
        assert!(
            MonotonicBoardInvariant::holds(&before, self),
            "{} after {:?}",
            MonotonicBoardInvariant::description(),
            result
        );

        info!(%pos, %player, ?result, "Move applied");
        result
    }

    /// Plays the active player's mark at a typed position.
    pub fn play(&mut self, pos: Position) -> MoveResult {
        self.attempt_move(pos.to_index())
    }

    /// Win takes precedence over draw; only the mover can have completed a line.
    fn update_phase(&mut self, mover: Player) -> MoveResult {
        if rules::winning_line(&self.board, mover).is_some() {
            self.phase = GamePhase::Won(mover);
            MoveResult::Win(mover)
        } else if rules::is_full(&self.board) {
            self.phase = GamePhase::Draw;
            MoveResult::Draw
        } else {
            self.active = mover.opponent();
            MoveResult::Continue(self.active)
        }
    }

    /// Abandons the current game and starts a fresh one. Valid in any phase.
    #[instrument(skip(self), fields(phase = %self.phase, moves = self.history.len()))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new();
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next accepted move places.
    ///
    /// Frozen once the game is over: it names the player who made the last move.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Returns the accepted moves of the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty squares, or nothing once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.phase.is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Returns the completed line once the game is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.phase
            .winner()
            .and_then(|winner| rules::winning_line(&self.board, winner))
    }

    /// Builds a fresh engine and applies `moves` in order.
    ///
    /// Returns the engine with the result of the last move (`None` when no
    /// moves were given), or the rejection of the first refused move.
    #[instrument]
    pub fn replay(moves: &[usize]) -> Result<(Self, Option<MoveResult>), Rejection> {
        let mut engine = Self::new();
        let mut last = None;

        for &index in moves {
            let result = engine.attempt_move(index);
            if let Some(reason) = result.rejection() {
                return Err(reason);
            }
            last = Some(result);
        }

        Ok((engine, last))
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_line_reported_after_win() {
        let (engine, result) = GameEngine::replay(&[0, 3, 4, 5, 8]).unwrap();
        assert_eq!(result, Some(MoveResult::Win(Player::X)));
        assert_eq!(
            engine.winning_line(),
            Some([Position::TopLeft, Position::Center, Position::BottomRight])
        );
    }

    #[test]
    fn test_win_on_last_square_beats_draw() {
        // X O X
        // O O X
        // O X X  <- ninth move at 8 fills the board and completes 2-5-8
        let (engine, result) = GameEngine::replay(&[0, 1, 2, 3, 5, 4, 7, 6, 8])
            .unwrap_or_else(|reason| panic!("unexpected rejection: {}", reason));
        assert_eq!(result, Some(MoveResult::Win(Player::X)));
        assert_eq!(engine.phase(), GamePhase::Won(Player::X));
        assert!(rules::is_full(engine.board()));
    }

    #[test]
    fn test_replay_stops_at_first_rejection() {
        assert_eq!(
            GameEngine::replay(&[4, 4]),
            Err(Rejection::CellOccupied(Position::Center))
        );
        assert_eq!(GameEngine::replay(&[12]), Err(Rejection::InvalidIndex(12)));
    }

    #[test]
    fn test_replay_empty() {
        let (engine, result) = GameEngine::replay(&[]).unwrap();
        assert_eq!(result, None);
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_valid_moves_empty_after_game_over() {
        let (engine, _) = GameEngine::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert!(engine.valid_moves().is_empty());
    }
}
