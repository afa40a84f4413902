//! Monotonic board invariant: squares never change once set.

use super::super::{GameEngine, Square};
use super::TransitionInvariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Across a move, every square that was occupied before keeps its mark and
/// the earlier history is kept as a prefix of the new one. Only a reset
/// clears the board, and a reset is not a move.
pub struct MonotonicBoardInvariant;

impl TransitionInvariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(before: &GameEngine, after: &GameEngine) -> bool {
        let squares_kept = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .all(|(was, now)| *was == Square::Empty || was == now);

        squares_kept && after.history().starts_with(before.history())
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
