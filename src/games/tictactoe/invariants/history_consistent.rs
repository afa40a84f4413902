//! History consistency invariant: history matches the occupied squares.

use super::super::{GameEngine, Square};
use super::Invariant;

/// Invariant: every move in history owns its square, and nothing else is marked.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let occupied = board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        engine.history().len() == occupied
            && engine
                .history()
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.player))
    }

    fn description() -> &'static str {
        "History matches the occupied squares"
    }
}
