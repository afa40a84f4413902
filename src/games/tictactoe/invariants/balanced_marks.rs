//! Balanced marks invariant: X leads O by at most one mark.

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: the board holds as many X marks as O marks, or one more X.
///
/// X always moves first and turns alternate, so O can never be ahead.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x_count = engine.board().count(Player::X);
        let o_count = engine.board().count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X marks equal O marks or exceed them by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, Square};

    #[test]
    fn test_holds_through_full_game() {
        let mut engine = GameEngine::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            engine.attempt_move(index);
            assert!(BalancedMarksInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_extra_o_violates() {
        let mut engine = GameEngine::new();
        engine.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!BalancedMarksInvariant::holds(&engine));
    }

    #[test]
    fn test_two_extra_x_violates() {
        let mut engine = GameEngine::new();
        engine.board.set(Position::Center, Square::Occupied(Player::X));
        engine.board.set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(!BalancedMarksInvariant::holds(&engine));
    }
}
