//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, GamePhase};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern. While the game is in
/// progress the active player is [`GameEngine::FIRST_PLAYER`] after an
/// even number of moves and their opponent after an odd number. In a
/// terminal phase the active player is the one who made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if let Some(first) = history.first()
            && first.player != GameEngine::FIRST_PLAYER
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        match engine.phase() {
            GamePhase::InProgress => {
                let expected = if history.len() % 2 == 0 {
                    GameEngine::FIRST_PLAYER
                } else {
                    GameEngine::FIRST_PLAYER.opponent()
                };
                engine.active_player() == expected
            }
            GamePhase::Won(_) | GamePhase::Draw => history
                .last()
                .is_some_and(|last| last.player == engine.active_player()),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        let engine = GameEngine::new();
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let (engine, _) = GameEngine::replay(&[0, 4, 2, 6, 8]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.active_player(), Player::O);
    }

    #[test]
    fn test_holds_after_win() {
        let (engine, _) = GameEngine::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(engine.phase(), GamePhase::Won(Player::X));
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut engine = GameEngine::new();
        engine.history.push(Move::new(Player::X, Position::TopLeft));
        engine.history.push(Move::new(Player::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_active_player_follows_move_parity() {
        let mut engine = GameEngine::new();
        engine.attempt_move(4);
        assert_eq!(engine.active_player(), GameEngine::FIRST_PLAYER.opponent());
        assert!(AlternatingTurnInvariant::holds(&engine));

        engine.active = GameEngine::FIRST_PLAYER;
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_o_first_violates() {
        let mut engine = GameEngine::new();
        engine.history.push(Move::new(Player::O, Position::TopLeft));
        engine.active = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
