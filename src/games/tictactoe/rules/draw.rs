//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    fn fill(board: &mut Board, marks: [Player; 9]) {
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(player));
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        let mut board = Board::new();
        // X O X / O X X / O X O
        fill(&mut board, [X, O, X, O, X, X, O, X, O]);

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        let mut board = Board::new();
        // X X X / O O X / X O O
        fill(&mut board, [X, X, X, O, O, X, X, O, O]);

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
