//! Tests for tic-tac-toe positions.

use noughts::{GameEngine, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_index_is_row_major() {
    for pos in Position::ALL {
        assert_eq!(pos.to_index(), pos.row() * 3 + pos.col());
    }
}

#[test]
fn test_from_label_or_number() {
    assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number(" 0 "), Some(Position::TopLeft));
    assert_eq!(Position::from_label_or_number("9"), None);
    assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
    assert_eq!(
        Position::from_label_or_number("Bottom-Right"),
        Some(Position::BottomRight)
    );
    assert_eq!(
        Position::from_label_or_number("middle-r"),
        Some(Position::MiddleRight)
    );
    assert_eq!(Position::from_label_or_number("nowhere"), None);
    assert_eq!(Position::from_label_or_number(""), None);
}

#[test]
fn test_label_separators_are_interchangeable() {
    assert_eq!(
        Position::from_label_or_number("top left"),
        Some(Position::TopLeft)
    );
    assert_eq!(
        Position::from_label_or_number("BOTTOM_CENTER"),
        Some(Position::BottomCenter)
    );
}

#[test]
fn test_short_fragments_are_refused() {
    for fragment in ["-", "t", "le", "ft", "er"] {
        assert_eq!(Position::from_label_or_number(fragment), None, "{fragment:?}");
    }
}

#[test]
fn test_abbreviation_must_be_unique_prefix() {
    assert_eq!(Position::from_label_or_number("cent"), Some(Position::Center));
    assert_eq!(
        Position::from_label_or_number("bottom-l"),
        Some(Position::BottomLeft)
    );
    // Several labels start with these
    assert_eq!(Position::from_label_or_number("top"), None);
    assert_eq!(Position::from_label_or_number("middle"), None);
    // Inside a label but not at its start
    assert_eq!(Position::from_label_or_number("left"), None);
    assert_eq!(Position::from_label_or_number("right"), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let engine = GameEngine::new();
    assert_eq!(engine.valid_moves(), Position::ALL.to_vec());
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut engine = GameEngine::new();
    engine.attempt_move(0);
    engine.attempt_move(4);

    let valid = Position::valid_moves(engine.board());
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
