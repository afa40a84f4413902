//! Application state and logic.

use super::feedback::{Cue, Feedback};
use super::input::move_cursor;
use crate::config::AppConfig;
use crate::games::tictactoe::{GameEngine, Position};
use crossterm::event::KeyCode;
use tracing::{debug, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
///
/// Translates each key press into at most one engine call and keeps the
/// feedback for the last one. Holds no game rules of its own.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    config: AppConfig,
    cursor: Position,
    feedback: Feedback,
    pending_cue: Option<Cue>,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: AppConfig) -> Self {
        let engine = GameEngine::new();
        let feedback = Feedback::welcome(&engine, &config);
        Self {
            engine,
            config,
            cursor: Position::Center,
            feedback,
            pending_cue: None,
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the feedback for the last action.
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Takes the cue produced by the last action, if not yet played.
    pub fn take_cue(&mut self) -> Option<Cue> {
        self.pending_cue.take()
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) -> AppAction {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char(c @ '1'..='9') => {
                // Keys 1-9 name cells 0-8
                if let Some(digit) = c.to_digit(10) {
                    self.select(digit as usize - 1);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor.to_index()),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Makes a move at the given cell index.
    fn select(&mut self, index: usize) {
        debug!(index, "Selecting cell");
        let result = self.engine.attempt_move(index);
        // The cursor follows accepted moves only
        if result.is_accepted()
            && let Some(pos) = Position::from_index(index)
        {
            self.cursor = pos;
        }
        self.set_feedback(Feedback::for_move(result, &self.config));
    }

    /// Restarts the game.
    fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.set_feedback(Feedback::for_reset());
    }

    fn set_feedback(&mut self, feedback: Feedback) {
        self.pending_cue = *feedback.cue();
        self.feedback = feedback;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GamePhase, Player, Square};
    use crate::tui::feedback::Tone;

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            assert_eq!(app.handle_key(KeyCode::Char(c)), AppAction::Continue);
        }
    }

    #[test]
    fn test_digit_keys_play_cells() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, "5");
        assert_eq!(
            app.engine().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.feedback().message(), "O's turn");
        assert_eq!(app.take_cue(), Some(Cue::Move));
        assert_eq!(app.take_cue(), None);
    }

    #[test]
    fn test_occupied_cell_is_refused() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, "5");
        app.handle_key(KeyCode::Up);
        press(&mut app, "5");
        assert_eq!(app.cursor(), Position::TopCenter);
        assert_eq!(app.engine().history().len(), 1);
        assert_eq!(app.engine().active_player(), Player::O);
        assert_eq!(*app.feedback().tone(), Tone::Warning);
    }

    #[test]
    fn test_zero_key_is_ignored() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, "0");
        assert!(app.engine().history().is_empty());
        assert_eq!(app.take_cue(), None);
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = App::new(AppConfig::default());
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.engine().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_win_then_moves_are_refused() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, "14253");
        assert_eq!(app.engine().phase(), GamePhase::Won(Player::X));
        assert_eq!(app.feedback().message(), "X won!");
        assert_eq!(app.take_cue(), Some(Cue::Win));

        press(&mut app, "9");
        assert_eq!(app.engine().phase(), GamePhase::Won(Player::X));
        assert!(app.feedback().message().contains("over"));
    }

    #[test]
    fn test_reset_key() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, "123r");
        assert!(app.engine().history().is_empty());
        assert_eq!(app.feedback().message(), "New Game");
        assert_eq!(app.take_cue(), Some(Cue::Reset));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(AppConfig::default());
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
    }
}
