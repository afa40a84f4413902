//! Tic-tac-toe: board, rules and the game engine.

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveResult, Rejection};
pub use engine::GameEngine;
pub use position::Position;
pub use types::{Board, GamePhase, Player, Square};
