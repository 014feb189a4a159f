//! Game rules: the engine state machine and its query surface.

pub mod engine;

pub use engine::{GameEngine, GameResult, GameStatus, MoveOutcome, Screen};
