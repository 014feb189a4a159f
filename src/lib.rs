//! # tictactoe-engine
//!
//! Rules engine and heuristic opponent for two-player tic-tac-toe.
//!
//! ## Design Principles
//!
//! 1. **Typed State**: The board is a fixed 3x3 grid of a three-valued
//!    `Cell` enum; a win is an optional `WinLine` of exactly three
//!    coordinates. No loosely-typed values doubling as boolean and data.
//!
//! 2. **One Indivisible Step**: A human move and the resulting automated
//!    reply happen inside a single `play` call. Callers only ever observe
//!    the post-reply state.
//!
//! 3. **Deterministic**: The opponent's random fallback draws from a seeded
//!    ChaCha8 RNG, so a seeded engine replays identically.
//!
//! ## Modules
//!
//! - `core`: Players, cells, the board, win-line detection, RNG
//! - `policy`: Move-selection policies for the automated opponent
//! - `rules`: The `GameEngine` state machine and its query surface
//!
//! ## Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, MoveOutcome, Player};
//!
//! let mut engine = GameEngine::new(42);
//! engine.start_game();
//!
//! // X plays; the automated O replies within the same call.
//! let outcome = engine.play(0, 0);
//! assert_eq!(outcome, MoveOutcome::InProgress);
//! assert_eq!(engine.move_count(), 2);
//! assert_eq!(engine.current_player(), Player::X);
//! ```

pub mod core;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Coord, GameRng, GameRngState, Player, WinLine};
pub use crate::policy::{HeuristicPolicy, MovePolicy};
pub use crate::rules::{GameEngine, GameResult, GameStatus, MoveOutcome, Screen};
