//! Core state types: players, cells, the board, and deterministic RNG.
//!
//! Everything here is a plain value type. Mutation policy (who may write
//! which cell, and when) lives in `rules`, not here.

pub mod board;
pub mod player;
pub mod rng;

pub use board::{Board, Coord, WinLine, BOARD_SIZE};
pub use player::{Cell, Player};
pub use rng::{GameRng, GameRngState};
