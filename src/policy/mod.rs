//! Move-selection policies for the automated opponent.

pub mod heuristic;

pub use heuristic::{HeuristicPolicy, MovePolicy};
