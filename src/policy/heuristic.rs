//! The automated opponent's decision procedure.
//!
//! Policies are trait-based so the engine's opponent seam can be swapped in
//! tests or future variants; the shipped policy is the classic
//! win > block > random heuristic.
//!
//! All lookahead probes run on a throwaway copy of the board. The live
//! board is never mutated during evaluation.

use crate::core::{Board, Coord, GameRng, Player};

/// Policy for choosing the automated opponent's move.
pub trait MovePolicy {
    /// Choose a cell for `mover` on `board`.
    ///
    /// Returns `None` only when the board has no empty cells.
    fn choose_move(&self, board: &Board, mover: Player, rng: &mut GameRng) -> Option<Coord>;
}

/// Win > block > random move selection.
///
/// Strict priority order:
/// 1. **Winning move**: first empty cell in row-major order that completes
///    a line for the mover.
/// 2. **Blocking move**: first empty cell that would complete a line for
///    the opponent.
/// 3. **Random move**: uniform choice among all empty cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    /// First empty cell, scanning row-major, whose occupation would complete
    /// a line for `player`. Probes a board copy.
    fn completing_cell(board: &Board, player: Player) -> Option<Coord> {
        board.empty_cells().into_iter().find(|&coord| {
            let mut probe = *board;
            probe.place(coord, player);
            probe.winning_line(player).is_some()
        })
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose_move(&self, board: &Board, mover: Player, rng: &mut GameRng) -> Option<Coord> {
        if let Some(winning) = Self::completing_cell(board, mover) {
            return Some(winning);
        }

        if let Some(blocking) = Self::completing_cell(board, mover.opponent()) {
            return Some(blocking);
        }

        let open = board.empty_cells();
        rng.choose(&open).copied()
    }
}
