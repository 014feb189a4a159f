//! Board geometry: coordinates, the 3x3 grid, and win lines.
//!
//! ## Coord
//!
//! A checked (row, column) pair. Out-of-range coordinates are
//! unrepresentable: `Coord::new` returns `None` for anything outside the
//! board, so the rest of the crate never bounds-checks.
//!
//! ## WinLine
//!
//! The three coordinates of a completed row, column, or diagonal.
//!
//! ## Line scan
//!
//! `Board::winning_line` rechecks all 8 lines on every call in a fixed
//! order and reports the first complete one. In correct play a single move
//! can complete at most one line, but the order keeps detection
//! deterministic on hand-built test boards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Cell, Player};

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// A board coordinate, row and column each in `0..3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, or `None` if either index is off the board.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row index (0-based).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-based).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Iterate over all 9 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Coord { row, col }))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// In-module constructor for the static line table.
const fn at(row: u8, col: u8) -> Coord {
    Coord { row, col }
}

/// All 8 win lines in detection order: diagonal (down-right), diagonal
/// (down-left), columns 0-2, rows 0-2.
const LINES: [[Coord; 3]; 8] = [
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
];

/// The three coordinates of a completed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine([Coord; 3]);

impl WinLine {
    /// The line's coordinates, in scan order.
    #[must_use]
    pub const fn coords(&self) -> [Coord; 3] {
        self.0
    }

    /// Check if a coordinate lies on this line.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }
}

/// The 3x3 grid of cells.
///
/// `Copy` on purpose: the opponent heuristic probes hypothetical moves on a
/// throwaway copy, never on the live board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at a coordinate.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Check if the cell at a coordinate is empty.
    #[must_use]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.cell(coord).is_empty()
    }

    /// Write a player's mark at a coordinate.
    pub fn place(&mut self, coord: Coord, player: Player) {
        self.cells[coord.row()][coord.col()] = player.mark();
    }

    /// All empty cells, in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Coord; 9]> {
        Coord::all().filter(|&c| self.is_empty_at(c)).collect()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn filled(&self) -> usize {
        Coord::all().filter(|&c| !self.is_empty_at(c)).count()
    }

    /// Check if every cell is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled() == BOARD_SIZE * BOARD_SIZE
    }

    /// The first line completed by `player`, scanning diagonals, then
    /// columns, then rows.
    #[must_use]
    pub fn winning_line(&self, player: Player) -> Option<WinLine> {
        let mark = player.mark();
        LINES
            .iter()
            .find(|line| line.iter().all(|&c| self.cell(c) == mark))
            .map(|&line| WinLine(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(2, 2).is_some());
        assert!(Coord::new(3, 0).is_none());
        assert!(Coord::new(0, 3).is_none());
        assert!(Coord::new(usize::MAX, 0).is_none());
    }

    #[test]
    fn test_coord_all_is_row_major() {
        let coords: Vec<_> = Coord::all().collect();
        assert_eq!(coords.len(), 9);
        assert_eq!(coords[0], coord(0, 0));
        assert_eq!(coords[1], coord(0, 1));
        assert_eq!(coords[3], coord(1, 0));
        assert_eq!(coords[8], coord(2, 2));
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Coord::all().all(|c| board.is_empty_at(c)));
        assert_eq!(board.filled(), 0);
        assert!(!board.is_full());
        assert_eq!(board.winning_line(Player::X), None);
        assert_eq!(board.winning_line(Player::O), None);
    }

    #[test]
    fn test_place_and_query() {
        let mut board = Board::new();
        board.place(coord(1, 2), Player::X);

        assert_eq!(board.cell(coord(1, 2)), Cell::X);
        assert!(!board.is_empty_at(coord(1, 2)));
        assert_eq!(board.filled(), 1);
        assert_eq!(board.empty_cells().len(), 8);
    }

    #[test]
    fn test_all_eight_lines_detected_for_both_players() {
        for player in [Player::X, Player::O] {
            for line in LINES {
                let mut board = Board::new();
                for c in line {
                    board.place(c, player);
                }

                let detected = board.winning_line(player).expect("line not detected");
                assert_eq!(detected.coords(), line);
                // The other player has no line on this board
                assert_eq!(board.winning_line(player.opponent()), None);
            }
        }
    }

    #[test]
    fn test_mixed_marks_complete_no_line() {
        let mut board = Board::new();
        board.place(coord(0, 0), Player::X);
        board.place(coord(0, 1), Player::O);
        board.place(coord(0, 2), Player::X);

        assert_eq!(board.winning_line(Player::X), None);
        assert_eq!(board.winning_line(Player::O), None);
    }

    #[test]
    fn test_scan_order_on_multi_line_board() {
        // All-X board completes every line; the scan must report the
        // down-right diagonal first.
        let mut board = Board::new();
        for c in Coord::all() {
            board.place(c, Player::X);
        }

        let line = board.winning_line(Player::X).unwrap();
        assert_eq!(line.coords(), [coord(0, 0), coord(1, 1), coord(2, 2)]);
    }

    #[test]
    fn test_column_before_row_in_scan_order() {
        // Board with both column 0 and row 2 complete for O:
        // columns come before rows in the scan.
        let mut board = Board::new();
        for row in 0..3 {
            board.place(coord(row, 0), Player::O);
        }
        for col in 0..3 {
            board.place(coord(2, col), Player::O);
        }

        let line = board.winning_line(Player::O).unwrap();
        assert_eq!(line.coords(), [coord(0, 0), coord(1, 0), coord(2, 0)]);
    }

    #[test]
    fn test_win_line_contains() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(coord(0, col), Player::X);
        }

        let line = board.winning_line(Player::X).unwrap();
        assert!(line.contains(coord(0, 0)));
        assert!(line.contains(coord(0, 1)));
        assert!(line.contains(coord(0, 2)));
        assert!(!line.contains(coord(1, 1)));
    }

    #[test]
    fn test_board_serialization() {
        let mut board = Board::new();
        board.place(coord(0, 0), Player::X);
        board.place(coord(1, 1), Player::O);

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
