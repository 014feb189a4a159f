//! Players and cell marks.
//!
//! ## Player
//!
//! One of the two sides, X or O. X always moves first in a new game.
//!
//! ## Cell
//!
//! A single board position: empty, or marked by one of the players.
//! A tagged three-valued enum rather than an `Option<Player>` so that
//! serialized boards read as what they are.

use serde::{Deserialize, Serialize};

/// One of the two sides.
///
/// X always moves first in a new game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player writes into a cell.
    #[must_use]
    pub const fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Contents of a single board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Check if the cell holds no mark.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player whose mark occupies this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent().opponent(), Player::X);
    }

    #[test]
    fn test_mark_and_owner_round_trip() {
        assert_eq!(Player::X.mark().owner(), Some(Player::X));
        assert_eq!(Player::O.mark().owner(), Some(Player::O));
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn test_cell_default_is_empty() {
        assert!(Cell::default().is_empty());
        assert!(!Cell::X.is_empty());
        assert!(!Cell::O.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::X), "X");
        assert_eq!(format!("{}", Player::O), "O");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Cell::X).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Cell::X);

        let json = serde_json::to_string(&Player::O).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::O);
    }
}
