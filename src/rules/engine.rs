//! The game engine: move validation, terminal detection, screen state.
//!
//! `GameEngine` owns the board, the turn, and the win state. A human move
//! and the automated reply it triggers are applied inside one `play` call;
//! no caller ever observes the half-applied state in between.
//!
//! Invalid moves (out-of-range coordinates, occupied cells, plays after the
//! game ended) are rejected without any state change and without an
//! automated reply. Stray clicks from a view layer are tolerated, not
//! signalled as errors.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Coord, GameRng, Player, WinLine};
use crate::policy::{HeuristicPolicy, MovePolicy};

const CELL_COUNT: u8 = 9;

/// Outcome of a `play` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was invalid and ignored. Nothing changed, no automated
    /// reply ran.
    Rejected,
    /// The move (and any automated reply) landed; the game continues.
    InProgress,
    /// The move or the automated reply completed a line.
    Won(Player),
    /// The board filled with no line.
    Draw,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner).
    Draw,
}

/// Progress of the current game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// A line was completed. No further moves are accepted.
    Won { winner: Player, line: WinLine },
    /// All nine cells filled with no line. No further moves are accepted.
    Draw,
}

impl GameStatus {
    /// Check if the game still accepts moves.
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        matches!(self, GameStatus::InProgress)
    }
}

/// Which screen the view layer should present.
///
/// Pure derived presentation state; screen transitions never gate move
/// validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Initial screen before the first game starts.
    Intro,
    /// The board is active.
    Playing,
    /// The game ended; show the result.
    Finished,
}

/// The rules engine for one game of tic-tac-toe.
///
/// Owns the board, the turn, the win state, and the opponent policy. One
/// instance per game session; it is not designed for concurrent access.
///
/// The human side plays via [`GameEngine::play`]; when the game continues
/// after that move, the automated side replies within the same call and the
/// turn comes back to the human.
pub struct GameEngine<P: MovePolicy = HeuristicPolicy> {
    board: Board,
    turn: Player,
    move_count: u8,
    status: GameStatus,
    screen: Screen,
    rng: GameRng,
    policy: P,
}

impl GameEngine<HeuristicPolicy> {
    /// Create an engine with the shipped win > block > random opponent.
    ///
    /// The seed fixes the opponent's random fallback, so equal seeds and
    /// equal move sequences produce identical games.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_policy(seed, HeuristicPolicy)
    }
}

impl<P: MovePolicy> GameEngine<P> {
    /// Create an engine with a custom opponent policy.
    #[must_use]
    pub fn with_policy(seed: u64, policy: P) -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            move_count: 0,
            status: GameStatus::InProgress,
            screen: Screen::Intro,
            rng: GameRng::new(seed),
            policy,
        }
    }

    // === Commands ===

    /// Reset to the initial state: empty board, X to move, no win, intro
    /// screen. The RNG stream is left where it is.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Player::X;
        self.move_count = 0;
        self.status = GameStatus::InProgress;
        self.screen = Screen::Intro;
    }

    /// Leave the intro screen and show the board.
    pub fn start_game(&mut self) {
        self.screen = Screen::Playing;
    }

    /// Start a fresh game and show the board.
    pub fn new_game(&mut self) {
        self.reset();
        self.screen = Screen::Playing;
    }

    /// Apply the human move at (row, col), then the automated reply when
    /// the game continues.
    ///
    /// Out-of-range coordinates, occupied cells, and moves after the game
    /// ended return [`MoveOutcome::Rejected`] with zero state change.
    pub fn play(&mut self, row: usize, col: usize) -> MoveOutcome {
        let Some(coord) = Coord::new(row, col) else {
            return MoveOutcome::Rejected;
        };
        if !self.status.is_in_progress() || !self.board.is_empty_at(coord) {
            return MoveOutcome::Rejected;
        }

        self.place(coord);

        // The automated reply is a direct consequence of the human move,
        // never a separately triggered step.
        if self.status.is_in_progress() && self.move_count < CELL_COUNT {
            self.automated_turn();
        }

        match self.status {
            GameStatus::Won { winner, .. } => {
                self.screen = Screen::Finished;
                MoveOutcome::Won(winner)
            }
            GameStatus::InProgress if self.move_count == CELL_COUNT => {
                self.status = GameStatus::Draw;
                self.screen = Screen::Finished;
                MoveOutcome::Draw
            }
            _ => MoveOutcome::InProgress,
        }
    }

    /// Write the current player's mark, run win detection for them, flip
    /// the turn. Shared by the human move and the automated reply.
    fn place(&mut self, coord: Coord) {
        let mover = self.turn;
        self.board.place(coord, mover);
        self.move_count += 1;

        if let Some(line) = self.board.winning_line(mover) {
            self.status = GameStatus::Won {
                winner: mover,
                line,
            };
        }

        self.turn = mover.opponent();
    }

    fn automated_turn(&mut self) {
        // move_count < 9 here, so at least one empty cell exists.
        if let Some(coord) = self
            .policy
            .choose_move(&self.board, self.turn, &mut self.rng)
        {
            self.place(coord);
        }
    }

    // === Queries ===

    /// The board, read-only.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark at a coordinate.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Cell {
        self.board.cell(coord)
    }

    /// Check if X occupies (row, col). False for out-of-range coordinates.
    #[must_use]
    pub fn is_x_at(&self, row: usize, col: usize) -> bool {
        Coord::new(row, col).is_some_and(|c| self.board.cell(c) == Cell::X)
    }

    /// Check if O occupies (row, col). False for out-of-range coordinates.
    #[must_use]
    pub fn is_o_at(&self, row: usize, col: usize) -> bool {
        Coord::new(row, col).is_some_and(|c| self.board.cell(c) == Cell::O)
    }

    /// Check if (row, col) lies on the recorded win line.
    #[must_use]
    pub fn is_winning_cell(&self, row: usize, col: usize) -> bool {
        match (self.status, Coord::new(row, col)) {
            (GameStatus::Won { line, .. }, Some(coord)) => line.contains(coord),
            _ => false,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turn
    }

    /// The turn indicator for the view layer: the current player while the
    /// game runs or was won, explicitly nobody after a draw.
    #[must_use]
    pub fn turn_indicator(&self) -> Option<Player> {
        match self.status {
            GameStatus::Draw => None,
            _ => Some(self.turn),
        }
    }

    /// Number of marks on the board.
    #[must_use]
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Current game status, including the win line if one is recorded.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The recorded win line, if any.
    #[must_use]
    pub fn win_line(&self) -> Option<WinLine> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won { winner, .. } => Some(GameResult::Winner(winner)),
            GameStatus::Draw => Some(GameResult::Draw),
        }
    }

    // === Screen queries ===

    /// The active screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Check if the intro screen should be shown.
    #[must_use]
    pub fn show_intro(&self) -> bool {
        self.screen == Screen::Intro
    }

    /// Check if the board should be shown.
    #[must_use]
    pub fn show_board(&self) -> bool {
        self.screen == Screen::Playing
    }

    /// Check if the end screen should be shown.
    #[must_use]
    pub fn show_final(&self) -> bool {
        self.screen == Screen::Finished
    }
}
