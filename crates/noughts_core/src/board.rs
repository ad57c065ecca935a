//! Core domain types for tic-tac-toe.

use crate::error::BoardParseError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
///
/// Indices are row-major, so `0` is the top-left cell and `8` the bottom-right.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// One of the two sides.
///
/// Players carry no glyph of their own; the rendering layer decides how
/// each side is drawn, so the human and the computer can swap symbols
/// without touching the engine.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// First side (drawn as a cross by default).
    #[serde(alias = "a", alias = "x", alias = "X")]
    #[strum(to_string = "A", serialize = "X")]
    A,
    /// Second side (drawn as a nought by default).
    #[serde(alias = "b", alias = "o", alias = "O")]
    #[strum(to_string = "B", serialize = "O")]
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by a player.
    Marked(Player),
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Three in a row for this player.
    Won(Player),
    /// Board full with no winner.
    Draw,
}

/// 3x3 tic-tac-toe board.
///
/// `Board` is `Copy`: cloning it for speculative moves never aliases the
/// original, which is what the search relies on when it explores sibling
/// branches from a shared position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    tiles: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from an explicit cell layout.
    pub fn from_cells(tiles: [Cell; CELLS]) -> Self {
        Self { tiles }
    }

    /// Parses a board from a layout string such as `"AA_|BB_|___"`.
    ///
    /// `A`/`X` mark the first player, `B`/`O` the second, and `_`, `.` or `-`
    /// an empty cell. Whitespace and `|` separators are ignored.
    #[instrument]
    pub fn parse(layout: &str) -> Result<Self, BoardParseError> {
        let mut tiles = [Cell::Empty; CELLS];
        let mut count = 0;
        for ch in layout.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = match ch {
                'A' | 'a' | 'X' | 'x' => Cell::Marked(Player::A),
                'B' | 'b' | 'O' | 'o' => Cell::Marked(Player::B),
                '_' | '.' | '-' => Cell::Empty,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
            if count < CELLS {
                tiles[count] = cell;
            }
            count += 1;
        }
        if count != CELLS {
            return Err(BoardParseError::WrongLength(count));
        }
        Ok(Self { tiles })
    }

    /// Returns an independent copy of this board.
    pub fn copy(&self) -> Self {
        *self
    }

    /// Places `player`'s mark at `index`.
    ///
    /// Callers must pass an index from [`Board::moves`]. Marking an occupied
    /// cell overwrites it, and an index of 9 or more panics.
    pub fn mark(&mut self, player: Player, index: usize) -> &mut Self {
        self.tiles[index] = Cell::Marked(player);
        self
    }

    /// Returns a copy of this board with one extra mark applied.
    pub fn with_mark(&self, player: Player, index: usize) -> Self {
        let mut next = self.copy();
        next.mark(player, index);
        next
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.tiles.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.tiles
    }

    /// Empty cell indices in ascending order.
    pub fn moves(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.tiles[i] == Cell::Empty).collect()
    }

    /// Occupied cell indices in ascending order.
    pub fn occupied(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.tiles[i] != Cell::Empty).collect()
    }

    /// Returns the owner of the first completed line in [`WIN_LINES`] order.
    pub fn winner(&self) -> Option<Player> {
        WIN_LINES.iter().find_map(|&[a, b, c]| match self.tiles[a] {
            Cell::Marked(p) if self.tiles[b] == self.tiles[a] && self.tiles[c] == self.tiles[a] => {
                Some(p)
            }
            _ => None,
        })
    }

    /// Checks if every cell is marked.
    pub fn full(&self) -> bool {
        self.tiles.iter().all(|&c| c != Cell::Empty)
    }

    /// Returns how the game ended, or `None` while it is still undecided.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(player) => Some(Outcome::Won(player)),
            None if self.full() => Some(Outcome::Draw),
            None => None,
        }
    }
}
