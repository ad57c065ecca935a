//! Error types for the board model and search.

use derive_more::{Display, Error};

/// Errors raised by [`select_move`](crate::select_move).
///
/// Both variants are caller contract violations; a game loop that checks
/// [`Board::moves`](crate::Board::moves) before searching never sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// The board has no empty cell, so there is no move to return.
    #[display("Invalid state: no legal move on a full board")]
    InvalidState,
    /// Computer and human were given the same player.
    #[display("Invalid state: computer and human are both {_0}")]
    SamePlayer(#[error(not(source))] crate::Player),
}

/// Errors raised when parsing a board layout string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The layout did not describe exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    WrongLength(#[error(not(source))] usize),
    /// A character that names neither player nor an empty cell.
    #[display("Invalid cell character '{_0}'")]
    InvalidCell(#[error(not(source))] char),
}
