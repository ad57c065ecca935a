//! Noughts core - tic-tac-toe board model and minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Cell`]s answering moves, winner and fullness
//! - **Search**: exhaustive minimax that picks the computer's optimal move
//!
//! The crate knows nothing about glyphs, input or timing. Players are the
//! abstract sides [`Player::A`] and [`Player::B`].
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Player, select_move};
//!
//! let mut board = Board::new();
//! board.mark(Player::A, 0);
//! let reply = select_move(&board, Player::B, Player::A)?;
//! assert_eq!(reply, 4);
//! # Ok::<(), noughts_core::SearchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod position;
mod search;

pub use board::{Board, CELLS, Cell, Outcome, Player, WIN_LINES};
pub use error::{BoardParseError, SearchError};
pub use position::Position;
pub use search::{WIN_SCORE, evaluate, select_move};
