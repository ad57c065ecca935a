//! Exhaustive minimax search.
//!
//! The game tree from any tic-tac-toe position is small enough to search to
//! the end, so there is no pruning, no transposition table and no depth
//! limit. Scores are taken from the computer's point of view and adjusted by
//! depth so that the engine prefers the quickest win and the slowest loss.

use crate::board::{Board, Player};
use crate::error::SearchError;
use tracing::{debug, instrument};

/// Base score of a decided game; a win found `d` plies deep scores `WIN_SCORE - d`.
pub const WIN_SCORE: i32 = 10;

/// Whose ply it is inside the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    /// Maximizing ply.
    Computer,
    /// Minimizing ply.
    Human,
}

#[derive(Debug, Clone, Copy)]
struct Sides {
    computer: Player,
    human: Player,
}

/// Chooses the computer's move.
///
/// Every legal move is tried and scored assuming the human answers
/// optimally. The highest score wins; ties go to the lowest index.
///
/// # Errors
///
/// Returns [`SearchError::InvalidState`] when the board has no empty cell
/// and [`SearchError::SamePlayer`] when both sides are the same player.
#[instrument(skip(board), fields(empty = board.moves().len()))]
pub fn select_move(board: &Board, computer: Player, human: Player) -> Result<usize, SearchError> {
    let mut best: Option<(usize, i32)> = None;
    for (mv, score) in evaluate(board, computer, human)? {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((mv, score));
        }
    }

    let (mv, score) = best.ok_or(SearchError::InvalidState)?;
    debug!(mv, score, "Selected move");
    Ok(mv)
}

/// Scores every legal move for the computer, in ascending index order.
///
/// Each entry is `(index, score)` where the score is what the computer is
/// guaranteed after playing `index` against a perfect opponent.
///
/// # Errors
///
/// Same conditions as [`select_move`].
#[instrument(skip(board))]
pub fn evaluate(
    board: &Board,
    computer: Player,
    human: Player,
) -> Result<Vec<(usize, i32)>, SearchError> {
    if computer == human {
        return Err(SearchError::SamePlayer(computer));
    }
    let moves = board.moves();
    if moves.is_empty() {
        return Err(SearchError::InvalidState);
    }

    let sides = Sides { computer, human };
    Ok(moves
        .into_iter()
        .map(|mv| {
            let child = board.with_mark(computer, mv);
            (mv, minimax(&child, sides, Turn::Human, 1))
        })
        .collect())
}

/// Scores `board` with `turn` to move, `depth` plies below the root.
fn minimax(board: &Board, sides: Sides, turn: Turn, depth: i32) -> i32 {
    match board.winner() {
        Some(p) if p == sides.computer => return WIN_SCORE - depth,
        Some(_) => return depth - WIN_SCORE,
        None if board.full() => return 0,
        None => {}
    }

    let (player, next) = match turn {
        Turn::Computer => (sides.computer, Turn::Human),
        Turn::Human => (sides.human, Turn::Computer),
    };
    let scores = board
        .moves()
        .into_iter()
        .map(|mv| minimax(&board.with_mark(player, mv), sides, next, depth + 1));

    let best = match turn {
        Turn::Computer => scores.max(),
        Turn::Human => scores.min(),
    };
    // Not full, so at least one move was scored.
    best.unwrap_or(0)
}
