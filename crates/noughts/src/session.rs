//! One human against the engine, game after game.
//!
//! The session applies the human's click, asks the engine for its reply,
//! and reports when the game ends. Clearing the finished board is deferred:
//! the caller receives a [`ResetTicket`] and hands it to [`schedule_reset`],
//! which sends it back after the display pause. A ticket only resets the
//! game it was issued for, so a late ticket after a manual restart does
//! nothing.

use derive_more::{Display, Error, From};
use noughts_core::{Board, CELLS, Outcome, Player, SearchError, select_move};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

/// Which side each participant plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    human: Player,
    computer: Player,
}

impl Symbols {
    /// Human plays `human`, the computer plays the other side.
    pub fn new(human: Player) -> Self {
        Self {
            human,
            computer: human.opponent(),
        }
    }

    /// Side played by the human.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Side played by the computer.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Swaps the two sides.
    pub fn toggle(&mut self) {
        std::mem::swap(&mut self.human, &mut self.computer);
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new(Player::B)
    }
}

/// Permission to clear one particular finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    generation: u64,
}

/// Why a click was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Rejected {
    /// Index is not a board cell.
    #[display("cell {_0} is off the board")]
    OutOfRange(#[error(not(source))] usize),
    /// Cell already holds a mark.
    #[display("cell {_0} is occupied")]
    Occupied(#[error(not(source))] usize),
    /// The engine is still choosing its reply.
    #[display("computer is thinking")]
    Thinking,
    /// The game has ended and is waiting to be cleared.
    #[display("game is over")]
    GameOver,
}

/// Errors from [`Session::click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum ClickError {
    /// The click was not a legal move right now.
    #[display("Move rejected: {_0}")]
    Rejected(Rejected),
    /// The engine refused the position.
    #[display("Engine failure: {_0}")]
    Search(SearchError),
}

/// Result of an accepted click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Cell the human marked.
    pub human: usize,
    /// Cell the computer marked in reply, if the game was still open.
    pub computer: Option<usize>,
    /// How the game ended, if it did.
    pub outcome: Option<Outcome>,
    /// Present when the game ended; pass to [`schedule_reset`].
    pub reset: Option<ResetTicket>,
}

/// Game state for one human and the engine.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    symbols: Symbols,
    started: bool,
    game_over: bool,
    thinking: bool,
    generation: u64,
}

impl Session {
    /// Creates a session with an empty board.
    #[instrument]
    pub fn new(symbols: Symbols) -> Self {
        Self {
            board: Board::new(),
            symbols,
            started: false,
            game_over: false,
            thinking: false,
            generation: 0,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current side assignment.
    pub fn symbols(&self) -> Symbols {
        self.symbols
    }

    /// Whether the human has moved in this game.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Whether this game has ended.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether the engine is mid-search.
    pub fn thinking(&self) -> bool {
        self.thinking
    }

    /// Outcome of the current game, if decided.
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    /// Plays the human's mark at `index` and the computer's reply.
    ///
    /// # Errors
    ///
    /// [`ClickError::Rejected`] when the cell is off the board or occupied,
    /// the engine is thinking, or the game is over. Nothing changes in that
    /// case.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn click(&mut self, index: usize) -> Result<Turn, ClickError> {
        if index >= CELLS {
            return Err(Rejected::OutOfRange(index).into());
        }
        if !self.board.is_empty_at(index) {
            return Err(Rejected::Occupied(index).into());
        }
        if self.thinking {
            return Err(Rejected::Thinking.into());
        }
        if self.game_over {
            return Err(Rejected::GameOver.into());
        }

        self.started = true;
        self.thinking = true;
        self.board.mark(self.symbols.human, index);
        debug!(index, human = %self.symbols.human, "Human marked");

        let mut computer = None;
        if self.board.outcome().is_none() {
            let reply = select_move(&self.board, self.symbols.computer, self.symbols.human);
            let mv = match reply {
                Ok(mv) => mv,
                Err(e) => {
                    self.thinking = false;
                    return Err(e.into());
                }
            };
            self.board.mark(self.symbols.computer, mv);
            debug!(mv, computer = %self.symbols.computer, "Computer marked");
            computer = Some(mv);
        }

        let outcome = self.board.outcome();
        self.game_over = outcome.is_some();
        self.thinking = false;

        let reset = if self.game_over {
            info!(?outcome, "Game over");
            Some(ResetTicket {
                generation: self.generation,
            })
        } else {
            None
        };

        Ok(Turn {
            human: index,
            computer,
            outcome,
            reset,
        })
    }

    /// Swaps symbols between human and computer.
    ///
    /// Only allowed before the first move of a game; returns whether the
    /// swap happened.
    #[instrument(skip(self))]
    pub fn toggle_symbols(&mut self) -> bool {
        if self.started {
            debug!("Symbol swap ignored mid-game");
            return false;
        }
        self.symbols.toggle();
        debug!(human = %self.symbols.human, "Symbols swapped");
        true
    }

    /// Clears the board if `ticket` belongs to the current, finished game.
    ///
    /// Returns whether the board was cleared.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset(&mut self, ticket: ResetTicket) -> bool {
        if ticket.generation != self.generation || !self.game_over {
            debug!(?ticket, "Stale reset ignored");
            return false;
        }
        self.restart();
        true
    }

    /// Starts a fresh game immediately, invalidating outstanding tickets.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.started = false;
        self.game_over = false;
        self.thinking = false;
        self.generation += 1;
        info!(generation = self.generation, "New game");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Symbols::default())
    }
}

/// Sends `ticket` on `tx` after `delay`.
///
/// A closed receiver is not an error; the session that wanted the reset is
/// already gone.
#[instrument(skip(tx))]
pub fn schedule_reset(
    ticket: ResetTicket,
    delay: Duration,
    tx: mpsc::UnboundedSender<ResetTicket>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(ticket).is_err() {
            debug!("Reset receiver closed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_plays_both_sides() {
        let mut session = Session::default();
        let turn = session.click(0).unwrap();
        assert_eq!(turn.human, 0);
        assert_eq!(turn.computer, Some(4));
        assert_eq!(turn.outcome, None);
        assert_eq!(turn.reset, None);
        assert!(session.started());
        assert!(!session.thinking());
        assert_eq!(session.board().occupied(), vec![0, 4]);
    }

    #[test]
    fn test_occupied_and_out_of_range_rejected() {
        let mut session = Session::default();
        session.click(0).unwrap();
        let before = *session.board();
        assert_eq!(session.click(4), Err(ClickError::Rejected(Rejected::Occupied(4))));
        assert_eq!(session.click(9), Err(ClickError::Rejected(Rejected::OutOfRange(9))));
        assert_eq!(*session.board(), before);
    }

    #[test]
    fn test_toggle_only_before_start() {
        let mut session = Session::default();
        assert!(session.toggle_symbols());
        assert_eq!(session.symbols().human(), Player::A);
        assert_eq!(session.symbols().computer(), Player::B);
        session.click(4).unwrap();
        assert!(!session.toggle_symbols());
        assert_eq!(session.symbols().human(), Player::A);
    }

    #[test]
    fn test_restart_invalidates_ticket() {
        let mut session = Session::default();
        let stale = ResetTicket { generation: 0 };
        session.click(0).unwrap();
        session.restart();
        assert!(!session.started());
        assert!(!session.reset(stale));
    }
}
