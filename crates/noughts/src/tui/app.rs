//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::{Outcome, Position};
use ratatui::layout::Rect;
use tracing::{debug, error, instrument};

use super::{input, ui};
use crate::config::Theme;
use crate::glyphs::Glyphs;
use crate::session::{ClickError, ResetTicket, Session, Turn};

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    glyphs: Glyphs,
    theme: Theme,
    cursor: Position,
    status_message: String,
    area: Rect,
    pending_reset: Option<ResetTicket>,
}

impl App {
    /// Creates a new application.
    #[instrument(skip_all)]
    pub fn new(session: Session, glyphs: Glyphs, theme: Theme) -> Self {
        let mut app = Self {
            session,
            glyphs,
            theme,
            cursor: Position::Center,
            status_message: String::new(),
            area: Rect::default(),
            pending_reset: None,
        };
        app.status_message = app.your_move_message();
        app
    }

    /// Gets the game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the glyph table.
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Gets the colour theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Records the terminal area of the last draw, for mouse hit testing.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Takes the reset ticket of a game that just ended, if any.
    pub fn take_pending_reset(&mut self) -> Option<ResetTicket> {
        self.pending_reset.take()
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(key = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.index()),
            KeyCode::Char('s') | KeyCode::Char('S') => self.swap_symbols(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char(c) => {
                if let Some(index) = input::digit_to_index(c) {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.play(index);
                }
            }
            _ => {}
        }
        Action::Continue
    }

    /// Handles a mouse event; a left click on a cell plays there.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(index) = ui::cell_at(self.area, mouse.column, mouse.row) {
            debug!(index, "Cell clicked");
            if let Some(pos) = Position::from_index(index) {
                self.cursor = pos;
            }
            self.play(index);
        }
    }

    /// Applies a deferred reset.
    #[instrument(skip(self))]
    pub fn handle_reset(&mut self, ticket: ResetTicket) {
        if self.session.reset(ticket) {
            self.cursor = Position::Center;
            self.status_message = self.your_move_message();
        }
    }

    fn play(&mut self, index: usize) {
        match self.session.click(index) {
            Ok(turn) => self.after_turn(turn),
            Err(ClickError::Rejected(reason)) => {
                debug!(index, %reason, "Move ignored");
            }
            Err(ClickError::Search(e)) => {
                error!(error = %e, "Engine failed");
                self.status_message = format!("Engine error: {}", e);
            }
        }
    }

    fn after_turn(&mut self, turn: Turn) {
        self.pending_reset = turn.reset;
        let symbols = self.session.symbols();
        self.status_message = match turn.outcome {
            Some(Outcome::Won(player)) if player == symbols.human() => {
                "You win! New game shortly...".to_string()
            }
            Some(Outcome::Won(_)) => "Computer wins! New game shortly...".to_string(),
            Some(Outcome::Draw) => "Draw! New game shortly...".to_string(),
            None => match turn.computer.and_then(Position::from_index) {
                Some(pos) => format!("Computer played {}. Your move.", pos.label()),
                None => self.your_move_message(),
            },
        };
    }

    fn swap_symbols(&mut self) {
        if self.session.toggle_symbols() {
            self.status_message = self.your_move_message();
        }
    }

    fn restart(&mut self) {
        self.session.restart();
        self.pending_reset = None;
        self.cursor = Position::Center;
        self.status_message = self.your_move_message();
    }

    fn your_move_message(&self) -> String {
        let human = self.session.symbols().human();
        if self.session.started() {
            format!("Your move ({}).", self.glyphs.for_player(human))
        } else {
            format!(
                "Your move ({}). Press S to swap symbols.",
                self.glyphs.for_player(human)
            )
        }
    }
}
