//! Noughts - terminal tic-tac-toe against an unbeatable opponent.
//!
//! The engine lives in [`noughts_core`]; this crate wraps it in everything a
//! playable game needs.
//!
//! # Architecture
//!
//! - **Session**: the human/computer turn loop with deferred board reset
//! - **Glyphs**: mapping from abstract players to display symbols
//! - **Render**: plain text and HTML board output
//! - **TUI**: ratatui front end with keyboard and mouse input
//! - **Config**: TOML settings with command-line overrides
//!
//! # Example
//!
//! ```
//! use noughts::{Session, Symbols};
//! use noughts_core::Player;
//!
//! let mut session = Session::new(Symbols::new(Player::B));
//! let turn = session.click(0)?;
//! assert_eq!(turn.computer, Some(4));
//! # Ok::<(), noughts::ClickError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod glyphs;
pub mod render;
mod session;
pub mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, GlyphConfig, Theme, ThemeConfig};

// Crate-level exports - Display mapping
pub use glyphs::{Glyphs, escape_html, sanitize_terminal};

// Crate-level exports - Session management
pub use session::{
    ClickError, Rejected, ResetTicket, Session, Symbols, Turn, schedule_reset,
};
