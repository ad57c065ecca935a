//! Display mapping from cells to glyphs.
//!
//! The engine only knows [`Player::A`] and [`Player::B`]; this table decides
//! what each side looks like. Glyph values come from user configuration, so
//! they are sanitized before reaching the terminal and escaped before being
//! embedded in markup.

use crate::config::ConfigError;
use noughts_core::{Cell, Player};
use std::borrow::Cow;
use tracing::instrument;
use unicode_width::UnicodeWidthStr;

/// Validated glyph table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    a: String,
    b: String,
    empty: String,
}

impl Glyphs {
    /// Builds a glyph table.
    ///
    /// Control characters are stripped first. Player glyphs must then be
    /// exactly one terminal column wide and distinct; the empty glyph may be
    /// at most one column wide.
    #[instrument]
    pub fn new(a: &str, b: &str, empty: &str) -> Result<Self, ConfigError> {
        let a = sanitize_terminal(a);
        let b = sanitize_terminal(b);
        let empty = sanitize_terminal(empty);

        for (key, glyph) in [("glyphs.a", &a), ("glyphs.b", &b)] {
            if glyph.width() != 1 {
                return Err(ConfigError::new(format!(
                    "{} must be one column wide, got {:?}",
                    key, glyph
                )));
            }
        }
        if a == b {
            return Err(ConfigError::new(format!(
                "glyphs.a and glyphs.b are both {:?}",
                a
            )));
        }
        if empty.width() > 1 {
            return Err(ConfigError::new(format!(
                "glyphs.empty must be at most one column wide, got {:?}",
                empty
            )));
        }

        Ok(Self { a, b, empty })
    }

    /// Glyph for a player's mark.
    pub fn for_player(&self, player: Player) -> &str {
        match player {
            Player::A => &self.a,
            Player::B => &self.b,
        }
    }

    /// Glyph for a cell.
    pub fn for_cell(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty,
            Cell::Marked(player) => self.for_player(player),
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            a: "×".to_string(),
            b: "○".to_string(),
            empty: " ".to_string(),
        }
    }
}

/// Removes control characters, including the ESC that starts terminal
/// escape sequences.
pub fn sanitize_terminal(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_control()).collect()
}

/// Escapes text for inclusion in HTML content or attribute values.
pub fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
