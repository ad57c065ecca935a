//! Non-interactive board rendering.

use crate::glyphs::{Glyphs, escape_html};
use noughts_core::{Board, Cell, Player};
use tracing::instrument;

/// Renders the board as a plain text grid.
///
/// Empty cells show their key number (1-9) so the output doubles as a
/// move reference.
#[instrument(skip_all)]
pub fn text(board: &Board, glyphs: &Glyphs) -> String {
    let mut result = String::new();
    for (i, cell) in board.cells().iter().enumerate() {
        if i % 3 == 0 && i > 0 {
            result.push_str("\n---+---+---\n");
        }
        match cell {
            Cell::Empty => result.push_str(&format!(" {} ", i + 1)),
            Cell::Marked(_) => result.push_str(&format!(" {} ", glyphs.for_cell(*cell))),
        }
        if i % 3 < 2 {
            result.push('|');
        }
    }
    result
}

/// CSS class for a player's cells.
///
/// A takes the accent colour and B the warn colour.
pub fn css_class(player: Player) -> &'static str {
    match player {
        Player::A => "accent",
        Player::B => "warn",
    }
}

/// Renders the board as an HTML table with escaped glyphs.
#[instrument(skip_all)]
pub fn html(board: &Board, glyphs: &Glyphs) -> String {
    let mut out = String::from("<table class=\"board\">\n");
    for row in board.cells().chunks(3) {
        out.push_str("  <tr>");
        for cell in row {
            let glyph = escape_html(glyphs.for_cell(*cell));
            match cell {
                Cell::Empty => out.push_str(&format!("<td class=\"empty\">{}</td>", glyph)),
                Cell::Marked(player) => out.push_str(&format!(
                    "<td class=\"{}\">{}</td>",
                    css_class(*player),
                    glyph
                )),
            }
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>");
    out
}
