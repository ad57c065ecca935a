//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use noughts_core::{CELLS, Cell, Position};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());
    let frame_style = Style::default().fg(app.theme().frame);

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(frame_style));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(frame_style)
                .title(sides_title(app)),
        );
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "Arrows: select | Enter/1-9/click: play | S: swap symbols | R: restart | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(frame_style));
    frame.render_widget(help, chunks[3]);
}

/// Returns the board cell under a terminal coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let point = ScreenPosition::new(column, row);
    cell_areas(area).iter().position(|cell| cell.contains(point))
}

/// Screen rectangles of the nine cells, in board index order.
pub fn cell_areas(area: Rect) -> [Rect; CELLS] {
    let board_area = center_rect(screen_chunks(area)[1], BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); CELLS];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);
        for col in 0..3 {
            cells[row * 3 + col] = cols[col * 2];
        }
    }
    cells
}

fn screen_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Min(BOARD_HEIGHT),     // Board
            Constraint::Length(3),             // Status
            Constraint::Length(3),             // Help
        ])
        .split(area)
}

fn sides_title(app: &App) -> String {
    let symbols = app.session().symbols();
    format!(
        " You {}  Computer {} ",
        app.glyphs().for_player(symbols.human()),
        app.glyphs().for_player(symbols.computer())
    )
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let frame_style = Style::default().fg(app.theme().frame);
    let cells = cell_areas(frame.area());

    for (index, cell_area) in cells.iter().enumerate() {
        draw_cell(frame, *cell_area, app, index);
    }

    // Separators sit in the one-line gaps between cell rectangles.
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    for gap in [cells[0].bottom(), cells[3].bottom()] {
        let line = Rect::new(board_area.x, gap, board_area.width, 1).intersection(area);
        let sep = Paragraph::new("─".repeat(line.width as usize)).style(frame_style);
        frame.render_widget(sep, line);
    }
    for gap in [cells[0].right(), cells[1].right()] {
        let column = Rect::new(gap, board_area.y, 1, board_area.height).intersection(area);
        let bar = Paragraph::new(vec![Line::from("│"); column.height as usize]).style(frame_style);
        frame.render_widget(bar, column);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let cell = app.session().board().get(index).unwrap_or(Cell::Empty);

    let base_style = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Marked(player) => Style::default()
            .fg(app.theme().for_player(player))
            .add_modifier(Modifier::BOLD),
    };
    let style = if Position::from_index(index) == Some(app.cursor()) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let glyph = format!(" {} ", app.glyphs().for_cell(cell));
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(glyph, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_do_not_overlap() {
        let cells = cell_areas(Rect::new(0, 0, 80, 30));
        for (i, a) in cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            for b in &cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_cell_at_finds_each_cell() {
        let area = Rect::new(0, 0, 80, 30);
        for (index, cell) in cell_areas(area).iter().enumerate() {
            assert_eq!(cell_at(area, cell.x + 1, cell.y + 1), Some(index));
        }
        assert_eq!(cell_at(area, 0, 0), None);
    }
}
