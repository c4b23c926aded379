//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use std::rc::Rc;

use super::app::App;
use crate::games::tictactoe::{Labels, Phase, Player, Position, Square};

const HELP: &str = "1-9 / click / arrows + Enter: select   r: restart   q: quit";

/// Renders the board, status line, and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_layout(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let finished = app.controller().engine().phase() == Phase::Finished;
    let status_style = if finished {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Returns the board cell under a screen coordinate, if any.
pub fn cell_at(screen: Rect, column: u16, row: u16) -> Option<Position> {
    let point = ScreenPosition::new(column, row);
    board_layout(screen_layout(screen)[1])
        .cells
        .iter()
        .position(|cell| cell.contains(point))
        .and_then(Position::from_index)
}

fn screen_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area)
}

/// Screen areas of the 3x3 grid.
#[derive(Debug, Default)]
struct BoardLayout {
    /// Cells in index order.
    cells: [Rect; 9],
    row_separators: [Rect; 2],
    col_separators: [Rect; 6],
}

fn board_layout(area: Rect) -> BoardLayout {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let mut layout = BoardLayout {
        row_separators: [rows[1], rows[3]],
        ..BoardLayout::default()
    };
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row_area);

        for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            layout.cells[row * 3 + col] = cell;
        }
        layout.col_separators[row * 2] = cols[1];
        layout.col_separators[row * 2 + 1] = cols[3];
    }
    layout
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let layout = board_layout(area);

    for (pos, cell) in Position::ALL.into_iter().zip(layout.cells) {
        draw_cell(frame, cell, app, pos);
    }
    for sep in layout.row_separators {
        draw_separator(frame, sep);
    }
    for sep in layout.col_separators {
        draw_separator_vertical(frame, sep);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let engine = app.controller().engine();
    let (symbol, base_style) = cell_look(engine.owner_of(pos.to_index()), pos, app.controller().labels());

    let style = if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the mark in the 3-line cell.
    let text = vec![Line::default(), Line::from(Span::styled(symbol, style))];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// Text and style for a cell: its number while empty, the owner's label once claimed.
fn cell_look(square: Square, pos: Position, labels: &Labels) -> (String, Style) {
    match square {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            format!(" {} ", labels.of(player)),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::A => Color::Blue,
        Player::B => Color::Red,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); 3]).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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
    use crate::config::AppConfig;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_numbers() {
        let app = App::new(&AppConfig::default());
        let text = screen_text(&app);
        assert!(text.contains("Player O is on turn!"));
        assert!(text.contains(" 1 "));
        assert!(text.contains(" 9 "));
    }

    #[test]
    fn test_renders_owner_label() {
        let mut app = App::new(&AppConfig::default());
        app.handle_key(KeyCode::Char('1'));
        let text = screen_text(&app);
        assert!(!text.contains(" 1 "));
        assert!(text.contains(" O "));
        assert!(text.contains("Player X is on turn!"));
    }

    #[test]
    fn test_click_lands_on_the_drawn_cell() {
        let screen = Rect::new(0, 0, 60, 20);
        let layout = board_layout(screen_layout(screen)[1]);

        for (pos, cell) in Position::ALL.into_iter().zip(layout.cells) {
            assert_eq!(cell_at(screen, cell.x + 1, cell.y + 1), Some(pos));
        }
    }

    #[test]
    fn test_click_outside_the_grid_hits_nothing() {
        let screen = Rect::new(0, 0, 60, 20);
        let layout = board_layout(screen_layout(screen)[1]);

        assert_eq!(cell_at(screen, 0, 0), None);
        let sep = layout.col_separators[0];
        assert_eq!(cell_at(screen, sep.x, sep.y), None);
    }
}
