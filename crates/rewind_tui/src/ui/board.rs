//! Tic-tac-toe board rendering.

use super::layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use rewind_tictactoe::{GameSession, Mark, Position, Square};

/// What a single cell needs to draw itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Board index of the cell.
    pub index: usize,
    /// Contents of the cell.
    pub square: Square,
    /// Part of the winning line.
    pub highlight: bool,
    /// Under the keyboard cursor.
    pub cursor: bool,
    /// Show the digit shortcut when empty.
    pub key_hint: bool,
}

impl CellView {
    /// Text shown in the middle row of the cell.
    pub fn symbol(&self) -> String {
        match self.square {
            Square::Occupied(mark) => mark.to_string(),
            Square::Empty if self.key_hint => (self.index + 1).to_string(),
            Square::Empty => String::new(),
        }
    }

    /// Style for the whole cell area.
    pub fn style(&self) -> Style {
        let base = match self.square {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            Square::Occupied(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };

        let base = if self.highlight {
            base.bg(Color::Yellow).fg(Color::Black)
        } else {
            base
        };

        if self.cursor {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

/// Renders the displayed board of `session`: nine cells plus grid lines.
pub fn render_board(
    frame: &mut Frame,
    layout: &ScreenLayout,
    session: &GameSession,
    cursor: Option<Position>,
    key_hints: bool,
) {
    render_grid(frame, layout.board);

    let board = session.board();
    for (index, area) in layout.cells.iter().enumerate() {
        let view = CellView {
            index,
            square: board.squares()[index],
            highlight: session.is_highlighted(index),
            cursor: cursor.is_some_and(|c| c.to_index() == index),
            key_hint: key_hints,
        };
        render_cell(frame, *area, &view);
    }
}

/// Renders one cell with its mark centred vertically.
pub fn render_cell(frame: &mut Frame, area: Rect, view: &CellView) {
    let lines = vec![Line::default(), Line::from(view.symbol()), Line::default()];
    let paragraph = Paragraph::new(lines)
        .style(view.style())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_grid(frame: &mut Frame, board: Rect) {
    let style = Style::default().fg(Color::DarkGray);
    let segment = "─".repeat(CELL_WIDTH as usize);
    let horizontal = format!("{segment}┼{segment}┼{segment}");

    for sep in 1..3u16 {
        let y = board.y + sep * (CELL_HEIGHT + 1) - 1;
        let area = Rect::new(board.x, y, board.width, 1).intersection(board);
        frame.render_widget(Paragraph::new(horizontal.as_str()).style(style), area);
    }

    for sep in 1..3u16 {
        let x = board.x + sep * (CELL_WIDTH + 1) - 1;
        for band in 0..3u16 {
            let y = board.y + band * (CELL_HEIGHT + 1);
            let area = Rect::new(x, y, 1, CELL_HEIGHT).intersection(board);
            let bars = vec![Line::from("│"); CELL_HEIGHT as usize];
            frame.render_widget(Paragraph::new(bars).style(style), area);
        }
    }
}
