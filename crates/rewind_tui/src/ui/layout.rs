//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Position as ScreenPosition, Rect};
use ratatui::widgets::Block;
use rewind_tictactoe::Position;

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board width including the two vertical separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Board height including the two horizontal separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Where everything goes on screen for a given terminal area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// The whole board, separators included.
    pub board: Rect,
    /// One rectangle per cell, in index order.
    pub cells: [Rect; 9],
    /// Status box.
    pub status: Rect,
    /// Move-list box, borders included.
    pub moves: Rect,
    /// One single-line rectangle per move-list entry that fits.
    pub move_rows: Vec<Rect>,
    /// History step shown in the first of `move_rows`.
    pub first_move: usize,
    /// Key help line.
    pub footer: Rect,
}

impl ScreenLayout {
    /// Computes the layout for `area` with `moves` visible history entries.
    ///
    /// When the list is taller than its box it scrolls so that step
    /// `current` stays on screen.
    pub fn new(area: Rect, moves: usize, current: usize) -> Self {
        let [title, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);

        let [board_panel, info] =
            Layout::horizontal([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(20)])
                .areas(body);

        let board = center_rect(board_panel, BOARD_WIDTH, BOARD_HEIGHT);
        let cells = std::array::from_fn(|i| {
            let (row, col) = ((i / 3) as u16, (i % 3) as u16);
            Rect::new(
                board.x + col * (CELL_WIDTH + 1),
                board.y + row * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board)
        });

        let [status, moves_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(info);

        let inner = Block::bordered().inner(moves_area);
        let shown = moves.min(inner.height as usize);
        let first_move = (current + 1).saturating_sub(shown).min(moves - shown);
        let move_rows = (0..shown)
            .map(|i| Rect::new(inner.x, inner.y + i as u16, inner.width, 1))
            .collect();

        Self {
            title,
            board,
            cells,
            status,
            moves: moves_area,
            move_rows,
            first_move,
            footer,
        }
    }

    /// The cell under a screen coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        self.cells
            .iter()
            .position(|cell| cell.contains(point))
            .and_then(Position::from_index)
    }

    /// History step of the move-list entry under a screen coordinate.
    pub fn move_at(&self, column: u16, row: u16) -> Option<usize> {
        let point = ScreenPosition::new(column, row);
        self.move_rows
            .iter()
            .position(|r| r.contains(point))
            .map(|i| self.first_move + i)
    }

    /// History steps shown in the move list, top to bottom.
    pub fn shown_moves(&self) -> std::ops::Range<usize> {
        self.first_move..self.first_move + self.move_rows.len()
    }
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::vertical([
        Constraint::Length((area.height.saturating_sub(height)) / 2),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Length((area.width.saturating_sub(width)) / 2),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(moves: usize) -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 80, 24), moves, moves - 1)
    }

    #[test]
    fn test_cells_are_disjoint_and_sized() {
        let layout = layout(1);
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!((a.width, a.height), (CELL_WIDTH, CELL_HEIGHT));
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_cell_hit_testing() {
        let layout = layout(1);
        let center = layout.cells[4];
        assert_eq!(layout.cell_at(center.x + 1, center.y + 1), Some(Position::Center));

        // The separator column between two cells belongs to neither.
        let top_left = layout.cells[0];
        assert_eq!(layout.cell_at(top_left.right(), top_left.y), None);
    }

    #[test]
    fn test_move_rows_follow_history_length() {
        let layout = layout(3);
        assert_eq!(layout.move_rows.len(), 3);
        let second = layout.move_rows[1];
        assert_eq!(layout.move_at(second.x + 2, second.y), Some(1));
        assert_eq!(layout.move_at(second.x, second.y + 2), None);
    }

    #[test]
    fn test_short_list_box_scrolls_to_current_step() {
        // 14 rows leave a 7-row move list.
        let area = Rect::new(0, 0, 80, 14);

        let at_end = ScreenLayout::new(area, 10, 9);
        assert_eq!(at_end.move_rows.len(), 7);
        assert_eq!(at_end.shown_moves(), 3..10);
        let last = at_end.move_rows[6];
        assert_eq!(at_end.move_at(last.x, last.y), Some(9));

        let at_start = ScreenLayout::new(area, 10, 0);
        assert_eq!(at_start.shown_moves(), 0..7);

        let in_middle = ScreenLayout::new(area, 10, 8);
        assert_eq!(in_middle.shown_moves(), 2..9);
    }
}
