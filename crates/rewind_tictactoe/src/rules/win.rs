//! Win detection logic for tic-tac-toe.

use super::super::{Board, Square, WinningLine};
use tracing::instrument;

/// The eight lines in evaluation order: rows, columns, diagonals.
pub const LINES: [WinningLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line on the board.
///
/// Lines are scanned in [`LINES`] order, so a board with two completed
/// lines always reports the earlier one.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    let squares = board.squares();
    LINES.into_iter().find(|&[a, b, c]| {
        squares[a] != Square::Empty && squares[a] == squares[b] && squares[a] == squares[c]
    })
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::*;

    fn board_with(mark: Mark, cells: &[usize]) -> Board {
        cells.iter().fold(Board::new(), |board, &i| {
            board.with_mark(Position::ALL[i], mark)
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(mark, &line);
                assert_eq!(check_winner(&board), Some(line));
                assert_eq!(board.squares()[line[0]], Square::Occupied(mark));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(Mark::X, &[0, 1]).with_mark(Position::TopRight, Mark::O);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[0, 4]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column both complete.
        let board = board_with(Mark::X, &[0, 1, 2, 3, 6]);
        assert_eq!(check_winner(&board), Some([0, 1, 2]));
    }

    /// Every line completed by the same mark, in [`LINES`] order.
    fn completed_lines(board: &Board) -> Vec<WinningLine> {
        LINES
            .into_iter()
            .filter(|line| {
                let [a, b, c] = line.map(|i| board.squares()[i]);
                a.mark().is_some() && a == b && b == c
            })
            .collect()
    }

    #[test]
    fn test_every_board_reports_its_first_completed_line() {
        const CELL_STATES: [Square; 3] =
            [Square::Empty, Square::Occupied(Mark::X), Square::Occupied(Mark::O)];

        for code in 0..3usize.pow(9) {
            let mut rest = code;
            let squares = std::array::from_fn(|_| {
                let square = CELL_STATES[rest % 3];
                rest /= 3;
                square
            });
            let board = Board::from_squares(squares);

            let expected = completed_lines(&board).first().copied();
            assert_eq!(check_winner(&board), expected, "board {}", code);
        }
    }
}
