//! Draw detection.

use crate::board::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares taken).
///
/// A full board with no owned line is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::check_winner;
    use super::*;
    use crate::board::Side;
    use crate::cell::Cell;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Cell::Center, Side::Player).expect("empty cell");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_board() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        for (cell, side) in [
            (Cell::TopLeft, Side::Player),
            (Cell::TopCenter, Side::Computer),
            (Cell::TopRight, Side::Player),
            (Cell::MiddleLeft, Side::Computer),
            (Cell::Center, Side::Player),
            (Cell::MiddleRight, Side::Player),
            (Cell::BottomLeft, Side::Computer),
            (Cell::BottomCenter, Side::Player),
            (Cell::BottomRight, Side::Computer),
        ] {
            board.place(cell, side).expect("empty cell");
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // Player owns the left column on an otherwise full board.
        let mut board = Board::new();
        for (cell, side) in [
            (Cell::TopLeft, Side::Player),
            (Cell::TopCenter, Side::Computer),
            (Cell::TopRight, Side::Computer),
            (Cell::MiddleLeft, Side::Player),
            (Cell::Center, Side::Computer),
            (Cell::MiddleRight, Side::Player),
            (Cell::BottomLeft, Side::Player),
            (Cell::BottomCenter, Side::Player),
            (Cell::BottomRight, Side::Computer),
        ] {
            board.place(cell, side).expect("empty cell");
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
