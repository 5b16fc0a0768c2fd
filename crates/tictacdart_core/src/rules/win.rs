//! Win detection over the eight board lines.

use crate::board::{Board, Side, Square};
use crate::cell::Cell;
use tracing::instrument;

/// Checks if a side owns a full line.
///
/// Lines are scanned in a fixed order (rows, columns, diagonals) and the
/// first fully-owned line decides the result. A legally played game never
/// produces two owned lines for different sides, so the order only
/// matters for malformed boards.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Side> {
    const LINES: [[Cell; 3]; 8] = [
        // Rows
        [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
        [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
        [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
        // Columns
        [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
        [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
        [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
        // Diagonals
        [Cell::TopLeft, Cell::Center, Cell::BottomRight],
        [Cell::TopRight, Cell::Center, Cell::BottomLeft],
    ];

    for [a, b, c] in LINES {
        let sq = board.occupant_at(a);
        if sq != Square::Empty && sq == board.occupant_at(b) && sq == board.occupant_at(c) {
            return match sq {
                Square::Taken(side) => Some(side),
                Square::Empty => None,
            };
        }
    }

    None
}
