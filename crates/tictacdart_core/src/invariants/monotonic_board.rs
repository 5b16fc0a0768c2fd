//! Monotonic board invariant: squares never change once taken.

use super::Invariant;
use crate::board::Board;
use crate::controller::TurnController;

/// Invariant: board squares are monotonic (never overwritten).
///
/// Once a square transitions from empty to taken it never changes until
/// reset. Verified by replaying the move history and comparing.
pub struct MonotonicBoard;

impl Invariant<TurnController> for MonotonicBoard {
    fn holds(game: &TurnController) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.place(mov.cell, mov.side).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "board squares are monotonic (never overwritten)"
    }
}
