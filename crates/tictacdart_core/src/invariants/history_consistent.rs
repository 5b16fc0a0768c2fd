//! History consistency invariant: play order accounts for every dart.

use super::Invariant;
use crate::controller::TurnController;

/// Invariant: history length equals the number of taken squares.
pub struct HistoryConsistent;

impl Invariant<TurnController> for HistoryConsistent {
    fn holds(game: &TurnController) -> bool {
        game.history().len() == game.board().taken_count()
    }

    fn description() -> &'static str {
        "history length equals the number of taken squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Side, Square};
    use crate::cell::Cell;

    #[test]
    fn test_fresh_game_holds() {
        let game = TurnController::seeded(1);
        assert!(HistoryConsistent::holds(&game));
    }

    #[test]
    fn test_rejected_selection_keeps_consistency() {
        let mut game = TurnController::seeded(1);
        game.submit_player_move(Cell::Center).expect("player turn");
        game.computer_move().expect("computer turn");
        game.submit_player_move(Cell::Center).expect("player turn");
        assert!(HistoryConsistent::holds(&game));
    }

    #[test]
    fn test_untracked_square_violates() {
        let mut game = TurnController::seeded(1);
        game.board.set(Cell::TopLeft, Square::Taken(Side::Player));
        assert!(!HistoryConsistent::holds(&game));
    }
}
