//! Alternating turn invariant: the player opens, sides alternate.

use super::Invariant;
use crate::board::Side;
use crate::controller::TurnController;

/// Invariant: the history alternates sides, starting with the player.
pub struct AlternatingTurn;

impl Invariant<TurnController> for AlternatingTurn {
    fn holds(game: &TurnController) -> bool {
        let mut expected = Side::Player;
        for mov in game.history() {
            if mov.side != expected {
                return false;
            }
            expected = expected.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "moves alternate sides, starting with the player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn test_fresh_game_holds() {
        let game = TurnController::seeded(1);
        assert!(AlternatingTurn::holds(&game));
    }

    #[test]
    fn test_alternating_game_holds() {
        let mut game = TurnController::seeded(1);
        game.submit_player_move(Cell::Center).expect("player turn");
        game.computer_move().expect("computer turn");
        game.submit_player_move(Cell::TopLeft).expect("player turn");
        assert!(AlternatingTurn::holds(&game));
    }
}
