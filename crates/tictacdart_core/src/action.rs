//! First-class move actions and the turn error taxonomy.

use crate::board::Side;
use crate::cell::{Cell, InvalidCell};
use serde::{Deserialize, Serialize};

/// A dart landing: one side taking one cell.
///
/// Moves are domain events; the controller's history is the ordered
/// sequence of them, insertion order being play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side that threw the dart.
    pub side: Side,
    /// The cell the dart landed on.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, cell: Cell) -> Self {
        Self { side, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.cell)
    }
}

/// Errors surfaced by the turn controller.
///
/// None of these leave any state modified; a failed call is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TurnError {
    /// Cell id from the renderer is outside 1-9. Wiring bug, fail fast.
    #[display("cell id {_0} is outside the board (expected 1-9)")]
    InvalidCell(u8),

    /// A player move arrived while the computer was to move.
    #[display("not the player's turn")]
    NotPlayersTurn,

    /// A computer move was requested while the player was to move.
    #[display("not the computer's turn")]
    NotComputersTurn,

    /// A move arrived after the game reached a terminal outcome.
    #[display("game is already over")]
    GameOver,

    /// The computer was asked to move on a full board. Caller ordering
    /// bug: a draw verdict always intercepts before this can happen.
    #[display("no legal move remains")]
    NoLegalMove,
}

impl std::error::Error for TurnError {}

impl From<InvalidCell> for TurnError {
    fn from(err: InvalidCell) -> Self {
        TurnError::InvalidCell(err.0)
    }
}
