//! Game rules: win lines, draw detection, and board evaluation.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::board::{Board, Side};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// No line is owned and at least one square is empty.
    InProgress,
    /// A side owns a full line.
    Won(Side),
    /// The board is full and no line is owned.
    Draw,
}

impl Verdict {
    /// Returns the terminal outcome, if the game is over.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Verdict::InProgress => None,
            Verdict::Won(side) => Some(Outcome::Winner(side)),
            Verdict::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The given side won.
    Winner(Side),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(*side),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{side} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Evaluates a board position.
///
/// Win beats draw: a full board with an owned line is a win, and the
/// first owned line in the fixed scan order decides the winner.
pub fn evaluate(board: &Board) -> Verdict {
    if let Some(side) = check_winner(board) {
        return Verdict::Won(side);
    }
    if is_full(board) {
        return Verdict::Draw;
    }
    Verdict::InProgress
}
