//! Events crossing from the core to the renderer.
//!
//! The renderer holds no reference into the core; it reacts to these
//! events (animate a dart, flash a banner) and feeds raw cell selections
//! back in. One event per state transition.

use crate::board::Side;
use crate::cell::Cell;
use crate::rules::Outcome;
use serde::{Deserialize, Serialize};

/// Why a selection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The cell was already played this game.
    AlreadyPlayed,
}

/// A state transition reported to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A dart landed: animate it flying to `cell`.
    MovePlaced {
        /// The cell that was taken.
        cell: Cell,
        /// Whose dart landed.
        side: Side,
    },
    /// A selection was rejected: show transient feedback, game unchanged.
    MoveRejected {
        /// The cell the player aimed at.
        cell: Cell,
        /// Why the selection was refused.
        reason: RejectReason,
    },
    /// The game reached a terminal outcome: show the end banner, then
    /// reset after the presentation delay.
    GameEnded {
        /// How the game ended.
        outcome: Outcome,
    },
}
