//! Game-state and turn-resolution core for a dart-throwing 3D tic-tac-toe.
//!
//! The browser front-end renders a WebGL board and raycasts clicks onto
//! nine target meshes; this crate owns everything behind that surface:
//! the board, move validation, win and draw detection, the computer's
//! uniform-random replies, and the turn/reset state machine. The
//! renderer is a pure collaborator: it feeds cell selections in through
//! [`TurnController::on_cell_selected`] and animates the [`GameEvent`]s
//! that come back. No networking, no persistence.
//!
//! # Example
//!
//! ```
//! use tictacdart_core::{GameEvent, Phase, TurnController};
//!
//! let mut game = TurnController::seeded(7);
//! let events = game.on_cell_selected(5)?;
//! assert!(matches!(events[0], GameEvent::MovePlaced { .. }));
//! assert_eq!(game.phase(), Phase::AwaitingComputer);
//!
//! let events = game.computer_move()?;
//! assert!(matches!(events[0], GameEvent::MovePlaced { .. }));
//! # Ok::<(), tictacdart_core::TurnError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod cell;
mod controller;
mod events;
mod invariants;
mod policy;
mod rules;

pub use action::{Move, TurnError};
pub use board::{Board, CellTaken, Side, Square};
pub use cell::{Cell, InvalidCell};
pub use controller::{Phase, TurnController};
pub use events::{GameEvent, RejectReason};
pub use invariants::{
    AlternatingTurn, GameInvariants, HistoryConsistent, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoard,
};
pub use policy::random_cell;
pub use rules::{check_winner, evaluate, is_full, Outcome, Verdict};
