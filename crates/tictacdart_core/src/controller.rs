//! Turn state machine: move validation, application, and event emission.

use crate::action::{Move, TurnError};
use crate::board::{Board, CellTaken, Side, Square};
use crate::cell::Cell;
use crate::events::{GameEvent, RejectReason};
use crate::invariants::assert_invariants;
use crate::policy;
use crate::rules::{self, Outcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Whose move the controller is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to select a cell.
    AwaitingPlayer,
    /// Waiting for the computer's reply.
    AwaitingComputer,
    /// Terminal: the outcome is decided until the next reset.
    GameOver(Outcome),
}

impl Phase {
    /// True once a terminal outcome is reached.
    pub fn is_game_over(self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}

/// Orchestrates turns: validates and applies moves, evaluates the board
/// after each one, and selects the computer's replies.
///
/// The phase machine is the concurrency model: exactly one of the two
/// sides may mutate the board at any time, and every call completes
/// before the next is accepted. The player always opens; the computer
/// replies. Pacing (the original defers the computer's dart and the
/// post-banner reset) belongs to the renderer, which simply calls
/// [`TurnController::computer_move`] and [`TurnController::reset`] when
/// its delays elapse.
#[derive(Debug)]
pub struct TurnController {
    pub(crate) board: Board,
    history: Vec<Move>,
    phase: Phase,
    rng: StdRng,
}

impl TurnController {
    /// Creates a controller with an OS-seeded rng.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a controller with a deterministic rng, for replays and
    /// tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            phase: Phase::AwaitingPlayer,
            rng,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played this game, in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Handles a raw cell selection from the renderer.
    ///
    /// # Errors
    ///
    /// [`TurnError::InvalidCell`] for ids outside 1-9, plus everything
    /// [`TurnController::submit_player_move`] can return.
    #[instrument(skip(self))]
    pub fn on_cell_selected(&mut self, id: u8) -> Result<Vec<GameEvent>, TurnError> {
        let cell = Cell::from_id(id)?;
        self.submit_player_move(cell)
    }

    /// Submits the player's move.
    ///
    /// Selecting an already-played cell is a user mistake, not an error:
    /// the call succeeds with a [`GameEvent::MoveRejected`] and nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// [`TurnError::NotPlayersTurn`] or [`TurnError::GameOver`] when the
    /// call arrives in the wrong phase.
    #[instrument(skip(self), fields(cell = %cell))]
    pub fn submit_player_move(&mut self, cell: Cell) -> Result<Vec<GameEvent>, TurnError> {
        match self.phase {
            Phase::AwaitingPlayer => {}
            Phase::AwaitingComputer => return Err(TurnError::NotPlayersTurn),
            Phase::GameOver(_) => return Err(TurnError::GameOver),
        }

        if let Err(CellTaken(cell)) = self.board.place(cell, Side::Player) {
            debug!(%cell, "selection rejected, cell already played");
            return Ok(vec![GameEvent::MoveRejected {
                cell,
                reason: RejectReason::AlreadyPlayed,
            }]);
        }

        Ok(self.finish_move(Move::new(Side::Player, cell), Phase::AwaitingComputer))
    }

    /// Plays the computer's reply on a uniformly random empty cell.
    ///
    /// # Errors
    ///
    /// [`TurnError::NotComputersTurn`] or [`TurnError::GameOver`] in the
    /// wrong phase; [`TurnError::NoLegalMove`] if the board is full,
    /// which a draw verdict always intercepts in correct operation.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<Vec<GameEvent>, TurnError> {
        match self.phase {
            Phase::AwaitingComputer => {}
            Phase::AwaitingPlayer => return Err(TurnError::NotComputersTurn),
            Phase::GameOver(_) => return Err(TurnError::GameOver),
        }

        let Some(cell) = policy::random_cell(&self.board, &mut self.rng) else {
            warn!("computer asked to move on a full board");
            return Err(TurnError::NoLegalMove);
        };
        // Sampled from the empty set, so the square is free.
        self.board.set(cell, Square::Taken(Side::Computer));

        Ok(self.finish_move(Move::new(Side::Computer, cell), Phase::AwaitingPlayer))
    }

    /// Starts a fresh game: empty board, empty history, player to move.
    ///
    /// Valid from any phase. The rng is not reseeded.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "resetting the board");
        self.board.reset();
        self.history.clear();
        self.phase = Phase::AwaitingPlayer;
    }

    /// Records a placed move, evaluates the board, and transitions.
    fn finish_move(&mut self, mov: Move, next: Phase) -> Vec<GameEvent> {
        self.history.push(mov);

        let mut events = vec![GameEvent::MovePlaced {
            cell: mov.cell,
            side: mov.side,
        }];

        match rules::evaluate(&self.board).outcome() {
            None => self.phase = next,
            Some(outcome) => {
                self.phase = Phase::GameOver(outcome);
                info!(%outcome, moves = self.history.len(), "game over");
                events.push(GameEvent::GameEnded { outcome });
            }
        }

        assert_invariants(self);
        events
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
