//! Drives games through the core the way the WebGL front-end does:
//! clicks go in, events come out, with the original's pacing delays.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tictacdart_core::{GameEvent, Outcome, Phase, Side, TurnController};
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Presentation delays, matching the browser front-end's tween timings.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    /// Pause before the computer's dart is thrown.
    pub move_delay: Duration,
    /// Pause between the end banner and the board reset.
    pub reset_delay: Duration,
}

/// Outcomes across a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games the player won.
    pub player_wins: u32,
    /// Games the computer won.
    pub computer_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Side::Player) => self.player_wins += 1,
            Outcome::Winner(Side::Computer) => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Orchestrates a session of games between the simulated clicker and the
/// core's computer opponent.
pub struct Orchestrator {
    controller: TurnController,
    clicker: StdRng,
    pacing: Pacing,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates an orchestrator. With a seed, both the clicker and the
    /// computer replay identically.
    pub fn new(seed: Option<u64>, pacing: Pacing, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        let (controller, clicker) = match seed {
            Some(seed) => (
                TurnController::seeded(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (TurnController::new(), StdRng::from_os_rng()),
        };
        Self {
            controller,
            clicker,
            pacing,
            event_tx,
        }
    }

    /// Plays the requested number of games, resetting between them.
    #[instrument(skip(self))]
    pub async fn run(&mut self, games: u32) -> Result<Tally> {
        let mut tally = Tally::default();

        for game in 1..=games {
            info!(game, "starting game");
            let outcome = self.play_one().await?;
            tally.record(outcome);
            debug!("final board:\n{}", self.controller.board().display());

            // The front-end leaves the banner up before clearing darts.
            sleep(self.pacing.reset_delay).await;
            self.controller.reset();
        }

        Ok(tally)
    }

    /// Plays a single game to its outcome.
    async fn play_one(&mut self) -> Result<Outcome> {
        loop {
            match self.controller.phase() {
                Phase::AwaitingPlayer => {
                    // The naive clicker aims at any of the nine targets;
                    // occupied ones come back as rejections, like a real
                    // click on a played mesh.
                    let id = self.clicker.random_range(1..=9u8);
                    let events = self
                        .controller
                        .on_cell_selected(id)
                        .context("player selection failed")?;
                    self.forward(events)?;
                }
                Phase::AwaitingComputer => {
                    sleep(self.pacing.move_delay).await;
                    let events = self
                        .controller
                        .computer_move()
                        .context("computer move failed")?;
                    self.forward(events)?;
                }
                Phase::GameOver(outcome) => return Ok(outcome),
            }
        }
    }

    fn forward(&self, events: Vec<GameEvent>) -> Result<()> {
        for event in events {
            self.event_tx
                .send(event)
                .context("event consumer went away")?;
        }
        Ok(())
    }
}

/// Renders core events the way the WebGL front-end would: darts landing,
/// transient feedback, end banners.
pub async fn render_events(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) {
    while let Some(event) = event_rx.recv().await {
        match event {
            GameEvent::MovePlaced { cell, side } => info!(%cell, %side, "dart landed"),
            GameEvent::MoveRejected { cell, .. } => info!(%cell, "position played"),
            GameEvent::GameEnded { outcome } => info!(banner = banner_text(outcome), "game ended"),
        }
    }
}

/// The banner the browser front-end floats in front of the camera.
fn banner_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Winner(Side::Player) => "You win!",
        Outcome::Winner(Side::Computer) => "PC wins!",
        Outcome::Draw => "Draw!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_pacing() -> Pacing {
        Pacing {
            move_delay: Duration::ZERO,
            reset_delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn test_session_plays_to_completion() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut orchestrator = Orchestrator::new(Some(5), no_pacing(), tx);

        let tally = orchestrator.run(3).await.expect("session completes");
        assert_eq!(tally.player_wins + tally.computer_wins + tally.draws, 3);

        // Every game ends with a banner.
        let mut banners = 0;
        while let Ok(event) = rx.try_recv() {
            if matches!(event, GameEvent::GameEnded { .. }) {
                banners += 1;
            }
        }
        assert_eq!(banners, 3);
    }

    #[tokio::test]
    async fn test_seeded_sessions_replay_identically() {
        let (tx_a, mut rx_a) = mpsc::unbounded_channel();
        let (tx_b, mut rx_b) = mpsc::unbounded_channel();

        Orchestrator::new(Some(9), no_pacing(), tx_a)
            .run(2)
            .await
            .expect("session completes");
        Orchestrator::new(Some(9), no_pacing(), tx_b)
            .run(2)
            .await
            .expect("session completes");

        loop {
            let (a, b) = (rx_a.try_recv().ok(), rx_b.try_recv().ok());
            assert_eq!(a, b);
            if a.is_none() {
                break;
            }
        }
    }

    #[test]
    fn test_banner_text_matches_front_end() {
        assert_eq!(banner_text(Outcome::Winner(Side::Player)), "You win!");
        assert_eq!(banner_text(Outcome::Winner(Side::Computer)), "PC wins!");
        assert_eq!(banner_text(Outcome::Draw), "Draw!");
    }
}
