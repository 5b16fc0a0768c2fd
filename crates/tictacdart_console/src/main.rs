//! tictacdart console front-end.
//!
//! Stands in for the browser renderer: feeds simulated clicks into the
//! game core, renders the resulting events as log lines, and reproduces
//! the front-end's pacing (the computer "thinks", the end banner lingers
//! before the board resets).

mod cli;
mod orchestrator;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use orchestrator::{Orchestrator, Pacing};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let pacing = Pacing {
        move_delay: Duration::from_millis(cli.move_delay_ms),
        reset_delay: Duration::from_millis(cli.reset_delay_ms),
    };

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(orchestrator::render_events(event_rx));

    let tally = {
        let mut orchestrator = Orchestrator::new(cli.seed, pacing, event_tx);
        orchestrator.run(cli.games).await?
    };

    renderer.await?;
    info!(
        player_wins = tally.player_wins,
        computer_wins = tally.computer_wins,
        draws = tally.draws,
        "session complete"
    );

    Ok(())
}
