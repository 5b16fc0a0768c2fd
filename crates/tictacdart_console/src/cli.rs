//! Command-line interface for the console front-end.

use clap::Parser;

/// tictacdart - dart tic-tac-toe against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictacdart")]
#[command(about = "Plays dart tic-tac-toe games against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of games to play before exiting
    #[arg(short, long, default_value = "1")]
    pub games: u32,

    /// Seed for the clicker and the computer (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the computer replies, in milliseconds
    #[arg(long, default_value = "800")]
    pub move_delay_ms: u64,

    /// Pause between the end banner and the board reset, in milliseconds
    #[arg(long, default_value = "2000")]
    pub reset_delay_ms: u64,
}
