//! Command-line interface for the tic-tac-toe binary.

use clap::{Parser, Subcommand};

use tictactoe::config::{GameConfig, DEFAULT_AI_DELAY_MS};

/// Tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against an unbeatable minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Pause before the computer's reply, in milliseconds
    #[arg(long, default_value_t = DEFAULT_AI_DELAY_MS, global = true)]
    pub ai_delay_ms: u64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Subcommand to run (defaults to the GUI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in a window
    Gui,

    /// Play in the terminal
    Console,

    /// Play every possible human strategy against the engine and report
    Verify,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::default().with_ai_delay_ms(self.ai_delay_ms)
    }
}
