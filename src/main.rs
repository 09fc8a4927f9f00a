//! Tic-tac-toe against a minimax opponent
//!
//! Runs the GUI by default; `console` plays in the terminal and `verify`
//! checks the engine against every human strategy.

mod cli;

use std::error::Error;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use tictactoe::ui::TicTacToeApp;
use tictactoe::{console, verify, AIEngine};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let result = match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => run_gui(&cli),
        Command::Console => run_console(&cli),
        Command::Verify => run_verify(),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            error!(%err, "exiting");
            ExitCode::FAILURE
        }
    }
}

fn run_gui(cli: &Cli) -> Result<ExitCode, Box<dyn Error>> {
    let config = cli.game_config();
    info!(ai_delay_ms = cli.ai_delay_ms, "starting GUI");

    eframe::run_native(
        "Tic Tac Toe",
        config.native_options(),
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, config)))),
    )?;
    Ok(ExitCode::SUCCESS)
}

fn run_console(cli: &Cli) -> Result<ExitCode, Box<dyn Error>> {
    let config = cli.game_config();
    info!(ai_delay_ms = cli.ai_delay_ms, "starting console game");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console::run(stdin.lock(), &mut stdout, &config)?;
    Ok(ExitCode::SUCCESS)
}

fn run_verify() -> Result<ExitCode, Box<dyn Error>> {
    let mut engine = AIEngine::new();
    let report = verify::exhaustive_check(&mut engine);

    println!("Games played: {}", report.games);
    println!("  O (engine) wins: {}", report.o_wins);
    println!("  Ties:            {}", report.ties);
    println!("  X (human) wins:  {}", report.x_wins);

    if report.engine_never_loses() {
        println!("Result: PASS - engine never loses");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Result: FAIL - engine lost {} games", report.x_wins);
        Ok(ExitCode::FAILURE)
    }
}
