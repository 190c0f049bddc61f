//! gameplan CLI - Monte Carlo Tic-Tac-Toe advice and Yahtzee hold planning
//!
//! This CLI provides:
//! - `advise`: recommend a Tic-Tac-Toe move from random playouts
//! - `strategy`: find the Yahtzee hold with the best expected score

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gameplan")]
#[command(version, about = "Monte Carlo and exhaustive-search game planners", long_about = None)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a Tic-Tac-Toe move
    Advise(gameplan::cli::commands::advise::AdviseArgs),

    /// Find the best Yahtzee hold for a hand
    Strategy(gameplan::cli::commands::strategy::StrategyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let spec = if cli.verbose { "gameplan=debug" } else { "warn" };
    let _logger = gameplan::logging::init_logging(spec)?;

    match cli.command {
        Commands::Advise(args) => gameplan::cli::commands::advise::execute(args),
        Commands::Strategy(args) => gameplan::cli::commands::strategy::execute(args),
    }
}
