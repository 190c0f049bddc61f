//! Advise command - Recommend a Tic-Tac-Toe move by Monte Carlo playouts

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{print_grid, print_kv, print_section},
    monte_carlo::{MonteCarloAdvisor, MonteCarloConfig},
    tictactoe::{BoardState, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Recommend a move for the current board")]
pub struct AdviseArgs {
    /// Board cells row by row: X, O and '.' for empty, '/' between rows is allowed
    #[arg(long, short = 'b')]
    pub board: String,

    /// Player to advise (`x` or `o`); inferred from piece counts when omitted
    #[arg(long, short = 'p')]
    pub player: Option<String>,

    /// Number of random playouts
    #[arg(long, short = 't', default_value_t = 100)]
    pub trials: usize,

    /// Weight for squares held by the advised player
    #[arg(long, default_value_t = 1.0)]
    pub score_current: f64,

    /// Weight for squares held by the opponent
    #[arg(long, default_value_t = 1.0)]
    pub score_other: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the aggregated score grid
    #[arg(long)]
    pub show_scores: bool,
}

impl AdviseArgs {
    /// Build the advisor configuration from the flags.
    pub fn config(&self) -> MonteCarloConfig {
        let config = MonteCarloConfig::default()
            .with_trials(self.trials)
            .with_weights(self.score_current, self.score_other);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

pub fn execute(args: AdviseArgs) -> Result<()> {
    let board = BoardState::from_string(&args.board)
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    let player = match &args.player {
        Some(token) => Player::parse(token).context("invalid --player")?,
        None => board.next_player(),
    };

    let config = args.config();
    log::debug!("advising {player:?} with {config:?}");
    let mut advisor = MonteCarloAdvisor::new(config)?;

    print_section("Monte Carlo Advice");
    println!("{board}");
    print_kv("Player", &format!("{player:?}"));
    print_kv("Trials", &advisor.config().trials.to_string());
    if let Some(seed) = advisor.config().seed {
        print_kv("Seed", &seed.to_string());
    }

    let (grid, best) = advisor.advise(&board, player)?;
    if args.show_scores {
        println!("\nScores:");
        print_grid(&grid);
    }

    match best {
        Some((row, col)) => print_kv("Recommended move", &format!("({row}, {col})")),
        None => print_kv("Recommended move", "none (no move available)"),
    }

    Ok(())
}
