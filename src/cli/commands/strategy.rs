//! Strategy command - Find the best Yahtzee hold for a hand

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{format_dice, print_kv, print_section},
    yahtzee::{Strategy, choose_strategy},
};

#[derive(Parser, Debug)]
#[command(about = "Find the hold that maximizes the expected upper-section score")]
pub struct StrategyArgs {
    /// Dice in the hand, e.g. `2 3 5`
    #[arg(required = true, num_args = 1..)]
    pub dice: Vec<u32>,

    /// Number of sides on each die
    #[arg(long, short = 's', default_value_t = 6)]
    pub sides: u32,

    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Export the result as JSON to a file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: StrategyArgs) -> Result<()> {
    let strategy = choose_strategy(&args.dice, args.sides)
        .with_context(|| format!("could not plan hand {}", format_dice(&args.dice)))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&strategy)?);
    } else {
        print_strategy(&strategy);
    }

    if let Some(path) = &args.export {
        export_strategy(&strategy, path)?;
        println!("\n✓ Strategy exported to: {}", path.display());
    }

    Ok(())
}

fn print_strategy(strategy: &Strategy) {
    print_section("Yahtzee Hold Strategy");
    print_kv("Hand", &format_dice(&strategy.hand));
    print_kv("Die sides", &strategy.num_die_sides.to_string());
    print_kv("Best hold", &format_dice(&strategy.hold));
    print_kv("Expected score", &format!("{:.4}", strategy.expected_score));
    if strategy.tied_holds.len() > 1 {
        let tied: Vec<String> = strategy.tied_holds.iter().map(|h| format_dice(h)).collect();
        print_kv("Tied holds", &tied.join(" "));
    }
}

/// Write `strategy` as pretty JSON to `path`.
pub fn export_strategy(strategy: &Strategy, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create export file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, strategy)
        .with_context(|| format!("failed to write strategy to {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
