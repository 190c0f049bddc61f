//! Output formatting for CLI

use crate::monte_carlo::ScoreGrid;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format dice as `(a, b, c)`; the empty hold prints as `()`
pub fn format_dice(dice: &[u32]) -> String {
    let faces: Vec<String> = dice.iter().map(u32::to_string).collect();
    format!("({})", faces.join(", "))
}

/// Print a score grid indented under the current section
pub fn print_grid(grid: &ScoreGrid) {
    for line in grid.to_string().lines() {
        println!("  {line}");
    }
}
