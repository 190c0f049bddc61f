//! Winning line analysis for square Tic-Tac-Toe boards

use super::{Cell, Player};

/// Generate every winning line of a `dim x dim` board as flat cell indices.
///
/// Rows come first, then columns, then the main and anti diagonals, so a
/// 3x3 board yields the classic eight lines. A zero-sized board has none.
pub fn winning_lines(dim: usize) -> Vec<Vec<usize>> {
    if dim == 0 {
        return Vec::new();
    }
    let mut lines = Vec::with_capacity(2 * dim + 2);
    for row in 0..dim {
        lines.push((0..dim).map(|col| row * dim + col).collect());
    }
    for col in 0..dim {
        lines.push((0..dim).map(|row| row * dim + col).collect());
    }
    lines.push((0..dim).map(|i| i * dim + i).collect());
    lines.push((0..dim).map(|i| i * dim + (dim - 1 - i)).collect());
    lines
}

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player owns every cell of at least one line
    pub fn has_won(cells: &[Cell], lines: &[Vec<usize>], player: Player) -> bool {
        let target = player.to_cell();
        lines
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }
}
