//! Score grid accumulation for finished playouts

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::ScoreWeights;
use crate::{
    Error, Result,
    ports::Board,
    tictactoe::{GameOutcome, Player},
};

/// `dim x dim` accumulator of Monte Carlo rewards, stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreGrid {
    dim: usize,
    scores: Vec<f64>,
}

impl ScoreGrid {
    /// Create an all-zero grid
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            scores: vec![0.0; dim * dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Score at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.scores[row * self.dim + col]
    }

    /// Add `delta` to the score at `(row, col)`
    pub fn add(&mut self, row: usize, col: usize, delta: f64) {
        self.scores[row * self.dim + col] += delta;
    }

    /// Add every cell of `other` into this grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the grids differ in size.
    pub fn merge(&mut self, other: &ScoreGrid) -> Result<()> {
        if other.dim != self.dim {
            return Err(Error::DimensionMismatch {
                grid: other.dim,
                board: self.dim,
            });
        }
        for (total, value) in self.scores.iter_mut().zip(&other.scores) {
            *total += value;
        }
        Ok(())
    }

    /// Check whether every cell is zero
    pub fn is_zero(&self) -> bool {
        self.scores.iter().all(|&s| s == 0.0)
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.scores.chunks(self.dim.max(1))
    }
}

impl fmt::Display for ScoreGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|s| format!("{s:>8.1}")).collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Score a finished board into `grid` from `player`'s point of view.
///
/// When `player` won, their squares gain `weights.current` and the
/// opponent's squares lose `weights.other`. When the opponent won, the
/// opponent's squares gain `weights.other` and `player`'s squares lose
/// `weights.current`. Draws, unfinished boards and empty squares leave the
/// grid untouched.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the grid and board differ in size.
pub fn update_scores<B: Board>(
    grid: &mut ScoreGrid,
    board: &B,
    player: Player,
    weights: ScoreWeights,
) -> Result<()> {
    if grid.dim() != board.dim() {
        return Err(Error::DimensionMismatch {
            grid: grid.dim(),
            board: board.dim(),
        });
    }

    let Some(GameOutcome::Win(winner)) = board.check_win() else {
        return Ok(());
    };
    let (winner_weight, loser_weight) = if winner == player {
        (weights.current, weights.other)
    } else {
        (weights.other, weights.current)
    };

    for row in 0..board.dim() {
        for col in 0..board.dim() {
            match board.square(row, col).to_player() {
                Some(owner) if owner == winner => grid.add(row, col, winner_weight),
                Some(_) => grid.add(row, col, -loser_weight),
                None => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::BoardState;

    fn weights(current: f64, other: f64) -> ScoreWeights {
        ScoreWeights { current, other }
    }

    #[test]
    fn test_win_for_advised_player() {
        // XXX
        // OO.
        // ...
        let board = BoardState::from_string("XXX/OO./...").unwrap();
        let mut grid = ScoreGrid::new(3);
        update_scores(&mut grid, &board, Player::X, weights(1.0, 2.0)).unwrap();

        for col in 0..3 {
            assert_eq!(grid.get(0, col), 1.0);
        }
        assert_eq!(grid.get(1, 0), -2.0);
        assert_eq!(grid.get(1, 1), -2.0);
        assert_eq!(grid.get(1, 2), 0.0);
        for col in 0..3 {
            assert_eq!(grid.get(2, col), 0.0);
        }
    }

    #[test]
    fn test_win_for_opponent() {
        let board = BoardState::from_string("XXX/OO./...").unwrap();
        let mut grid = ScoreGrid::new(3);
        update_scores(&mut grid, &board, Player::O, weights(1.0, 2.0)).unwrap();

        // X (the opponent) won: X squares gain `other`, O squares lose `current`.
        assert_eq!(grid.get(0, 0), 2.0);
        assert_eq!(grid.get(1, 0), -1.0);
        assert_eq!(grid.get(1, 2), 0.0);
    }

    #[test]
    fn test_draw_changes_nothing() {
        let board = BoardState::from_string("XOX/XOO/OXX").unwrap();
        let mut grid = ScoreGrid::new(3);
        update_scores(&mut grid, &board, Player::X, ScoreWeights::default()).unwrap();
        assert!(grid.is_zero());
    }

    #[test]
    fn test_unfinished_board_changes_nothing() {
        let board = BoardState::from_string("X...O....").unwrap();
        let mut grid = ScoreGrid::new(3);
        update_scores(&mut grid, &board, Player::X, ScoreWeights::default()).unwrap();
        assert!(grid.is_zero());
    }

    #[test]
    fn test_scores_accumulate() {
        let board = BoardState::from_string("XXX/OO./...").unwrap();
        let mut grid = ScoreGrid::new(3);
        for _ in 0..3 {
            update_scores(&mut grid, &board, Player::X, ScoreWeights::default()).unwrap();
        }
        assert_eq!(grid.get(0, 0), 3.0);
        assert_eq!(grid.get(1, 1), -3.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let board = BoardState::new(3);
        let mut grid = ScoreGrid::new(4);
        let result = update_scores(&mut grid, &board, Player::X, ScoreWeights::default());
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch { grid: 4, board: 3 })
        ));
    }

    #[test]
    fn test_merge() {
        let mut a = ScoreGrid::new(2);
        let mut b = ScoreGrid::new(2);
        a.add(0, 0, 1.5);
        b.add(0, 0, 0.5);
        b.add(1, 1, -1.0);
        a.merge(&b).unwrap();
        assert_eq!(a.get(0, 0), 2.0);
        assert_eq!(a.get(1, 1), -1.0);
        assert!(a.merge(&ScoreGrid::new(3)).is_err());
    }

    #[test]
    fn test_rows_and_display() {
        let mut grid = ScoreGrid::new(2);
        grid.add(1, 0, -1.0);
        let rows: Vec<&[f64]> = grid.rows().collect();
        assert_eq!(rows, vec![&[0.0, 0.0][..], &[-1.0, 0.0][..]]);
        assert_eq!(format!("{grid}").lines().count(), 2);
    }
}
