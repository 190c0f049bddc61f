//! Board port - the capabilities the Monte Carlo advisor needs from a game board
//!
//! The advisor never inspects a concrete board type. Anything that can report
//! its size, its squares, its empty squares and its winner, accept a move, and
//! produce an independent copy of itself can be advised.

use crate::{
    Result,
    tictactoe::{Cell, GameOutcome, Player},
};

/// Square game board driven by the Monte Carlo advisor.
///
/// `Clone` must produce a deep copy: simulations play out on clones and the
/// original board has to stay untouched.
pub trait Board: Clone {
    /// Side length of the square board.
    fn dim(&self) -> usize;

    /// Contents of the square at `(row, col)`.
    ///
    /// Callers only pass coordinates below [`Board::dim`].
    fn square(&self, row: usize, col: usize) -> Cell;

    /// All currently empty squares as `(row, col)` pairs.
    fn empty_squares(&self) -> Vec<(usize, usize)>;

    /// Place `player`'s piece at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the square is occupied or off the board.
    fn apply_move(&mut self, row: usize, col: usize, player: Player) -> Result<()>;

    /// `None` while the game is in progress, otherwise the winner or a draw.
    fn check_win(&self) -> Option<GameOutcome>;
}
