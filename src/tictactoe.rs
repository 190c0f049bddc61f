//! Tic-Tac-Toe board implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BoardState, Cell, Player};
pub use game::GameOutcome;
pub use lines::{LineAnalyzer, winning_lines};
