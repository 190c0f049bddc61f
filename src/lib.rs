//! Game planners built on exhaustive search and random playouts
//!
//! This crate provides:
//! - A square Tic-Tac-Toe board behind the [`ports::Board`] trait
//! - A Monte Carlo move advisor that scores random playouts
//! - An expected-value hold planner for single-reroll, upper-section Yahtzee
//! - A small CLI over both

pub mod cli;
pub mod error;
pub mod logging;
pub mod monte_carlo;
pub mod ports;
pub mod tictactoe;
pub mod utils;
pub mod yahtzee;

pub use error::{Error, Result};
pub use monte_carlo::{MonteCarloAdvisor, MonteCarloConfig, ScoreGrid, mc_move};
pub use ports::Board;
pub use tictactoe::{BoardState, Cell, GameOutcome, Player};
pub use yahtzee::{Strategy, choose_strategy};
