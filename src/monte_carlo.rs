//! Monte Carlo move advisor for Tic-Tac-Toe
//!
//! The advisor plays many uniformly random games from the current position,
//! credits or penalises the squares each side held in every finished game,
//! and recommends the empty square with the best accumulated score.
//!
//! - [`simulate_random_game`] plays one random game to completion
//! - [`update_scores`] scores a finished board into a [`ScoreGrid`]
//! - [`aggregate_trial_scores`] runs the configured number of trials
//! - [`select_best_move`] picks among the best empty squares at random
//! - [`mc_move`] and [`MonteCarloAdvisor`] compose the above

pub mod advisor;
pub mod config;
pub mod scores;
pub mod trial;

pub use advisor::{MonteCarloAdvisor, aggregate_trial_scores, mc_move, select_best_move};
pub use config::{MonteCarloConfig, ScoreWeights};
pub use scores::{ScoreGrid, update_scores};
pub use trial::simulate_random_game;
