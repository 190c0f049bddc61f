//! Configuration for the Monte Carlo advisor.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Per-cell reward weights applied to every finished trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight for squares held by the player being advised
    pub current: f64,
    /// Weight for squares held by the opponent
    pub other: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            current: 1.0,
            other: 1.0,
        }
    }
}

/// Configuration for the Monte Carlo advisor.
///
/// # Examples
///
/// ```
/// use gameplan::monte_carlo::MonteCarloConfig;
///
/// let config = MonteCarloConfig::default()
///     .with_trials(200)
///     .with_weights(1.0, 2.0)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    /// Number of random playouts per recommendation
    pub trials: usize,
    /// Reward weights for finished playouts
    pub weights: ScoreWeights,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Set the number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set the weights for the advised player's squares and the opponent's squares.
    pub fn with_weights(mut self, current: f64, other: f64) -> Self {
        self.weights = ScoreWeights { current, other };
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that both weights are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] naming the first offending weight.
    pub fn validate(&self) -> Result<()> {
        for value in [self.weights.current, self.weights.other] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidWeight { value });
            }
        }
        Ok(())
    }
}

impl Default for MonteCarloConfig {
    /// One trial with unit weights and no seed.
    fn default() -> Self {
        Self {
            trials: 1,
            weights: ScoreWeights::default(),
            seed: None,
        }
    }
}
