//! Move selection from aggregated playouts

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use super::{
    config::MonteCarloConfig,
    scores::{ScoreGrid, update_scores},
    trial::simulate_random_game,
};
use crate::{
    Error, Result,
    ports::Board,
    tictactoe::Player,
    utils::{choose_uniform, max_candidates},
};

/// Run `config.trials` independent playouts from `board` and sum their scores.
///
/// Each trial plays on a fresh clone, so `board` itself is never changed.
/// With zero trials the returned grid is all zeros.
///
/// # Errors
///
/// Propagates errors from the playouts and the scoring step.
pub fn aggregate_trial_scores<B, R>(
    board: &B,
    player: Player,
    config: &MonteCarloConfig,
    rng: &mut R,
) -> Result<ScoreGrid>
where
    B: Board,
    R: Rng + ?Sized,
{
    let mut grid = ScoreGrid::new(board.dim());
    for trial in 0..config.trials {
        let mut playout = board.clone();
        let outcome = simulate_random_game(&mut playout, player, rng)?;
        log::trace!("trial {trial}: {outcome:?}");
        update_scores(&mut grid, &playout, player, config.weights)?;
    }
    Ok(grid)
}

/// Pick the empty square with the highest score.
///
/// All empty squares sharing the maximum are collected and one is chosen
/// uniformly at random. Returns `Ok(None)` when the board has no empty square.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the grid and board sizes differ.
pub fn select_best_move<B, R>(
    board: &B,
    grid: &ScoreGrid,
    rng: &mut R,
) -> Result<Option<(usize, usize)>>
where
    B: Board,
    R: Rng + ?Sized,
{
    if grid.dim() != board.dim() {
        return Err(Error::DimensionMismatch {
            grid: grid.dim(),
            board: board.dim(),
        });
    }
    let scored = board
        .empty_squares()
        .into_iter()
        .map(|(row, col)| ((row, col), grid.get(row, col)));
    let Some((best_score, candidates)) = max_candidates(scored) else {
        return Ok(None);
    };
    log::debug!(
        "best score {best_score} shared by {} square(s): {candidates:?}",
        candidates.len()
    );
    Ok(choose_uniform(rng, &candidates))
}

/// Recommend a move for `player` on `board`.
///
/// Returns `Ok(None)` when the board is full.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a playout fails.
pub fn mc_move<B, R>(
    board: &B,
    player: Player,
    config: &MonteCarloConfig,
    rng: &mut R,
) -> Result<Option<(usize, usize)>>
where
    B: Board,
    R: Rng + ?Sized,
{
    config.validate()?;
    let grid = aggregate_trial_scores(board, player, config, rng)?;
    select_best_move(board, &grid, rng)
}

/// Stateful advisor owning its configuration and random number generator.
///
/// This is the handle a game loop keeps between turns.
pub struct MonteCarloAdvisor {
    config: MonteCarloConfig,
    rng: StdRng,
}

impl MonteCarloAdvisor {
    /// Create an advisor, seeding from `config.seed` when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(random()),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Recommend a move for `player`, or `None` on a full board.
    ///
    /// # Errors
    ///
    /// Propagates playout errors.
    pub fn recommend_move<B: Board>(
        &mut self,
        board: &B,
        player: Player,
    ) -> Result<Option<(usize, usize)>> {
        mc_move(board, player, &self.config, &mut self.rng)
    }

    /// Aggregate one batch of trials and pick the move from that same grid.
    ///
    /// Returns the grid alongside the move so callers can show the scores the
    /// recommendation was made from.
    ///
    /// # Errors
    ///
    /// Propagates playout errors.
    pub fn advise<B: Board>(
        &mut self,
        board: &B,
        player: Player,
    ) -> Result<(ScoreGrid, Option<(usize, usize)>)> {
        let grid = aggregate_trial_scores(board, player, &self.config, &mut self.rng)?;
        let best = select_best_move(board, &grid, &mut self.rng)?;
        Ok((grid, best))
    }

    /// Aggregate a score grid for `player` without choosing a move.
    ///
    /// # Errors
    ///
    /// Propagates playout errors.
    pub fn score_grid<B: Board>(&mut self, board: &B, player: Player) -> Result<ScoreGrid> {
        aggregate_trial_scores(board, player, &self.config, &mut self.rng)
    }
}
