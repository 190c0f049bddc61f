//! Random playouts

use rand::Rng;

use crate::{
    Error, Result,
    ports::Board,
    tictactoe::{GameOutcome, Player},
    utils::choose_uniform,
};

/// Play uniformly random moves on `board` until the game ends.
///
/// `player` moves first, then the players alternate. The board is mutated in
/// place and the final outcome is returned. Every iteration fills one empty
/// square, so a `dim x dim` board ends after at most `dim²` moves.
///
/// # Errors
///
/// Returns [`Error::NoValidMoves`] if the board reports no result yet has no
/// empty square left, and propagates move errors from the board.
pub fn simulate_random_game<B, R>(board: &mut B, player: Player, rng: &mut R) -> Result<GameOutcome>
where
    B: Board,
    R: Rng + ?Sized,
{
    let mut to_move = player;
    loop {
        if let Some(outcome) = board.check_win() {
            return Ok(outcome);
        }
        let (row, col) =
            choose_uniform(rng, &board.empty_squares()).ok_or(Error::NoValidMoves)?;
        board.apply_move(row, col, to_move)?;
        to_move = to_move.opponent();
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::tictactoe::{BoardState, Cell};

    #[test]
    fn test_playout_reaches_terminal_state() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut board = BoardState::new(3);
            let outcome = simulate_random_game(&mut board, Player::X, &mut rng).unwrap();
            assert_eq!(board.check_win(), Some(outcome));
        }
    }

    #[test]
    fn test_playout_alternates_players() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let mut board = BoardState::new(3);
            simulate_random_game(&mut board, Player::O, &mut rng).unwrap();
            let (mut x, mut o) = (0, 0);
            for row in 0..3 {
                for col in 0..3 {
                    match board.square(row, col) {
                        Cell::X => x += 1,
                        Cell::O => o += 1,
                        Cell::Empty => {}
                    }
                }
            }
            assert!(o == x || o == x + 1, "O opened, got X={x} O={o}");
        }
    }

    #[test]
    fn test_finished_board_is_left_alone() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = BoardState::from_string("XXX/OO./...").unwrap();
        let before = board.clone();
        let outcome = simulate_random_game(&mut board, Player::O, &mut rng).unwrap();
        assert_eq!(outcome, GameOutcome::Win(Player::X));
        assert_eq!(board, before);
    }

    #[test]
    fn test_single_empty_square_is_filled() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = BoardState::from_string("XOX/XOO/OX.").unwrap();
        let outcome = simulate_random_game(&mut board, Player::X, &mut rng).unwrap();
        assert_eq!(board.square(2, 2), Cell::X);
        assert_eq!(outcome, GameOutcome::Draw);
    }

    /// Board that never reports a result, to exercise the empty-square guard.
    #[derive(Clone)]
    struct EndlessBoard(BoardState);

    impl Board for EndlessBoard {
        fn dim(&self) -> usize {
            self.0.dim()
        }
        fn square(&self, row: usize, col: usize) -> Cell {
            self.0.square(row, col)
        }
        fn empty_squares(&self) -> Vec<(usize, usize)> {
            self.0.empty_squares()
        }
        fn apply_move(&mut self, row: usize, col: usize, player: Player) -> Result<()> {
            self.0.apply_move(row, col, player)
        }
        fn check_win(&self) -> Option<GameOutcome> {
            None
        }
    }

    #[test]
    fn test_inconsistent_board_errors_instead_of_looping() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = EndlessBoard(BoardState::new(2));
        let result = simulate_random_game(&mut board, Player::X, &mut rng);
        assert!(matches!(result, Err(Error::NoValidMoves)));
    }
}
