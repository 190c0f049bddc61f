//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{GameOutcome, lines::LineAnalyzer, lines::winning_lines};
use crate::ports::Board;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player occupying this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Parse a player token (`x` or `o`, any case).
    ///
    /// # Errors
    ///
    /// Returns error for anything other than a single X or O.
    pub fn parse(token: &str) -> Result<Player, crate::Error> {
        match token.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// Square board of `dim x dim` cells stored row-major.
///
/// Unlike a fixed 3x3 array this owns a `Vec`, so cloning is a deep copy
/// and simulations can mutate their clone freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    dim: usize,
    cells: Vec<Cell>,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// Create an empty `dim x dim` board
    pub fn new(dim: usize) -> Self {
        BoardState {
            dim,
            cells: vec![Cell::Empty; dim * dim],
        }
    }

    /// Create a board from a string of cell characters.
    ///
    /// Whitespace and `/` row separators are ignored. The remaining character
    /// count must be a non-zero perfect square, which fixes the dimension.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The cell count is zero or not a perfect square
    /// - Any character is not a valid cell representation
    /// - The piece counts differ by more than one
    /// - Both players own a complete line
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        let dim = chars.len().isqrt();
        if dim == 0 || dim * dim != chars.len() {
            return Err(crate::Error::InvalidBoardLength {
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let cells = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = Self::count_pieces(&cells);
        if count.x.abs_diff(count.o) > 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let lines = winning_lines(dim);
        if LineAnalyzer::has_won(&cells, &lines, Player::X)
            && LineAnalyzer::has_won(&cells, &lines, Player::O)
        {
            return Err(crate::Error::MultipleWinners {
                context: s.to_string(),
            });
        }

        Ok(BoardState { dim, cells })
    }

    fn count_pieces(cells: &[Cell]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Infer whose turn it is from the piece counts.
    ///
    /// The side with fewer pieces moves; equal counts mean X (X opens).
    pub fn next_player(&self) -> Player {
        let count = Self::count_pieces(&self.cells);
        if count.x > count.o {
            Player::O
        } else {
            Player::X
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        let lines = winning_lines(self.dim);
        if LineAnalyzer::has_won(&self.cells, &lines, Player::X) {
            Some(Player::X)
        } else if LineAnalyzer::has_won(&self.cells, &lines, Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.dim && col < self.dim).then_some(row * self.dim + col)
    }
}

impl Board for BoardState {
    fn dim(&self) -> usize {
        self.dim
    }

    fn square(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.dim + col]
    }

    fn empty_squares(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| (i / self.dim, i % self.dim))
            .collect()
    }

    fn apply_move(&mut self, row: usize, col: usize, player: Player) -> Result<(), crate::Error> {
        match self.index(row, col) {
            Some(idx) if self.cells[idx] == Cell::Empty => {
                self.cells[idx] = player.to_cell();
                Ok(())
            }
            _ => Err(crate::Error::InvalidMove { row, col }),
        }
    }

    fn check_win(&self) -> Option<GameOutcome> {
        if let Some(player) = self.winner() {
            Some(GameOutcome::Win(player))
        } else if !self.cells.contains(&Cell::Empty) {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(self.dim) && i + 1 < self.cells.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
