//! Error types for the gameplan crate

use thiserror::Error;

/// Main error type for the gameplan crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: square ({row}, {col}) is occupied or off the board")]
    InvalidMove { row: usize, col: usize },

    #[error("no valid moves available on an unfinished board")]
    NoValidMoves,

    #[error("board string has {got} cells, expected a square count in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (counts may differ by at most 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid board '{context}': both players cannot have winning lines")]
    MultipleWinners { context: String },

    #[error("invalid player '{player}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String },

    #[error("score grid is {grid}x{grid} but the board is {board}x{board}")]
    DimensionMismatch { grid: usize, board: usize },

    #[error("weight {value} must be non-negative and finite")]
    InvalidWeight { value: f64 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("cannot score an empty hand")]
    EmptyHand,

    #[error("a die needs at least one side")]
    InvalidDieSides,

    #[error("die face {face} is outside 1..={sides}")]
    InvalidDieFace { face: u32, sides: u32 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to start logger: {message}")]
    Logging { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
