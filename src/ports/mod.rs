//! Ports (trait boundaries) between the planners and the games they drive.
//!
//! The Monte Carlo advisor is written against [`Board`] rather than a
//! concrete board type, so any square game that can report its empty squares
//! and its winner can be advised.

pub mod board;

pub use board::Board;
