//! CLI infrastructure for the gameplan toolkit
//!
//! This module provides the one-shot commands for asking the Tic-Tac-Toe
//! advisor for a move and the Yahtzee planner for a hold.

pub mod commands;
pub mod output;
