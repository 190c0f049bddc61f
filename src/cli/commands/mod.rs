//! Subcommands of the gameplan CLI

pub mod advise;
pub mod strategy;
