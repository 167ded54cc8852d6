//! Advent CLI library.
//!
//! Terminal styling, log setup and output formatting shared by the
//! `advent-cli` subcommands.

pub mod logging;
pub mod output;
pub mod terminal;
