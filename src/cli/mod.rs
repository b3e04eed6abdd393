//! CLI module
//!
//! Command-line interface for driving a feed controller.
//!
//! # Commands
//!
//! - `breaking` - Fetch top headlines for a country
//! - `search` - Search articles by query

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
