//! User interface
//!
//! This module contains CLI parsing and the terminal status output.

pub mod cli;
pub mod color;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use output::OutputSettings;
