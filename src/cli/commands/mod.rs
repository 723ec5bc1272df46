//! Command implementations for the climate explorer CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module for better organization and
//! maintainability.

pub mod info;
pub mod rank;
pub mod shared;
pub mod trends;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the climate explorer
///
/// This function dispatches to the appropriate subcommand handler based on
/// CLI args. Each command is implemented in its own module:
/// - `trends`: Per-year temperature series for selected countries
/// - `rank`: Country ranking by average temperature over a window
/// - `info`: Dataset loading and cleaning summary
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Trends(trends_args) => trends::run_trends(trends_args),
        Commands::Rank(rank_args) => rank::run_rank(rank_args),
        Commands::Info(info_args) => info::run_info(info_args),
    }
}
