//! CLI module for Spy.
//!
//! Without a subcommand the interactive session runs; subcommands expose the
//! same pipeline non-interactively plus a few utilities.

mod commands;
pub mod interactive;
mod output;

use clap::Parser;
pub use commands::{Cli, Commands, GenerateArgs};

use crate::error::SpyError;
use crate::logging;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), SpyError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.execute()
}
