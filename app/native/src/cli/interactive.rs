//! The interactive console run.
//!
//! Banner, mode menu, optional wizard, then the wallpaper pipeline. When the
//! program was started without arguments (double-clicked), the console is
//! held open until Enter is pressed.

use std::io::{self, BufRead, Write};

use super::output;
use crate::config::{LayoutConfig, Prompter, build_config, select_mode};
use crate::constants::{APP_NAME, APP_VERSION};
use crate::error::SpyError;
use crate::pipeline::{self, GenerateOptions};
use crate::platform::SystemPlatform;

/// Asks for the mode and builds the layout configuration.
///
/// # Errors
///
/// Returns an error if the console streams fail.
pub fn choose_config<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<LayoutConfig, SpyError> {
    let mode = select_mode(prompter)?;
    tracing::debug!(?mode, "selected configuration mode");
    Ok(build_config(prompter, mode)?)
}

/// Runs the interactive session on the process console.
///
/// # Errors
///
/// Returns an error if the wallpaper cannot be saved or the console fails.
pub fn run(pause: bool) -> Result<(), SpyError> {
    output::print_banner(&format!("{APP_NAME} - Machine Identity Wallpaper Generator v{APP_VERSION}"));

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let config = choose_config(&mut prompter)?;

    let options = GenerateOptions { config, ..GenerateOptions::default() };
    let report = pipeline::generate(&SystemPlatform, &options, &mut io::stdout().lock())?;
    output::print_summary(&report);

    if pause {
        prompter.ask("\nPress Enter to exit...")?;
    }

    Ok(())
}
