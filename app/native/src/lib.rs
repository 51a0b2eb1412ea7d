//! Spy - Machine identity wallpaper generator.
//!
//! Renders the computer's hostname onto a calibration wallpaper (grid, aspect
//! ratio circle and border) at the primary screen's resolution, saves it as a
//! bitmap and sets it as the desktop background.
//!
//! The library exposes each step on its own: [`wallpaper::render`] is a pure
//! function of its inputs, [`platform`] wraps the OS queries behind a trait,
//! and [`pipeline::generate`] ties them together.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod platform;
pub mod wallpaper;

/// Runs the interactive session, as when the program is launched without arguments.
///
/// The console is held open at the end until Enter is pressed.
///
/// # Errors
///
/// Returns an error if the wallpaper cannot be saved or the console fails.
pub fn run() -> Result<(), error::SpyError> {
    logging::init(0);
    cli::interactive::run(true)
}
