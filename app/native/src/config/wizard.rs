//! Interactive configuration wizard.
//!
//! A linear questionnaire over the sections of [`LayoutConfig`]. Each section
//! can be switched off as a whole; its sub-fields are only asked when it is on.

use std::io::{self, BufRead, Write};

use super::prompt::Prompter;
use super::types::LayoutConfig;
use crate::constants::BANNER_WIDTH;

/// How the layout configuration is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Use [`LayoutConfig::DEFAULT`].
    #[default]
    Quick,
    /// Run the advanced wizard.
    Advanced,
}

impl Mode {
    /// Maps the mode menu answer to a mode. Anything other than `2` is quick.
    #[must_use]
    pub fn from_choice(choice: &str) -> Self {
        if choice.trim() == "2" { Self::Advanced } else { Self::Quick }
    }
}

/// Prints the mode menu and reads the choice.
///
/// # Errors
///
/// Returns an error if the console streams fail.
pub fn select_mode<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<Mode> {
    prompter.say("\nSelect mode:")?;
    prompter.say("  [1] Quick (use default settings)")?;
    prompter.say("  [2] Advanced (customize colors and features)")?;

    let answer = prompter.ask("\nEnter choice [1]: ")?;
    Ok(answer.as_deref().map_or(Mode::Quick, Mode::from_choice))
}

/// Builds the layout configuration for `mode`.
///
/// # Errors
///
/// Returns an error if the console streams fail.
pub fn build_config<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    mode: Mode,
) -> io::Result<LayoutConfig> {
    match mode {
        Mode::Quick => {
            prompter.say("\nUsing default configuration...")?;
            Ok(LayoutConfig::DEFAULT)
        }
        Mode::Advanced => configure_advanced(prompter),
    }
}

/// Runs the advanced wizard, starting from the defaults.
///
/// # Errors
///
/// Returns an error if the console streams fail.
pub fn configure_advanced<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> io::Result<LayoutConfig> {
    let defaults = LayoutConfig::DEFAULT;
    let mut config = defaults;
    let rule = "=".repeat(BANNER_WIDTH);

    prompter.say(&format!("\n{rule}"))?;
    prompter.say("ADVANCED CONFIGURATION")?;
    prompter.say(&rule)?;
    prompter.say("\nCustomize your wallpaper settings.")?;
    prompter.say("Press Enter to accept default values shown in [brackets]\n")?;

    prompter.say("--- Background ---")?;
    config.background_color = prompter.ask_color("Background color", defaults.background_color)?;

    prompter.say("\n--- Grid ---")?;
    config.show_grid = prompter.ask_yes_no("Show grid?", true)?;
    if config.show_grid {
        config.grid_color = prompter.ask_color("Grid color", defaults.grid_color)?;
        config.grid_spacing =
            prompter.ask_number("Grid spacing (pixels)", defaults.grid_spacing, 10..=500)?;
    }

    prompter.say("\n--- Aspect Ratio Circle ---")?;
    config.show_circle = prompter.ask_yes_no("Show aspect ratio circle?", true)?;

    prompter.say("\n--- Border ---")?;
    config.show_border = prompter.ask_yes_no("Show border?", true)?;
    if config.show_border {
        config.border_color = prompter.ask_color("Border color", defaults.border_color)?;
        config.border_width =
            prompter.ask_number("Border width (pixels)", defaults.border_width, 1..=20)?;
    }

    prompter.say("\n--- Text ---")?;
    config.show_center_text = prompter.ask_yes_no("Show center hostname text?", true)?;
    if config.show_center_text {
        config.text_color = prompter.ask_color("Center text color", defaults.text_color)?;
        config.font_size = prompter.ask_number("Font size", defaults.font_size, 20..=500)?;
    }

    config.show_corner_text = prompter.ask_yes_no("Show corner hostname labels?", true)?;
    if config.show_corner_text {
        config.corner_text_color =
            prompter.ask_color("Corner text color", defaults.corner_text_color)?;
    }

    prompter.say(&format!("\n{rule}"))?;
    prompter.say("Configuration complete!")?;
    prompter.say(&format!("{rule}\n"))?;

    Ok(config)
}
