//! Configuration module for Spy.
//!
//! The layout configuration is a plain value: either the static defaults or
//! the result of the interactive wizard. Nothing is read from or written to a
//! configuration file.

pub mod prompt;
pub mod types;
pub mod wizard;

pub use prompt::{Prompter, validate_number, validate_yes_no};
pub use types::{COLOR_FORMAT_HINT, Color, LayoutConfig, parse_color};
pub use wizard::{Mode, build_config, configure_advanced, select_mode};
