//! Configuration types for Spy.
//!
//! This module provides the value types that describe how the wallpaper is
//! laid out.

pub mod color;
pub mod layout;

// Color types
pub use color::{COLOR_FORMAT_HINT, Color, parse_color};
// Layout types
pub use layout::LayoutConfig;
