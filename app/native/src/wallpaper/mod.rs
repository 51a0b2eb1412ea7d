//! Wallpaper rendering and output.
//!
//! - [`render`] composes the layered wallpaper canvas
//! - [`font`] loads a typeface and measures/draws text
//! - [`draw`] holds the raster primitives
//! - [`output`] writes the canvas as a BMP
//! - [`icon`] renders the application icon

pub mod draw;
pub mod font;
pub mod icon;
pub mod output;
pub mod render;

pub use font::{TextSize, Typeface};
pub use icon::{IconFiles, render_icon, write_icons};
pub use output::{default_output_path, save_bmp};
pub use render::{Canvas, Composition, FittedText, compose, render, render_with, typeface_for};
