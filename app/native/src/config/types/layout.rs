//! Wallpaper layout configuration.
//!
//! `LayoutConfig` holds everything the renderer needs besides the hostname and
//! the canvas size. It is built once per run, either as [`LayoutConfig::DEFAULT`]
//! or by the advanced wizard, and is read-only afterwards.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Rendering parameters for the wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct LayoutConfig {
    /// Fill color of the whole canvas.
    pub background_color: Color,

    /// Color of the grid lines and of the aspect ratio circle.
    pub grid_color: Color,

    /// Distance in pixels between grid lines.
    pub grid_spacing: u32,

    /// Color of the frame around the display edges.
    pub border_color: Color,

    /// Thickness of the frame in pixels.
    pub border_width: u32,

    /// Color of the centered hostname.
    pub text_color: Color,

    /// Color of the hostname labels in the four corners.
    pub corner_text_color: Color,

    /// Requested font size of the centered hostname, before auto-scaling.
    pub font_size: u32,

    /// Draw the hostname in the middle of the screen.
    pub show_center_text: bool,

    /// Draw the hostname in each corner.
    pub show_corner_text: bool,

    /// Draw the calibration grid.
    pub show_grid: bool,

    /// Draw the aspect ratio circle.
    pub show_circle: bool,

    /// Draw the border frame.
    pub show_border: bool,
}

impl LayoutConfig {
    /// The static default configuration.
    pub const DEFAULT: Self = Self {
        background_color: Color::new(43, 43, 43),
        grid_color: Color::new(60, 60, 60),
        grid_spacing: 100,
        border_color: Color::new(255, 0, 0),
        border_width: 3,
        text_color: Color::new(255, 255, 255),
        corner_text_color: Color::new(169, 169, 169),
        font_size: 240,
        show_center_text: true,
        show_corner_text: true,
        show_grid: true,
        show_circle: true,
        show_border: true,
    };

    /// Returns whether any text layer is enabled.
    #[must_use]
    pub const fn shows_text(&self) -> bool { self.show_center_text || self.show_corner_text }

    /// Grid spacing clamped to at least one pixel.
    #[must_use]
    pub const fn effective_grid_spacing(&self) -> u32 {
        if self.grid_spacing == 0 { 1 } else { self.grid_spacing }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self { Self::DEFAULT }
}
