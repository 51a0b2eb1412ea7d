//! Application-wide constants.
//!
//! Layout numbers used by the renderer are grouped in [`layout`] so the
//! geometry of the wallpaper can be read in one place.

/// Display name of the application.
pub const APP_NAME: &str = "Spy";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the generated wallpaper, written under the app-data directory.
pub const OUTPUT_FILE_NAME: &str = "hostname_wallpaper.bmp";

/// Hostname drawn when the OS lookup fails.
pub const UNKNOWN_HOSTNAME: &str = "UNKNOWN-PC";

/// Width of the `=` rules framing console banners.
pub const BANNER_WIDTH: usize = 60;

/// Wallpaper geometry.
pub mod layout {
    /// Fraction of the canvas the center text may occupy on each axis.
    pub const TEXT_FIT_RATIO: f64 = 0.90;

    /// Factor applied to the center font size on each shrink step.
    pub const FONT_SHRINK_FACTOR: f64 = 0.9;

    /// Font size at or below which the center text stops shrinking.
    pub const MIN_CENTER_FONT_SIZE: u32 = 20;

    /// Fixed font size of the corner labels.
    pub const CORNER_FONT_SIZE: u32 = 60;

    /// Corner label offset from the top edge.
    pub const CORNER_PADDING_TOP: i64 = 20;

    /// Corner label offset from the left and right edges.
    pub const CORNER_PADDING_SIDE: i64 = 20;

    /// Corner label offset from the bottom edge, leaving room for taskbars.
    pub const CORNER_PADDING_BOTTOM: i64 = 80;

    /// Stroke width of the aspect ratio circle (twice the grid line width).
    pub const CIRCLE_STROKE: u32 = 2;
}
