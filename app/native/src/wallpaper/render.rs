//! Wallpaper composition.
//!
//! Paints the layers of the wallpaper onto a fresh canvas, in this order:
//! background, grid, aspect ratio circle, border, center text, corner text.
//! Each layer is skipped when its toggle in [`LayoutConfig`] is off.

use image::RgbImage;

use super::draw;
use super::font::{TextSize, Typeface};
use crate::config::LayoutConfig;
use crate::constants::layout::{
    CIRCLE_STROKE, CORNER_FONT_SIZE, CORNER_PADDING_BOTTOM, CORNER_PADDING_SIDE,
    CORNER_PADDING_TOP, FONT_SHRINK_FACTOR, MIN_CENTER_FONT_SIZE, TEXT_FIT_RATIO,
};

/// The raster the wallpaper is composed on.
pub type Canvas = RgbImage;

/// Result of fitting the center text into the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FittedText {
    /// Font size the text is drawn with.
    pub size: u32,
    /// Measured extent at `size`.
    pub extent: TextSize,
}

/// A composed wallpaper together with what the text fitting decided.
#[derive(Debug, Clone)]
pub struct Composition {
    /// The finished canvas.
    pub canvas: Canvas,
    /// Center text fitting result, when center text is enabled.
    pub center_text: Option<FittedText>,
}

/// Picks the typeface for `config`.
///
/// Font files are only read when some text layer is enabled.
#[must_use]
pub fn typeface_for(config: &LayoutConfig) -> Typeface {
    if config.shows_text() { Typeface::load() } else { Typeface::builtin() }
}

/// Renders the wallpaper, loading the typeface from the system fonts.
#[must_use]
pub fn render(hostname: &str, width: u32, height: u32, config: &LayoutConfig) -> Canvas {
    render_with(&typeface_for(config), hostname, width, height, config)
}

/// Renders the wallpaper with an explicit typeface.
#[must_use]
pub fn render_with(
    typeface: &Typeface,
    hostname: &str,
    width: u32,
    height: u32,
    config: &LayoutConfig,
) -> Canvas {
    compose(typeface, hostname, width, height, config).canvas
}

/// Composes every enabled layer onto a new `width` × `height` canvas.
#[must_use]
pub fn compose(
    typeface: &Typeface,
    hostname: &str,
    width: u32,
    height: u32,
    config: &LayoutConfig,
) -> Composition {
    let mut canvas = RgbImage::from_pixel(width, height, config.background_color.to_rgb());

    if config.show_grid {
        tracing::info!(spacing = config.grid_spacing, "wallpaper: drawing grid");
        draw_grid(&mut canvas, config);
    }

    if config.show_circle {
        tracing::info!("wallpaper: drawing aspect ratio circle");
        draw_circle(&mut canvas, config);
    }

    if config.show_border {
        tracing::info!(width = config.border_width, "wallpaper: drawing border");
        draw_border(&mut canvas, config);
    }

    let mut center_text = None;

    if config.show_center_text {
        tracing::info!(hostname, "wallpaper: drawing center text");
        let fitted = fit_center_text(width, height, config.font_size, |size| {
            typeface.measure(hostname, size)
        });

        if fitted.size < config.font_size {
            tracing::info!(
                from = config.font_size,
                to = fitted.size,
                "wallpaper: auto-scaled center text to fit screen"
            );
        }

        let x = (i64::from(width) - i64::from(fitted.extent.width)) / 2;
        let y = (i64::from(height) - i64::from(fitted.extent.height)) / 2;
        typeface.draw(&mut canvas, hostname, fitted.size, x, y, config.text_color.to_rgb());
        center_text = Some(fitted);
    }

    if config.show_corner_text {
        tracing::info!(hostname, "wallpaper: drawing corner labels");
        let extent = typeface.measure(hostname, CORNER_FONT_SIZE);
        let color = config.corner_text_color.to_rgb();
        for (x, y) in corner_positions(width, height, extent) {
            typeface.draw(&mut canvas, hostname, CORNER_FONT_SIZE, x, y, color);
        }
    }

    Composition { canvas, center_text }
}

// ============================================================================
// Geometry
// ============================================================================

/// Coordinates of the grid lines along an axis of `length` pixels.
pub fn grid_lines(length: u32, spacing: u32) -> impl Iterator<Item = u32> {
    (0..length).step_by(spacing.max(1) as usize)
}

/// Radius of the aspect ratio circle.
///
/// Half the shorter side; when the grid is shown it is rounded down to a
/// multiple of the grid spacing so the circle lands on a grid line.
#[must_use]
pub const fn circle_radius(width: u32, height: u32, config: &LayoutConfig) -> u32 {
    let shorter = if width < height { width } else { height };
    let max_radius = shorter / 2;

    if config.show_grid {
        let spacing = config.effective_grid_spacing();
        (max_radius / spacing) * spacing
    } else {
        max_radius
    }
}

/// Shrinks the center font until the text fits in 90% of the canvas.
///
/// `measure` returns the text extent at a given font size. The size is
/// multiplied by 0.9 (truncating) while the text is too wide or too tall and
/// the size is still above the 20pt floor. The size never grows.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn fit_center_text<F>(width: u32, height: u32, font_size: u32, mut measure: F) -> FittedText
where
    F: FnMut(u32) -> TextSize,
{
    let max_width = (f64::from(width) * TEXT_FIT_RATIO) as u32;
    let max_height = (f64::from(height) * TEXT_FIT_RATIO) as u32;

    let mut size = font_size;
    let mut extent = measure(size);

    while (extent.width > max_width || extent.height > max_height) && size > MIN_CENTER_FONT_SIZE {
        size = (f64::from(size) * FONT_SHRINK_FACTOR) as u32;
        extent = measure(size);
    }

    FittedText { size, extent }
}

/// Top-left positions of the corner labels.
///
/// Order: top-left, top-right, bottom-left, bottom-right.
#[must_use]
pub fn corner_positions(width: u32, height: u32, extent: TextSize) -> [(i64, i64); 4] {
    let right = i64::from(width) - i64::from(extent.width) - CORNER_PADDING_SIDE;
    let bottom = i64::from(height) - i64::from(extent.height) - CORNER_PADDING_BOTTOM;

    [
        (CORNER_PADDING_SIDE, CORNER_PADDING_TOP),
        (right, CORNER_PADDING_TOP),
        (CORNER_PADDING_SIDE, bottom),
        (right, bottom),
    ]
}

// ============================================================================
// Layers
// ============================================================================

fn draw_grid(canvas: &mut Canvas, config: &LayoutConfig) {
    let color = config.grid_color.to_rgb();
    let spacing = config.effective_grid_spacing();

    for x in grid_lines(canvas.width(), spacing) {
        draw::vertical_line(canvas, x, color);
    }
    for y in grid_lines(canvas.height(), spacing) {
        draw::horizontal_line(canvas, y, color);
    }
}

fn draw_circle(canvas: &mut Canvas, config: &LayoutConfig) {
    let (width, height) = canvas.dimensions();
    let radius = circle_radius(width, height, config);

    draw::circle_outline(
        canvas,
        i64::from(width / 2),
        i64::from(height / 2),
        radius,
        CIRCLE_STROKE,
        config.grid_color.to_rgb(),
    );
}

fn draw_border(canvas: &mut Canvas, config: &LayoutConfig) {
    let color = config.border_color.to_rgb();
    let right = i64::from(canvas.width()) - 1;
    let bottom = i64::from(canvas.height()) - 1;

    for inset in 0..i64::from(config.border_width) {
        if right - inset < inset || bottom - inset < inset {
            break;
        }
        draw::rect_outline(canvas, inset, inset, right - inset, bottom - inset, color);
    }
}
