//! Typeface loading, text measurement and text drawing.
//!
//! Fonts are looked up in a fixed order of candidate files. When none of them
//! can be read, the built-in bitmap face is used instead; it never fails to
//! load and scales by whole multiples of its glyph size.

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, GlyphId, OutlinedGlyph, Point, PxScale, Rect, ScaleFont, point};
use embedded_graphics::Drawable;
use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point as MaskPoint, Size};
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::text::{Baseline, Text};
use image::{Rgb, RgbImage};

use super::draw::{blend_pixel, put_pixel};

/// Font file names tried relative to the working directory and the user font directory.
const PREFERRED_FONT_NAMES: &[&str] = &["arial.ttf", "arialbd.ttf"];

/// Absolute font files tried after the preferred names.
const SYSTEM_FONT_FILES: &[&str] = &[
    r"C:\Windows\Fonts\arial.ttf",
    r"C:\Windows\Fonts\arialbd.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

/// The bitmap face used when no font file can be loaded.
const BUILTIN_FONT: &MonoFont<'static> = &FONT_10X20;

/// Pixel extent of the rendered bounding box of a string.
///
/// Outline fonts report the union of the glyph ink bounds; the bitmap face
/// reports its whole character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A loaded face, able to measure and draw text at any size.
pub enum Typeface {
    /// A TrueType/OpenType font read from disk.
    Outline {
        /// Parsed font data.
        font: FontVec,
        /// File the font was read from.
        source: PathBuf,
    },
    /// The built-in bitmap face.
    Builtin,
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outline { source, .. } => f.debug_tuple("Outline").field(source).finish(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

/// Returns the ordered list of font files to try.
#[must_use]
pub fn font_candidates() -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = PREFERRED_FONT_NAMES.iter().map(PathBuf::from).collect();

    if let Some(user_fonts) = dirs::font_dir() {
        candidates.extend(PREFERRED_FONT_NAMES.iter().map(|name| user_fonts.join(name)));
    }

    candidates.extend(SYSTEM_FONT_FILES.iter().map(PathBuf::from));
    candidates
}

impl Typeface {
    /// Loads the first usable font from [`font_candidates`], or the built-in face.
    #[must_use]
    pub fn load() -> Self { Self::load_from(&font_candidates()) }

    /// Loads the first usable font from `candidates`, or the built-in face.
    #[must_use]
    pub fn load_from(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            match read_font(path) {
                Some(font) => {
                    tracing::debug!(path = %path.display(), "wallpaper: loaded font");
                    return Self::Outline { font, source: path.clone() };
                }
                None => tracing::trace!(path = %path.display(), "wallpaper: font unavailable"),
            }
        }

        tracing::warn!("wallpaper: no font file could be loaded, using built-in bitmap font");
        Self::Builtin
    }

    /// Returns the built-in bitmap face.
    #[must_use]
    pub const fn builtin() -> Self { Self::Builtin }

    /// Returns the file the face was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        match self {
            Self::Outline { source, .. } => Some(source),
            Self::Builtin => None,
        }
    }

    /// Measures `text` at `size` points.
    #[must_use]
    pub fn measure(&self, text: &str, size: u32) -> TextSize {
        match self {
            Self::Outline { font, .. } => layout_outline(font, text, size).extent,
            Self::Builtin => measure_builtin(text, size),
        }
    }

    /// Draws `text` with the top-left corner of its measured box at `(x, y)`.
    pub fn draw(&self, canvas: &mut RgbImage, text: &str, size: u32, x: i64, y: i64, color: Rgb<u8>) {
        match self {
            Self::Outline { font, .. } => draw_outline(canvas, font, text, size, x, y, color),
            Self::Builtin => draw_builtin(canvas, text, size, x, y, color),
        }
    }
}

fn read_font(path: &Path) -> Option<FontVec> {
    let bytes = std::fs::read(path).ok()?;
    FontVec::try_from_vec(bytes).ok()
}

// ============================================================================
// Outline fonts
// ============================================================================

/// Converts a point size (em height) into the pixel scale `ab_glyph` expects.
#[allow(clippy::cast_precision_loss)]
fn px_scale(font: &FontVec, size: u32) -> PxScale {
    let units_per_em = font.units_per_em().unwrap_or(1000.0);
    PxScale::from(size as f32 * font.height_unscaled() / units_per_em)
}

/// Glyphs of a string, outlined and positioned relative to their ink box.
struct OutlineLayout {
    glyphs: Vec<OutlinedGlyph>,
    /// Top-left corner of the union of the glyph pixel bounds.
    origin: Point,
    extent: TextSize,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn layout_outline(font: &FontVec, text: &str, size: u32) -> OutlineLayout {
    let scale = px_scale(font, size);
    let scaled = font.as_scaled(scale);

    let mut glyphs = Vec::with_capacity(text.len());
    let mut caret = 0.0_f32;
    let mut previous: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(previous) = previous {
            caret += scaled.kern(previous, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        previous = Some(id);

        // Whitespace has no outline and does not widen the ink box
        if let Some(outlined) = font.outline_glyph(glyph) {
            glyphs.push(outlined);
        }
    }

    let Some(bounds) = glyphs.iter().map(OutlinedGlyph::px_bounds).reduce(|acc, b| Rect {
        min: point(acc.min.x.min(b.min.x), acc.min.y.min(b.min.y)),
        max: point(acc.max.x.max(b.max.x), acc.max.y.max(b.max.y)),
    }) else {
        return OutlineLayout {
            glyphs,
            origin: point(0.0, 0.0),
            extent: TextSize::default(),
        };
    };

    OutlineLayout {
        glyphs,
        origin: bounds.min,
        extent: TextSize {
            width: bounds.width().ceil().max(0.0) as u32,
            height: bounds.height().ceil().max(0.0) as u32,
        },
    }
}

/// Draws the ink box of `text` with its top-left corner at `(x, y)`.
#[allow(clippy::cast_possible_truncation)]
fn draw_outline(
    canvas: &mut RgbImage,
    font: &FontVec,
    text: &str,
    size: u32,
    x: i64,
    y: i64,
    color: Rgb<u8>,
) {
    let layout = layout_outline(font, text, size);

    for outlined in &layout.glyphs {
        let bounds = outlined.px_bounds();
        let left = x + (bounds.min.x - layout.origin.x) as i64;
        let top = y + (bounds.min.y - layout.origin.y) as i64;

        outlined.draw(|gx, gy, coverage| {
            blend_pixel(canvas, left + i64::from(gx), top + i64::from(gy), color, coverage);
        });
    }
}

// ============================================================================
// Built-in bitmap font
// ============================================================================

/// Whole-number magnification of the bitmap face for a point size.
const fn builtin_magnification(size: u32) -> u32 {
    let factor = size / BUILTIN_FONT.character_size.height;
    if factor == 0 { 1 } else { factor }
}

fn builtin_extent(text: &str) -> (u32, u32) {
    let count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    let advance = BUILTIN_FONT.character_size.width + BUILTIN_FONT.character_spacing;
    (count.saturating_mul(advance), BUILTIN_FONT.character_size.height)
}

fn measure_builtin(text: &str, size: u32) -> TextSize {
    let factor = builtin_magnification(size);
    let (width, height) = builtin_extent(text);
    TextSize {
        width: width.saturating_mul(factor),
        height: height.saturating_mul(factor),
    }
}

/// One-bit render target used to rasterize the bitmap face at 1x.
struct GlyphMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl GlyphMask {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    fn is_set(&self, x: u32, y: u32) -> bool { self.bits[(y * self.width + x) as usize] }
}

impl OriginDimensions for GlyphMask {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

impl DrawTarget for GlyphMask {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(position, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(position.x), u32::try_from(position.y)) else {
                continue;
            };
            if color.is_on() && x < self.width && y < self.height {
                self.bits[(y * self.width + x) as usize] = true;
            }
        }
        Ok(())
    }
}

fn draw_builtin(canvas: &mut RgbImage, text: &str, size: u32, x: i64, y: i64, color: Rgb<u8>) {
    let (width, height) = builtin_extent(text);
    if width == 0 {
        return;
    }

    let mut mask = GlyphMask::new(width, height);
    let style = MonoTextStyle::new(BUILTIN_FONT, BinaryColor::On);
    let _ = Text::with_baseline(text, MaskPoint::zero(), style, Baseline::Top).draw(&mut mask);

    let factor = i64::from(builtin_magnification(size));
    for my in 0..height {
        for mx in 0..width {
            if !mask.is_set(mx, my) {
                continue;
            }
            let left = x + i64::from(mx) * factor;
            let top = y + i64::from(my) * factor;
            for dy in 0..factor {
                for dx in 0..factor {
                    put_pixel(canvas, left + dx, top + dy, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn test_candidates_start_with_arial() {
        let candidates = font_candidates();
        assert_eq!(candidates[0], PathBuf::from("arial.ttf"));
        assert_eq!(candidates[1], PathBuf::from("arialbd.ttf"));
        assert!(candidates.contains(&PathBuf::from(r"C:\Windows\Fonts\arial.ttf")));
    }

    #[test]
    fn test_load_from_missing_files_falls_back_to_builtin() {
        let face = Typeface::load_from(&[PathBuf::from("/nonexistent/font.ttf")]);
        assert!(matches!(face, Typeface::Builtin));
        assert!(face.source().is_none());
    }

    #[test]
    fn test_load_from_invalid_font_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        std::fs::write(&bogus, b"definitely not a font").unwrap();

        let face = Typeface::load_from(&[bogus]);
        assert!(matches!(face, Typeface::Builtin));
    }

    #[test]
    fn test_builtin_magnification() {
        assert_eq!(builtin_magnification(1), 1);
        assert_eq!(builtin_magnification(20), 1);
        assert_eq!(builtin_magnification(60), 3);
        assert_eq!(builtin_magnification(240), 12);
    }

    #[test]
    fn test_builtin_measure_scales_with_size() {
        let face = Typeface::builtin();
        assert_eq!(face.measure("TEST-PC", 20), TextSize { width: 70, height: 20 });
        assert_eq!(face.measure("TEST-PC", 60), TextSize { width: 210, height: 60 });
        assert_eq!(face.measure("TEST-PC", 240), TextSize { width: 840, height: 240 });
    }

    #[test]
    fn test_builtin_measure_empty_text() {
        let face = Typeface::builtin();
        assert_eq!(face.measure("", 60).width, 0);
    }

    #[test]
    fn test_builtin_draw_stays_inside_measured_box() {
        let face = Typeface::builtin();
        let mut canvas = RgbImage::from_pixel(100, 60, BLACK);
        let size = face.measure("HI", 40);
        face.draw(&mut canvas, "HI", 40, 10, 5, WHITE);

        let mut inked = 0;
        for (x, y, pixel) in canvas.enumerate_pixels() {
            if *pixel == WHITE {
                inked += 1;
                assert!(x >= 10 && x < 10 + size.width, "x {x} outside text box");
                assert!(y >= 5 && y < 5 + size.height, "y {y} outside text box");
            }
        }
        assert!(inked > 0, "text should leave ink on the canvas");
    }

    #[test]
    fn test_builtin_draw_clips_off_canvas() {
        let face = Typeface::builtin();
        let mut canvas = RgbImage::from_pixel(10, 10, BLACK);
        face.draw(&mut canvas, "WIDE HOSTNAME", 60, -40, -40, WHITE);
        face.draw(&mut canvas, "WIDE HOSTNAME", 60, 500, 500, WHITE);
        assert_eq!(canvas.dimensions(), (10, 10));
    }

    #[test]
    fn test_outline_draw_fills_measured_box() {
        let face = Typeface::load();
        if matches!(face, Typeface::Builtin) {
            return;
        }

        let size = face.measure("TEST-PC", 60);
        assert!(size.width > 0 && size.height > 0);

        let mut canvas = RgbImage::from_pixel(400, 200, BLACK);
        face.draw(&mut canvas, "TEST-PC", 60, 30, 40, WHITE);

        let inked: Vec<(u32, u32)> =
            canvas.enumerate_pixels().filter(|(_, _, p)| **p != BLACK).map(|(x, y, _)| (x, y)).collect();
        assert!(!inked.is_empty());

        for &(x, y) in &inked {
            assert!(x >= 30 && x < 30 + size.width, "x {x} outside text box");
            assert!(y >= 40 && y < 40 + size.height, "y {y} outside text box");
        }

        // The box is the ink, not the line: no slack for ascent or descent
        let top = inked.iter().map(|&(_, y)| y).min().unwrap_or(0);
        let bottom = inked.iter().map(|&(_, y)| y).max().unwrap_or(0);
        assert!(top <= 42, "ink starts at {top}");
        assert!(bottom + 3 >= 40 + size.height, "ink ends at {bottom}");
    }

    #[test]
    fn test_outline_whitespace_measures_empty() {
        let face = Typeface::load();
        if matches!(face, Typeface::Builtin) {
            return;
        }
        assert_eq!(face.measure("   ", 60), TextSize::default());
        assert_eq!(face.measure("", 60), TextSize::default());
    }

    #[test]
    fn test_typeface_debug() {
        assert_eq!(format!("{:?}", Typeface::builtin()), "Builtin");
    }
}
