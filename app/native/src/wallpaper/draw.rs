//! Raster primitives for the wallpaper canvas.
//!
//! All primitives clip against the canvas, so callers may pass coordinates
//! that fall partly or entirely outside of it.

use image::{Rgb, RgbImage};

/// Sets a pixel if it lies on the canvas.
pub fn put_pixel(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };

    if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
        *pixel = color;
    }
}

/// Blends `color` over a pixel with the given coverage (0.0 = keep, 1.0 = replace).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend_pixel(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };

    let coverage = coverage.clamp(0.0, 1.0);
    if coverage <= 0.0 {
        return;
    }

    if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
        for channel in 0..3 {
            let under = f32::from(pixel[channel]);
            let over = f32::from(color[channel]);
            pixel[channel] = (over - under).mul_add(coverage, under).round() as u8;
        }
    }
}

/// Draws a 1px vertical line spanning the full canvas height.
pub fn vertical_line(canvas: &mut RgbImage, x: u32, color: Rgb<u8>) {
    if x >= canvas.width() {
        return;
    }

    for y in 0..canvas.height() {
        canvas.put_pixel(x, y, color);
    }
}

/// Draws a 1px horizontal line spanning the full canvas width.
pub fn horizontal_line(canvas: &mut RgbImage, y: u32, color: Rgb<u8>) {
    if y >= canvas.height() {
        return;
    }

    for x in 0..canvas.width() {
        canvas.put_pixel(x, y, color);
    }
}

/// Draws a 1px rectangle outline with inclusive corners.
pub fn rect_outline(canvas: &mut RgbImage, left: i64, top: i64, right: i64, bottom: i64, color: Rgb<u8>) {
    for x in left..=right {
        put_pixel(canvas, x, top, color);
        put_pixel(canvas, x, bottom, color);
    }

    for y in top..=bottom {
        put_pixel(canvas, left, y, color);
        put_pixel(canvas, right, y, color);
    }
}

/// Draws a circle outline of `stroke` pixels, grown inward from `radius`.
///
/// A pixel belongs to the outline when its squared distance `d²` from the
/// center satisfies `(radius - stroke)² < d² <= radius²`.
pub fn circle_outline(
    canvas: &mut RgbImage,
    center_x: i64,
    center_y: i64,
    radius: u32,
    stroke: u32,
    color: Rgb<u8>,
) {
    let radius = i64::from(radius);
    let outer = radius * radius;
    let inner = if radius > i64::from(stroke) {
        let inner_radius = radius - i64::from(stroke);
        Some(inner_radius * inner_radius)
    } else {
        None
    };

    let max_x = i64::from(canvas.width()) - 1;
    let max_y = i64::from(canvas.height()) - 1;

    for y in (center_y - radius).max(0)..=(center_y + radius).min(max_y) {
        let dy = y - center_y;
        for x in (center_x - radius).max(0)..=(center_x + radius).min(max_x) {
            let dx = x - center_x;
            let distance = dx * dx + dy * dy;
            if distance <= outer && inner.is_none_or(|inner| distance > inner) {
                put_pixel(canvas, x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn blank(width: u32, height: u32) -> RgbImage { RgbImage::from_pixel(width, height, BLACK) }

    #[test]
    fn test_put_pixel_clips() {
        let mut canvas = blank(4, 4);
        put_pixel(&mut canvas, -1, 0, WHITE);
        put_pixel(&mut canvas, 4, 0, WHITE);
        put_pixel(&mut canvas, 0, 99, WHITE);
        assert!(canvas.pixels().all(|p| *p == BLACK));

        put_pixel(&mut canvas, 3, 3, WHITE);
        assert_eq!(*canvas.get_pixel(3, 3), WHITE);
    }

    #[test]
    fn test_blend_pixel() {
        let mut canvas = blank(1, 1);
        blend_pixel(&mut canvas, 0, 0, WHITE, 0.5);
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([128, 128, 128]));

        blend_pixel(&mut canvas, 0, 0, WHITE, 1.0);
        assert_eq!(*canvas.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn test_blend_pixel_zero_coverage_keeps_pixel() {
        let mut canvas = blank(1, 1);
        blend_pixel(&mut canvas, 0, 0, WHITE, 0.0);
        assert_eq!(*canvas.get_pixel(0, 0), BLACK);
    }

    #[test]
    fn test_lines() {
        let mut canvas = blank(5, 3);
        vertical_line(&mut canvas, 2, WHITE);
        horizontal_line(&mut canvas, 1, WHITE);

        for y in 0..3 {
            assert_eq!(*canvas.get_pixel(2, y), WHITE);
        }
        for x in 0..5 {
            assert_eq!(*canvas.get_pixel(x, 1), WHITE);
        }
        assert_eq!(*canvas.get_pixel(0, 0), BLACK);

        // Out of range lines are ignored
        vertical_line(&mut canvas, 5, WHITE);
        horizontal_line(&mut canvas, 3, WHITE);
    }

    #[test]
    fn test_rect_outline() {
        let mut canvas = blank(6, 6);
        rect_outline(&mut canvas, 1, 1, 4, 4, WHITE);

        assert_eq!(*canvas.get_pixel(1, 1), WHITE);
        assert_eq!(*canvas.get_pixel(4, 1), WHITE);
        assert_eq!(*canvas.get_pixel(1, 4), WHITE);
        assert_eq!(*canvas.get_pixel(4, 4), WHITE);
        assert_eq!(*canvas.get_pixel(2, 2), BLACK);
        assert_eq!(*canvas.get_pixel(0, 0), BLACK);
    }

    #[test]
    fn test_circle_outline_stroke_is_two_pixels_on_axes() {
        let mut canvas = blank(41, 41);
        circle_outline(&mut canvas, 20, 20, 10, 2, WHITE);

        assert_eq!(*canvas.get_pixel(30, 20), WHITE);
        assert_eq!(*canvas.get_pixel(29, 20), WHITE);
        assert_eq!(*canvas.get_pixel(28, 20), BLACK);
        assert_eq!(*canvas.get_pixel(31, 20), BLACK);
        assert_eq!(*canvas.get_pixel(20, 10), WHITE);
        assert_eq!(*canvas.get_pixel(20, 20), BLACK);
    }

    #[test]
    fn test_circle_outline_smaller_than_stroke_is_filled() {
        let mut canvas = blank(5, 5);
        circle_outline(&mut canvas, 2, 2, 1, 2, WHITE);
        assert_eq!(*canvas.get_pixel(2, 2), WHITE);
        assert_eq!(*canvas.get_pixel(3, 2), WHITE);
        assert_eq!(*canvas.get_pixel(3, 3), BLACK);
    }

    #[test]
    fn test_circle_outline_clips_to_canvas() {
        let mut canvas = blank(10, 10);
        circle_outline(&mut canvas, 0, 0, 50, 2, WHITE);
        circle_outline(&mut canvas, 5, 5, 3, 2, WHITE);
        assert_eq!(*canvas.get_pixel(8, 5), WHITE);
    }
}
