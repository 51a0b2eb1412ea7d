//! Application icon: a pair of googly eyes on a dark disc.
//!
//! Rendered at every size Windows Explorer asks for and packed into a
//! multi-resolution `.ico`, with a 256px `.png` preview next to it.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, Rgba, RgbaImage};

use crate::error::SpyError;

/// Icon sizes embedded in the `.ico` file.
pub const ICON_SIZES: [u32; 10] = [16, 20, 24, 32, 40, 48, 64, 96, 128, 256];

/// File name of the PNG preview.
pub const ICON_PNG_NAME: &str = "spy_icon.png";

/// File name of the multi-resolution icon.
pub const ICON_ICO_NAME: &str = "spy_icon.ico";

const DISC: Rgba<u8> = Rgba([43, 43, 43, 255]);
const EYE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const PUPIL: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Paths of the written icon files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFiles {
    pub png: PathBuf,
    pub ico: PathBuf,
}

/// Fills the disc inscribed in the inclusive box `left..=right`, `top..=bottom`.
#[allow(clippy::cast_precision_loss)]
fn fill_ellipse(image: &mut RgbaImage, left: i64, top: i64, right: i64, bottom: i64, color: Rgba<u8>) {
    let center_x = (left + right) as f64 / 2.0;
    let center_y = (top + bottom) as f64 / 2.0;
    let radius_x = (right - left) as f64 / 2.0;
    let radius_y = (bottom - top) as f64 / 2.0;

    if radius_x <= 0.0 || radius_y <= 0.0 {
        return;
    }

    for y in top.max(0)..=bottom.min(i64::from(image.height()) - 1) {
        for x in left.max(0)..=right.min(i64::from(image.width()) - 1) {
            let dx = (x as f64 - center_x) / radius_x;
            let dy = (y as f64 - center_y) / radius_y;
            if dx.mul_add(dx, dy * dy) <= 1.0
                && let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y))
            {
                image.put_pixel(x, y, color);
            }
        }
    }
}

/// Fills a disc of `radius` around `(center_x, center_y)`.
fn fill_circle(image: &mut RgbaImage, center_x: i64, center_y: i64, radius: i64, color: Rgba<u8>) {
    fill_ellipse(
        image,
        center_x - radius,
        center_y - radius,
        center_x + radius,
        center_y + radius,
        color,
    );
}

/// Renders the icon as a `size` × `size` image on a transparent background.
#[must_use]
pub fn render_icon(size: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let size = i64::from(size);

    let padding = (size / 25).max(2);
    fill_ellipse(&mut image, padding, padding, size - padding, size - padding, DISC);

    let eye_spacing = size / 4;
    let eye_y = size / 2 - size / 13;
    let left_eye_x = size / 2 - eye_spacing / 2;
    let right_eye_x = size / 2 + eye_spacing / 2;
    let eye_radius = size / 5;

    fill_circle(&mut image, left_eye_x, eye_y, eye_radius, EYE_WHITE);
    fill_circle(&mut image, right_eye_x, eye_y, eye_radius, EYE_WHITE);

    // Pupils look in slightly different directions
    let pupil_radius = eye_radius * 2 / 5;
    let offset_x = eye_radius / 5;
    let offset_y = eye_radius / 3;

    fill_circle(&mut image, left_eye_x + offset_x, eye_y + offset_y, pupil_radius, PUPIL);
    fill_circle(
        &mut image,
        right_eye_x - offset_x / 2,
        eye_y + offset_y / 2,
        pupil_radius,
        PUPIL,
    );

    image
}

fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, SpyError> {
    let mut bytes = Vec::new();
    image.write_with_encoder(PngEncoder::new(&mut bytes))?;
    Ok(bytes)
}

/// Writes `spy_icon.png` (256px) and `spy_icon.ico` (all [`ICON_SIZES`]) into `dir`.
///
/// # Errors
///
/// Returns an error if encoding fails or the files cannot be written.
pub fn write_icons(dir: &Path) -> Result<IconFiles, SpyError> {
    fs::create_dir_all(dir)?;

    let mut frames = Vec::with_capacity(ICON_SIZES.len());
    let mut largest = None;

    for size in ICON_SIZES {
        let icon = render_icon(size);
        let png = encode_png(&icon)?;
        frames.push(IcoFrame::as_png(&png, size, size, ExtendedColorType::Rgba8)?);
        tracing::debug!(size, "wallpaper: rendered icon frame");
        largest = Some(png);
    }

    let png_path = dir.join(ICON_PNG_NAME);
    fs::write(&png_path, largest.unwrap_or_default())?;

    let ico_path = dir.join(ICON_ICO_NAME);
    let mut writer = BufWriter::new(File::create(&ico_path)?);
    IcoEncoder::new(&mut writer).encode_images(&frames)?;
    writer.flush()?;

    tracing::info!(dir = %dir.display(), "wallpaper: wrote icon files");
    Ok(IconFiles { png: png_path, ico: ico_path })
}
