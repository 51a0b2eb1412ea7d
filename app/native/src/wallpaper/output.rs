//! Writing the generated wallpaper to disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::bmp::BmpEncoder;

use super::render::Canvas;
use crate::constants::OUTPUT_FILE_NAME;
use crate::error::SpyError;
use crate::platform::path::absolute;

/// Directory the wallpaper is written to by default.
///
/// The per-user roaming configuration directory (`%APPDATA%` on Windows),
/// then the home directory, then the current directory.
#[must_use]
pub fn default_output_dir() -> PathBuf {
    dirs::config_dir().or_else(dirs::home_dir).unwrap_or_else(|| PathBuf::from("."))
}

/// Default location of the generated wallpaper.
#[must_use]
pub fn default_output_path() -> PathBuf { default_output_dir().join(OUTPUT_FILE_NAME) }

/// Writes `canvas` as an uncompressed 24-bit BMP and returns its absolute path.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub fn save_bmp(canvas: &Canvas, path: &Path) -> Result<PathBuf, SpyError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    canvas.write_with_encoder(BmpEncoder::new(&mut writer))?;
    writer.flush()?;

    let saved = absolute(path);
    tracing::info!(path = %saved.display(), "wallpaper: saved bitmap");
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgb, RgbImage};

    use super::*;

    #[test]
    fn test_default_output_path_file_name() {
        let path = default_output_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("hostname_wallpaper.bmp"));
    }

    #[test]
    fn test_save_bmp_round_trips_size_and_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("wall.bmp");

        let mut canvas = RgbImage::from_pixel(32, 16, Rgb([43, 43, 43]));
        canvas.put_pixel(5, 7, Rgb([255, 0, 0]));

        let saved = save_bmp(&canvas, &target).unwrap();
        assert!(saved.is_absolute());
        assert!(saved.exists());

        let bytes = fs::read(&saved).unwrap();
        assert_eq!(&bytes[..2], b"BM");

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Bmp).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (32, 16));
        assert_eq!(*decoded.get_pixel(5, 7), Rgb([255, 0, 0]));
        assert_eq!(*decoded.get_pixel(0, 0), Rgb([43, 43, 43]));
    }

    #[test]
    fn test_save_bmp_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("wall.bmp");
        fs::write(&target, b"stale").unwrap();

        save_bmp(&RgbImage::new(4, 4), &target).unwrap();
        assert!(fs::metadata(&target).unwrap().len() > 5);
    }

    #[test]
    fn test_save_bmp_into_file_path_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"file").unwrap();

        let result = save_bmp(&RgbImage::new(2, 2), &blocker.join("wall.bmp"));
        assert!(matches!(result, Err(SpyError::IoError(_))));
    }
}
