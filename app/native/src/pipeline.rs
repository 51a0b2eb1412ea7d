//! The wallpaper pipeline: hostname, resolution, render, save, apply.
//!
//! Progress is written to a caller-supplied writer as plain console text.
//! Only saving the bitmap (and writing to the console) can fail the run;
//! hostname and resolution lookups fall back to fixed values, and a failed
//! activation is reported with the saved path.

use std::io::Write;
use std::path::PathBuf;

use crate::config::LayoutConfig;
use crate::constants::UNKNOWN_HOSTNAME;
use crate::error::SpyError;
use crate::platform::{Detection, PlatformProvider, ScreenSize, path};
use crate::wallpaper::{Typeface, compose, default_output_path, save_bmp, typeface_for};

/// Inputs of one pipeline run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Layout to render.
    pub config: LayoutConfig,
    /// Hostname to draw instead of the OS hostname.
    pub hostname: Option<String>,
    /// Canvas size to use instead of the detected resolution.
    pub size: Option<ScreenSize>,
    /// Where to write the bitmap instead of the default location.
    pub output: Option<PathBuf>,
    /// Whether to set the result as the desktop background.
    pub apply: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            config: LayoutConfig::DEFAULT,
            hostname: None,
            size: None,
            output: None,
            apply: true,
        }
    }
}

/// What a pipeline run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Hostname drawn on the wallpaper.
    pub hostname: String,
    /// Canvas size.
    pub size: ScreenSize,
    /// Center font size after fitting, when center text is enabled.
    pub center_font_size: Option<u32>,
    /// Absolute path of the saved bitmap.
    pub path: PathBuf,
    /// Whether the desktop background was set.
    pub applied: bool,
}

/// Runs the pipeline with the system typeface.
///
/// # Errors
///
/// Returns an error if the bitmap cannot be written or the console fails.
pub fn generate(
    provider: &dyn PlatformProvider,
    options: &GenerateOptions,
    out: &mut dyn Write,
) -> Result<GenerateReport, SpyError> {
    generate_with(provider, &typeface_for(&options.config), options, out)
}

/// Runs the pipeline with an explicit typeface.
///
/// # Errors
///
/// Returns an error if the bitmap cannot be written or the console fails.
pub fn generate_with(
    provider: &dyn PlatformProvider,
    typeface: &Typeface,
    options: &GenerateOptions,
    out: &mut dyn Write,
) -> Result<GenerateReport, SpyError> {
    let hostname = resolve_hostname(provider, options.hostname.as_deref(), out)?;
    writeln!(out, "\nHostname: {hostname}")?;

    let size = match options.size {
        Some(size) => size
            .validate()
            .map_err(|e| SpyError::InvalidArguments(format!("Invalid wallpaper size: {e}")))?,
        None => {
            let detection = provider.screen_size();
            report_detection(&detection, out)?;
            detection.size
        }
    };
    writeln!(out, "Screen Resolution: {size}")?;

    writeln!(out, "\nGenerating wallpaper image...")?;
    describe_layers(&options.config, &hostname, out)?;

    let config = &options.config;
    let composition = compose(typeface, &hostname, size.width, size.height, config);

    if let Some(fitted) = composition.center_text
        && fitted.size < config.font_size
    {
        writeln!(
            out,
            "Auto-scaled text from {}pt to {}pt to fit screen",
            config.font_size, fitted.size
        )?;
    }

    let target = options.output.clone().unwrap_or_else(default_output_path);
    writeln!(out, "Saving wallpaper to: {}", target.display())?;
    let saved = save_bmp(&composition.canvas, &target)?;

    let applied = options.apply && apply(provider, &saved, out)?;

    Ok(GenerateReport {
        hostname,
        size,
        center_font_size: composition.center_text.map(|fitted| fitted.size),
        path: saved,
        applied,
    })
}

fn resolve_hostname(
    provider: &dyn PlatformProvider,
    requested: Option<&str>,
    out: &mut dyn Write,
) -> Result<String, SpyError> {
    if let Some(name) = requested.map(str::trim).filter(|name| !name.is_empty()) {
        return Ok(name.to_string());
    }

    match provider.hostname() {
        Ok(name) => Ok(name),
        Err(err) => {
            tracing::info!(error = %err, "platform: hostname lookup failed");
            writeln!(out, "Error getting hostname: {err}")?;
            Ok(UNKNOWN_HOSTNAME.to_string())
        }
    }
}

fn report_detection(detection: &Detection, out: &mut dyn Write) -> Result<(), SpyError> {
    for (label, err) in &detection.failures {
        writeln!(out, "Warning: {label} detection failed ({err})")?;
    }

    match detection.source {
        Some(label) => writeln!(out, "Detected resolution ({label}): {}", detection.size)?,
        None => writeln!(
            out,
            "Warning: Could not detect screen resolution. Using fallback {}.",
            detection.size
        )?,
    }

    Ok(())
}

fn describe_layers(config: &LayoutConfig, hostname: &str, out: &mut dyn Write) -> Result<(), SpyError> {
    if config.show_grid {
        writeln!(out, "Drawing grid with {}px spacing...", config.grid_spacing)?;
    }
    if config.show_circle {
        writeln!(out, "Drawing aspect ratio circle...")?;
    }
    if config.show_border {
        writeln!(out, "Drawing {}px border...", config.border_width)?;
    }
    if config.shows_text() {
        writeln!(out, "Drawing hostname: {hostname}")?;
    }
    Ok(())
}

/// Sets the wallpaper, reporting a failure instead of returning it.
fn apply(
    provider: &dyn PlatformProvider,
    saved: &std::path::Path,
    out: &mut dyn Write,
) -> Result<bool, SpyError> {
    writeln!(out, "Setting desktop wallpaper...")?;

    match provider.apply_wallpaper(saved) {
        Ok(()) => {
            writeln!(out, "Desktop wallpaper set successfully!")?;
            Ok(true)
        }
        Err(err) => {
            tracing::info!(error = %err, "platform: setting wallpaper failed");
            writeln!(out, "Error setting wallpaper: {err}")?;
            writeln!(
                out,
                "You can manually set the wallpaper from: {}",
                path::absolute(saved).display()
            )?;
            Ok(false)
        }
    }
}
