//! OS integration for Spy.
//!
//! Everything the wallpaper pipeline needs from the operating system goes
//! through [`PlatformProvider`]:
//!
//! - the machine hostname
//! - the primary screen resolution, answered by an ordered ladder of
//!   [`ResolutionProbe`]s
//! - setting the desktop background
//!
//! [`SystemPlatform`] is the real implementation; tests substitute their own.

#[cfg(target_os = "macos")]
mod macos;
pub mod monitors;
pub mod path;
#[cfg(windows)]
mod windows;

use std::path::Path;

use sysinfo::System;

use crate::error::PlatformError;

/// Screen dimensions in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    /// Resolution used when every probe fails.
    pub const FALLBACK: Self = Self { width: 1920, height: 1080 };

    /// Creates a screen size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self { Self { width, height } }

    /// Rejects sizes with a zero dimension.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::InvalidDimensions`] if either side is zero.
    pub const fn validate(self) -> Result<Self, PlatformError> {
        if self.width == 0 || self.height == 0 {
            return Err(PlatformError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

impl std::fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One way of asking the OS for the primary screen resolution.
pub trait ResolutionProbe {
    /// Short name printed next to a detected resolution.
    fn label(&self) -> &'static str;

    /// Queries the resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Zero-sized answers are rejected by
    /// [`detect_screen_size`] even when returned as `Ok`.
    fn probe(&self) -> Result<ScreenSize, PlatformError>;
}

/// Outcome of walking the probe ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// The resolution to render at.
    pub size: ScreenSize,
    /// Label of the probe that answered, `None` when the fallback was used.
    pub source: Option<&'static str>,
    /// Probes that were tried and failed, in order.
    pub failures: Vec<(&'static str, PlatformError)>,
}

impl Detection {
    /// Returns true when no probe answered and the fallback size was used.
    #[must_use]
    pub const fn is_fallback(&self) -> bool { self.source.is_none() }
}

/// Tries each probe in order and returns the first valid answer.
///
/// A probe is only consulted when every earlier one failed or reported a
/// zero-sized screen. When all fail, [`ScreenSize::FALLBACK`] is used.
pub fn detect_screen_size(probes: &[Box<dyn ResolutionProbe>]) -> Detection {
    let mut failures = Vec::new();

    for probe in probes {
        let label = probe.label();
        match probe.probe().and_then(ScreenSize::validate) {
            Ok(size) => {
                tracing::info!(probe = label, %size, "platform: detected screen resolution");
                return Detection { size, source: Some(label), failures };
            }
            Err(err) => {
                tracing::info!(probe = label, error = %err, "platform: resolution probe failed");
                failures.push((label, err));
            }
        }
    }

    tracing::info!(size = %ScreenSize::FALLBACK, "platform: using fallback screen resolution");
    Detection {
        size: ScreenSize::FALLBACK,
        source: None,
        failures,
    }
}

/// Operating system services used by the wallpaper pipeline.
pub trait PlatformProvider {
    /// Returns the machine hostname.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS does not report a hostname.
    fn hostname(&self) -> Result<String, PlatformError>;

    /// Returns the resolution probes, in the order they should be tried.
    fn resolution_probes(&self) -> Vec<Box<dyn ResolutionProbe>>;

    /// Detects the primary screen resolution.
    fn screen_size(&self) -> Detection { detect_screen_size(&self.resolution_probes()) }

    /// Sets the image at `path` as the desktop background.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS rejects the change.
    fn apply_wallpaper(&self, path: &Path) -> Result<(), PlatformError>;
}

/// The provider backed by the running operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPlatform;

impl PlatformProvider for SystemPlatform {
    fn hostname(&self) -> Result<String, PlatformError> {
        match System::host_name() {
            Some(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
            Some(_) => Err(PlatformError::HostnameUnavailable("empty hostname".to_string())),
            None => Err(PlatformError::HostnameUnavailable(
                "the OS did not report a hostname".to_string(),
            )),
        }
    }

    fn resolution_probes(&self) -> Vec<Box<dyn ResolutionProbe>> {
        vec![Box::new(NativeProbe), Box::new(monitors::MonitorProbe)]
    }

    fn apply_wallpaper(&self, path: &Path) -> Result<(), PlatformError> {
        if !path.exists() {
            return Err(PlatformError::SetWallpaperFailed(format!(
                "Wallpaper file not found: {}",
                path.display()
            )));
        }

        let path_str = path.display().to_string();
        tracing::debug!(path = %path_str, "platform: setting desktop wallpaper");

        wallpaper::set_from_path(&path_str)
            .map_err(|e| PlatformError::SetWallpaperFailed(e.to_string()))
    }
}

/// DPI-aware query of the primary display through the native windowing API.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeProbe;

impl ResolutionProbe for NativeProbe {
    fn label(&self) -> &'static str { "DPI-aware" }

    #[cfg(windows)]
    fn probe(&self) -> Result<ScreenSize, PlatformError> { windows::primary_screen_size() }

    #[cfg(target_os = "macos")]
    fn probe(&self) -> Result<ScreenSize, PlatformError> { macos::primary_screen_size() }

    #[cfg(not(any(windows, target_os = "macos")))]
    fn probe(&self) -> Result<ScreenSize, PlatformError> { Err(PlatformError::Unsupported) }
}
