//! Resolution probe backed by monitor enumeration.

use display_info::DisplayInfo;

use super::{ResolutionProbe, ScreenSize};
use crate::error::PlatformError;

/// Reports the first monitor the display server enumerates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonitorProbe;

impl ResolutionProbe for MonitorProbe {
    fn label(&self) -> &'static str { "monitors" }

    fn probe(&self) -> Result<ScreenSize, PlatformError> {
        let displays = DisplayInfo::all().map_err(|e| PlatformError::ProbeFailed(e.to_string()))?;
        tracing::debug!(count = displays.len(), "platform: enumerated monitors");

        first_monitor_size(displays.iter().map(|display| (display.width, display.height)))
    }
}

/// Picks the first monitor from `(width, height)` pairs.
///
/// # Errors
///
/// Returns an error when no monitor was reported.
pub fn first_monitor_size(
    mut monitors: impl Iterator<Item = (u32, u32)>,
) -> Result<ScreenSize, PlatformError> {
    monitors
        .next()
        .map(|(width, height)| ScreenSize::new(width, height))
        .ok_or_else(|| PlatformError::ProbeFailed("no monitors reported".to_string()))
}
