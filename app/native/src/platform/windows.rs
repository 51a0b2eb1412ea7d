//! Primary screen resolution via Win32.
//!
//! The process is marked DPI aware first; otherwise `GetSystemMetrics`
//! reports the virtualized (scaled) resolution on high-DPI displays.

use windows_sys::Win32::UI::HiDpi::{PROCESS_PER_MONITOR_DPI_AWARE, SetProcessDpiAwareness};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN, SetProcessDPIAware,
};

use super::ScreenSize;
use crate::error::PlatformError;

/// Opts the process into per-monitor DPI awareness, or system awareness on older systems.
fn enable_dpi_awareness() {
    // SAFETY: both calls only change process-wide DPI state.
    unsafe {
        if SetProcessDpiAwareness(PROCESS_PER_MONITOR_DPI_AWARE) < 0 {
            tracing::debug!("platform: per-monitor DPI awareness unavailable, using system DPI awareness");
            if SetProcessDPIAware() == 0 {
                tracing::debug!("platform: SetProcessDPIAware failed");
            }
        }
    }
}

/// Returns the primary display size in physical pixels.
pub fn primary_screen_size() -> Result<ScreenSize, PlatformError> {
    enable_dpi_awareness();

    // SAFETY: GetSystemMetrics has no preconditions.
    let (width, height) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };

    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(width), Ok(height)) => Ok(ScreenSize::new(width, height)),
        _ => Err(PlatformError::ProbeFailed(format!(
            "GetSystemMetrics returned {width}x{height}"
        ))),
    }
}
