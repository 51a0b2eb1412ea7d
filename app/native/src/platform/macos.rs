//! Primary screen resolution via `AppKit`.

use objc::runtime::{Class, Object};
use objc::{msg_send, sel, sel_impl};

use super::ScreenSize;
use crate::error::PlatformError;

/// Objective-C type definitions for `NSScreen` frame.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
struct NSRect {
    origin: NSPoint,
    size: NSSize,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
struct NSPoint {
    x: f64,
    y: f64,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
struct NSSize {
    width: f64,
    height: f64,
}

/// Returns the main screen size in backing (physical) pixels.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn primary_screen_size() -> Result<ScreenSize, PlatformError> {
    unsafe {
        let Some(screen_class) = Class::get("NSScreen") else {
            return Err(PlatformError::ProbeFailed("NSScreen class unavailable".to_string()));
        };

        let main_screen: *mut Object = msg_send![screen_class, mainScreen];
        if main_screen.is_null() {
            return Err(PlatformError::ProbeFailed("no main screen".to_string()));
        }

        let frame: NSRect = msg_send![main_screen, frame];
        let scale: f64 = msg_send![main_screen, backingScaleFactor];

        Ok(ScreenSize::new(
            (frame.size.width * scale).round() as u32,
            (frame.size.height * scale).round() as u32,
        ))
    }
}
