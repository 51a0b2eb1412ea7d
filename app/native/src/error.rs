//! Error types for Spy.
//!
//! Most failures in the wallpaper pipeline are recovered locally (reprompting,
//! fallback values, a printed manual path). The variants here cover what is
//! left: errors that terminate the program, and the error values that platform
//! probes hand back to the fallback ladder.

use thiserror::Error;

/// Errors that can occur during application execution.
#[derive(Debug, Error)]
pub enum SpyError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Encoding or decoding an image failed.
    #[error("Image error: {0}")]
    ImageError(String),
    /// Serializing a value for output failed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for SpyError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<image::ImageError> for SpyError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => Self::IoError(io.to_string()),
            other => Self::ImageError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for SpyError {
    fn from(err: serde_json::Error) -> Self { Self::SerializationError(err.to_string()) }
}

/// Errors reported by OS integration points.
///
/// These never abort a run on their own; callers substitute a fallback value
/// and print the error as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The OS did not report a hostname.
    #[error("hostname unavailable: {0}")]
    HostnameUnavailable(String),
    /// A resolution probe could not query the display.
    #[error("{0}")]
    ProbeFailed(String),
    /// A resolution probe answered with a zero-sized display.
    #[error("reported non-positive dimensions {width}x{height}")]
    InvalidDimensions {
        /// Reported width.
        width: u32,
        /// Reported height.
        height: u32,
    },
    /// The OS refused to change the desktop background.
    #[error("{0}")]
    SetWallpaperFailed(String),
    /// The probe or call is not available on this platform.
    #[error("not supported on this platform")]
    Unsupported,
}
