//! Error types for SimpleScene
//!
//! This module defines the error type used throughout the crate:
//! camera frame validation, projection parameters, and demo initialization.

use std::fmt;

/// Result type for SimpleScene operations
pub type Result<T> = std::result::Result<T, Error>;

/// SimpleScene errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Eye/at/up do not span a valid view frame (eye == at, zero or parallel up)
    DegenerateCameraFrame(String),

    /// Projection parameters out of range (fov, aspect ratio, clipping planes)
    InvalidProjection(String),

    /// Initialization failed (window, event loop, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateCameraFrame(msg) => write!(f, "Degenerate camera frame: {}", msg),
            Error::InvalidProjection(msg) => write!(f, "Invalid projection: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
