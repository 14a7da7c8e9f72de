// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! Error types shared by all modules.
//!
//! Errors are raised only while building or configuring things (bitmaps,
//! spritesheets, animations, draw options). Drawing itself never fails:
//! anything outside the framebuffer is clipped silently.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelError {
    /// Non-positive sizes, speeds or scale factors, empty frame lists,
    /// mismatched parallel arrays.
    InvalidArgument(String),
    /// Crop or cell lookup outside the source bitmap / grid.
    OutOfBounds(String),
    /// Malformed config or font layout document.
    Config(String),
    Io(String),
}

impl fmt::Display for PixelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            PixelError::OutOfBounds(msg) => write!(f, "out of bounds: {}", msg),
            PixelError::Config(msg) => write!(f, "config error: {}", msg),
            PixelError::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

impl std::error::Error for PixelError {}

impl From<std::io::Error> for PixelError {
    fn from(err: std::io::Error) -> PixelError {
        PixelError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for PixelError {
    fn from(err: toml::de::Error) -> PixelError {
        PixelError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for PixelError {
    fn from(err: serde_json::Error) -> PixelError {
        PixelError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PixelError>;

/// Shorthand used by validating constructors.
pub(crate) fn invalid<T>(msg: impl Into<String>) -> Result<T> {
    Err(PixelError::InvalidArgument(msg.into()))
}

pub(crate) fn out_of_bounds<T>(msg: impl Into<String>) -> Result<T> {
    Err(PixelError::OutOfBounds(msg.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_kind() {
        let e = PixelError::OutOfBounds("cell (3, 0) outside 2x1 grid".to_string());
        assert_eq!(e.to_string(), "out of bounds: cell (3, 0) outside 2x1 grid");
        let e: PixelError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(e, PixelError::Io(_)));
    }
}
