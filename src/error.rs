//! Error types for aaline operations.

use crate::render::Axis;
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while allocating, drawing into, or exporting a framebuffer.
///
/// Out-of-bounds pixel access is deliberately absent: reads and writes outside
/// the canvas are absorbed by [`Framebuffer`](crate::framebuffer::Framebuffer)
/// instead of being reported.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Zero-sized framebuffer, or a pixel count whose byte size overflows `usize`.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// The allocator refused the pixel storage.
    #[error("Failed to allocate {bytes} bytes for a {width}x{height} framebuffer")]
    AllocationFailed {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
        /// Requested size in bytes.
        bytes: usize,
    },

    /// A major-axis walk was requested with a zero-length major delta.
    #[error("Degenerate geometry: zero-length major axis ({axis:?})")]
    DegenerateAxis {
        /// The axis that was expected to carry the walk.
        axis: Axis,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Stroke parameters that cannot be rasterized.
    #[error("Invalid stroke: {0}")]
    InvalidStroke(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions { width: 0, height: 100 };
        assert!(err.to_string().contains("Invalid dimensions"));
        assert!(err.to_string().contains("0x100"));
    }

    #[test]
    fn test_allocation_failed_display() {
        let err = Error::AllocationFailed { width: 10, height: 20, bytes: 800 };
        assert!(err.to_string().contains("800 bytes"));
        assert!(err.to_string().contains("10x20"));
    }

    #[test]
    fn test_degenerate_axis_display() {
        let err = Error::DegenerateAxis { axis: Axis::Y };
        assert!(err.to_string().contains("zero-length"));
    }

    #[test]
    fn test_invalid_color_display() {
        let err = Error::InvalidColor("zz".to_string());
        assert_eq!(err.to_string(), "Invalid color: zz");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
