//! # aaline
//!
//! A minimal software rasterizer: an in-memory RGBA framebuffer plus
//! antialiased line drawing with alpha compositing.
//!
//! ## Features
//!
//! - **Packed colors**: 8-bit straight-alpha RGBA in one `u32`
//! - **Bounds-safe framebuffer**: off-canvas reads return `None`, writes are dropped
//! - **Wu lines**: coverage-weighted pixel pairs composited OVER existing content
//! - **Outputs**: PNG files and terminal previews
//!
//! ## Quick Start
//!
//! ```rust
//! use aaline::prelude::*;
//!
//! let mut fb = Framebuffer::new(100, 100)?;
//! fb.clear(Rgba::RED);
//! draw_line(&mut fb, Rgba::WHITE, Point::new(0, 0), Point::new(99, 50))?;
//!
//! let png = PngEncoder::to_bytes(&fb)?;
//! assert!(!png.is_empty());
//! # Ok::<(), aaline::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Porter, T., & Duff, T. (1984). "Compositing Digital Images." SIGGRAPH '84.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Packed RGBA colors and compositing.
pub mod color;

/// Bounds-checked pixel buffer.
pub mod framebuffer;

/// Integer points and line segments.
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line rasterization.
pub mod render;

/// Output encoders (PNG, terminal).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for aaline operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use aaline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Channel, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Point};
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::render::{draw_line, draw_line_aliased, draw_thick_line, Drawable};
}
