//! Line rasterization.
//!
//! # Algorithms
//!
//! - **Wu's Anti-aliased Line**: coverage-weighted pixel pairs composited OVER
//!   the existing buffer content
//! - **Bresenham's Line**: fast non-antialiased line drawing
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod line;
mod primitives;

pub use line::{draw_line, Axis, Stroke};
pub use primitives::{draw_line_aliased, draw_thick_line, Drawable};
