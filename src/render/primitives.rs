//! Primitive rendering built on top of the line rasterizer.

use super::line::{draw_line, Axis, Stroke};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Point};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive antialiased, compositing onto the framebuffer.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) -> Result<()>;

    /// Draw this primitive without antialiasing or blending: covered pixels
    /// are overwritten with `color`, alpha included.
    fn draw_aliased(&self, fb: &mut Framebuffer, color: Rgba);
}

// ============================================================================
// Aliased lines
// ============================================================================

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// Pixels are overwritten with `color`, not blended.
pub fn draw_line_aliased(fb: &mut Framebuffer, p1: Point, p2: Point, color: Rgba) {
    let (x1, y1) = (i64::from(p2.x), i64::from(p2.y));
    let dx = (x1 - i64::from(p1.x)).abs();
    let dy = -(y1 - i64::from(p1.y)).abs();
    let sx = if p1.x < p2.x { 1 } else { -1 };
    let sy = if p1.y < p2.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = i64::from(p1.x);
    let mut y = i64::from(p1.y);

    loop {
        if let Some(idx) = fb.index_of(x, y) {
            fb.pixels_mut()[idx] = color;
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

// ============================================================================
// Thick lines
// ============================================================================

/// Draw an antialiased line `thickness` pixels wide.
///
/// The line is built from parallel [`draw_line`] strokes offset across the
/// major axis, centred on the segment. Even widths put the extra stroke on
/// the positive side.
///
/// # Errors
///
/// Returns [`Error::InvalidStroke`] for a zero thickness.
pub fn draw_thick_line(
    fb: &mut Framebuffer,
    color: Rgba,
    p1: Point,
    p2: Point,
    thickness: u32,
) -> Result<()> {
    if thickness == 0 {
        return Err(Error::InvalidStroke("thickness must be at least 1".to_string()));
    }

    let first = -((thickness as i64 - 1) / 2);
    let last = first + thickness as i64 - 1;
    let axis = Stroke::classify(p1, p2).major_axis();

    for offset in first..=last {
        let offset = offset as i32;
        let (dx, dy) = match axis {
            Axis::X => (0, offset),
            Axis::Y => (offset, 0),
        };
        draw_line(fb, color, p1.offset(dx, dy), p2.offset(dx, dy))?;
    }

    Ok(())
}

impl Drawable for Line {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) -> Result<()> {
        draw_line(fb, color, self.start, self.end)
    }

    fn draw_aliased(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_line_aliased(fb, self.start, self.end, color);
    }
}

impl Drawable for Point {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) -> Result<()> {
        draw_line(fb, color, *self, *self)
    }

    fn draw_aliased(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_line_aliased(fb, *self, *self, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
