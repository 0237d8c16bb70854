//! Antialiased line rasterization (Xiaolin Wu).
//!
//! A segment is classified once into a [`Stroke`]. Axis-aligned strokes fill
//! a span with the draw color; shallow and steep strokes share a single
//! major-axis walk parameterized by [`Axis`]. At every major-axis step the
//! ideal minor position is split by truncation toward zero into a near pixel
//! and, when the position is not exactly on a pixel, a far neighbour on the
//! side the remainder points to. Each receives the draw color with its alpha
//! scaled by coverage and is composited OVER whatever the buffer holds.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Point};
use log::trace;
use std::ops::RangeInclusive;

/// The axis a walk advances along one pixel at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Step along x, interpolate y.
    X,
    /// Step along y, interpolate x.
    Y,
}

impl Axis {
    /// Coordinate of `p` along this axis.
    #[inline]
    fn major(self, p: Point) -> i64 {
        match self {
            Self::X => i64::from(p.x),
            Self::Y => i64::from(p.y),
        }
    }

    /// Coordinate of `p` across this axis.
    #[inline]
    fn minor(self, p: Point) -> i64 {
        match self {
            Self::X => i64::from(p.y),
            Self::Y => i64::from(p.x),
        }
    }

    /// Map (major, minor) back to (x, y).
    #[inline]
    fn to_xy(self, major: i64, minor: i64) -> (i64, i64) {
        match self {
            Self::X => (major, minor),
            Self::Y => (minor, major),
        }
    }

    /// Canvas size along this axis.
    #[inline]
    fn extent(self, fb: &Framebuffer) -> i64 {
        match self {
            Self::X => i64::from(fb.width()),
            Self::Y => i64::from(fb.height()),
        }
    }
}

/// Geometric class of a segment, evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stroke {
    /// `p1.x == p2.x`, including the single-point case.
    Vertical,
    /// `p1.y == p2.y`.
    Horizontal,
    /// `|dx| > |dy|`.
    Shallow,
    /// `|dx| <= |dy|`.
    Steep,
}

impl Stroke {
    /// Classify the segment `p1 -> p2`.
    #[must_use]
    pub fn classify(p1: Point, p2: Point) -> Self {
        let line = Line::new(p1, p2);
        let (dx, dy) = (line.dx().abs(), line.dy().abs());

        if dx == 0 {
            Self::Vertical
        } else if dy == 0 {
            Self::Horizontal
        } else if dx > dy {
            Self::Shallow
        } else {
            Self::Steep
        }
    }

    /// The axis this stroke walks along.
    #[must_use]
    pub const fn major_axis(self) -> Axis {
        match self {
            Self::Horizontal | Self::Shallow => Axis::X,
            Self::Vertical | Self::Steep => Axis::Y,
        }
    }

    /// Whether the stroke needs coverage interpolation.
    #[must_use]
    pub const fn is_antialiased(self) -> bool {
        matches!(self, Self::Shallow | Self::Steep)
    }
}

/// Draw an antialiased line from `p1` to `p2`, compositing onto `fb`.
///
/// Both endpoints are drawn. Pixels off the canvas are skipped; the
/// remainder of the line is still drawn. Swapping `p1` and `p2` produces the
/// same result.
///
/// # Errors
///
/// Never fails for integer endpoints. The error path exists for the slope
/// division guard inside the walk.
///
/// # Example
///
/// ```
/// use aaline::prelude::*;
///
/// let mut fb = Framebuffer::new(10, 10).unwrap();
/// draw_line(&mut fb, Rgba::WHITE, Point::new(0, 0), Point::new(9, 0)).unwrap();
/// assert_eq!(fb.get_pixel(9, 0), Some(Rgba::WHITE));
/// ```
pub fn draw_line(fb: &mut Framebuffer, color: Rgba, p1: Point, p2: Point) -> Result<()> {
    let stroke = Stroke::classify(p1, p2);
    let axis = stroke.major_axis();

    // Always walk towards increasing major coordinate.
    let mut line = Line::new(p1, p2);
    if axis.major(line.start) > axis.major(line.end) {
        line = line.reversed();
    }

    trace!("draw_line {line:?} as {stroke:?}");

    if stroke.is_antialiased() {
        walk_major_axis(fb, color, axis, line)
    } else {
        fill_span(fb, color, axis, line);
        Ok(())
    }
}

/// Steps `0..=len` whose major coordinate `start + step` lands on the canvas.
fn visible_steps(fb: &Framebuffer, axis: Axis, start: i64, len: i64) -> Option<RangeInclusive<i64>> {
    let first = (-start).max(0);
    let last = len.min(axis.extent(fb) - 1 - start);
    (first <= last).then_some(first..=last)
}

/// Axis-aligned stroke: full draw color along the major axis.
fn fill_span(fb: &mut Framebuffer, color: Rgba, axis: Axis, line: Line) {
    let start = axis.major(line.start);
    let len = axis.major(line.end) - start;
    let minor = axis.minor(line.start);

    let Some(steps) = visible_steps(fb, axis, start, len) else {
        return;
    };
    for step in steps {
        let (x, y) = axis.to_xy(start + step, minor);
        fb.blend_pixel(x, y, color);
    }
}

/// Wu walk along `axis` over `line`, whose start has the smaller major coordinate.
fn walk_major_axis(fb: &mut Framebuffer, color: Rgba, axis: Axis, line: Line) -> Result<()> {
    let start = axis.major(line.start);
    let len = axis.major(line.end) - start;
    if len == 0 {
        return Err(Error::DegenerateAxis { axis });
    }

    let minor_start = axis.minor(line.start) as f64;
    let minor_delta = (axis.minor(line.end) - axis.minor(line.start)) as f64;
    let major_len = len as f64;

    let Some(steps) = visible_steps(fb, axis, start, len) else {
        return Ok(());
    };
    for step in steps {
        // Computed from the start point rather than accumulated, so the last
        // step lands exactly on `to`.
        let position = minor_start + minor_delta * step as f64 / major_len;
        let near = position.trunc();
        let frac = position - near;
        let near = near as i64;
        let major = start + step;

        let (x, y) = axis.to_xy(major, near);
        fb.blend_pixel(x, y, color.scale_alpha(1.0 - frac.abs()));

        if frac != 0.0 {
            let far = if frac > 0.0 { near + 1 } else { near - 1 };
            let (x, y) = axis.to_xy(major, far);
            fb.blend_pixel(x, y, color.scale_alpha(frac.abs()));
        }
    }

    Ok(())
}
