//! Core framebuffer for pixel rendering.
//!
//! A framebuffer owns a contiguous, row-major grid of packed [`Rgba`] values.
//! Every access is bounds-checked: reads outside the canvas return `None` and
//! writes outside it are dropped. Line rasterization regularly reaches one
//! pixel past an edge, so absorbing those accesses here keeps the call sites
//! free of per-pixel bounds logic.

use crate::color::Rgba;
use crate::error::{Error, Result};
use log::debug;
use std::fmt::Write as FmtWrite;

/// Bytes per packed pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Packed pixels, top-to-bottom, left-to-right.
    pixels: Vec<Rgba>,
}

impl Framebuffer {
    /// Create a new framebuffer with every pixel transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero or the
    /// byte size overflows, and [`Error::AllocationFailed`] if the allocator
    /// refuses the storage.
    ///
    /// # Example
    ///
    /// ```
    /// use aaline::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let count = (width as usize)
            .checked_mul(height as usize)
            .filter(|count| count.checked_mul(BYTES_PER_PIXEL).is_some())
            .ok_or(Error::InvalidDimensions { width, height })?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(count).map_err(|_| Error::AllocationFailed {
            width,
            height,
            bytes: count * BYTES_PER_PIXEL,
        })?;
        pixels.resize(count, Rgba::TRANSPARENT);

        debug!("allocated {width}x{height} framebuffer ({} bytes)", count * BYTES_PER_PIXEL);

        Ok(Self { width, height, pixels })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Packed pixels in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Packed pixels in row-major order, mutable.
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[Rgba]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Storage index of `(x, y)`, or `None` when it lies off the canvas.
    ///
    /// This is the single bounds check behind every read and write.
    #[inline]
    #[must_use]
    pub fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index_of(i64::from(x), i64::from(y)).map(|idx| self.pixels[idx])
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(idx) = self.index_of(i64::from(x), i64::from(y)) {
            self.pixels[idx] = color;
        }
    }

    /// Composite `color` OVER the pixel at `(x, y)`.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if let Some(idx) = self.index_of(x, y) {
            let bottom = self.pixels[idx];
            self.pixels[idx] = color.over(bottom);
        }
    }

    /// Pixel data as tightly packed `[R, G, B, A]` bytes, row-major.
    ///
    /// This is the layout image encoders consume.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixel_count() * BYTES_PER_PIXEL);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_array());
        }
        bytes
    }

    /// Render the buffer as text: a `WxH` header, then one line per row with
    /// each pixel's packed value in decimal, separated by spaces.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}x{}", self.width, self.height);
        for row in self.pixels.chunks_exact(self.width as usize) {
            for (i, pixel) in row.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{}", pixel.to_u32());
            }
            out.push('\n');
        }
        out
    }
}
