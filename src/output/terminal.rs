//! Terminal preview of a framebuffer.
//!
//! Two modes:
//! - ASCII: luminance ramp ` .:-=+*#%@`, one character per sampled pixel
//! - ANSI: 24-bit background color escapes, one space per sampled pixel
//!
//! Alpha is honored by darkening: a transparent pixel previews as black.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    #[default]
    Ascii,
    /// Spaces on ANSI 24-bit background color
    AnsiTrueColor,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone, Default)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Approximate height/width ratio of a monospace cell.
    const CHAR_ASPECT: f32 = 2.0;

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in characters.
    /// Defaults to the framebuffer width capped at 80.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Render a framebuffer to a string, one line per output row.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        let cols = self.width.unwrap_or_else(|| fb.width().min(80));
        let scale_x = fb.width() as f32 / cols as f32;
        let rows = ((fb.height() as f32 / scale_x / Self::CHAR_ASPECT).round() as u32).max(1);
        let scale_y = fb.height() as f32 / rows as f32;

        let mut output = String::new();
        for row in 0..rows {
            for col in 0..cols {
                let x = ((col as f32 * scale_x) as i32).min(fb.width() as i32 - 1);
                let y = ((row as f32 * scale_y) as i32).min(fb.height() as i32 - 1);
                let pixel = fb.get_pixel(x, y).unwrap_or(Rgba::TRANSPARENT);

                match self.mode {
                    TerminalMode::Ascii => output.push(Self::ramp_char(pixel)),
                    TerminalMode::AnsiTrueColor => {
                        let [r, g, b] = Self::premultiplied(pixel);
                        let _ = write!(output, "\x1b[48;2;{r};{g};{b}m ");
                    }
                }
            }
            if self.mode == TerminalMode::AnsiTrueColor {
                output.push_str("\x1b[0m");
            }
            output.push('\n');
        }

        output
    }

    /// RGB scaled by alpha, as seen over black.
    fn premultiplied(pixel: Rgba) -> [u8; 3] {
        let alpha = f32::from(pixel.a()) / 255.0;
        [pixel.r(), pixel.g(), pixel.b()].map(|c| (f32::from(c) * alpha) as u8)
    }

    /// Map a pixel's Rec. 709 luminance onto the ASCII ramp.
    fn ramp_char(pixel: Rgba) -> char {
        let [r, g, b] = Self::premultiplied(pixel);
        let luma = (0.2126 * f32::from(r) + 0.7152 * f32::from(g) + 0.0722 * f32::from(b)) / 255.0;
        let last = Self::ASCII_RAMP.len() - 1;
        let idx = ((luma * last as f32).round() as usize).min(last);
        Self::ASCII_RAMP[idx]
    }

    /// Write output directly to stdout.
    pub fn print(&self, fb: &Framebuffer) {
        print!("{}", self.render(fb));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_render_white() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        let output = TerminalEncoder::new().width(5).render(&fb);

        assert!(output.contains('@'));
        assert!(!output.contains(' '));
    }

    #[test]
    fn test_transparent_renders_dark() {
        let fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        let output = TerminalEncoder::new().width(5).render(&fb);

        assert!(output.chars().filter(|&c| c != '\n').all(|c| c == ' '));
    }

    #[test]
    fn test_transparent_white_renders_dark() {
        let mut fb = Framebuffer::new(4, 4).expect("framebuffer creation should succeed");
        fb.clear(Rgba::new(255, 255, 255, 0));
        let output = TerminalEncoder::new().render(&fb);

        assert!(output.chars().filter(|&c| c != '\n').all(|c| c == ' '));
    }

    #[test]
    fn test_ansi_true_color_contains_escapes() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        fb.clear(Rgba::BLUE);

        let output = TerminalEncoder::new().mode(TerminalMode::AnsiTrueColor).width(5).render(&fb);

        assert!(output.contains("48;2;0;0;255"));
        assert!(output.contains("\x1b[0m"));
    }

    #[test]
    fn test_aspect_ratio_preservation() {
        let fb = Framebuffer::new(200, 100).expect("framebuffer creation should succeed");

        let output = TerminalEncoder::new().width(40).render(&fb);
        let lines: Vec<&str> = output.lines().collect();

        // 200x100 at 40 columns: 5 pixels per column, 10 per row
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|l| l.len() == 40));
    }

    #[test]
    fn test_default_width_capped_at_80() {
        let fb = Framebuffer::new(1000, 100).expect("framebuffer creation should succeed");

        let output = TerminalEncoder::new().render(&fb);
        let first_line = output.lines().next().expect("iterator should have next element");

        assert_eq!(first_line.len(), 80);
    }

    #[test]
    fn test_line_shows_up() {
        let mut fb = Framebuffer::new(20, 20).expect("framebuffer creation should succeed");
        fb.clear(Rgba::BLACK);
        crate::render::draw_line(
            &mut fb,
            Rgba::WHITE,
            crate::geometry::Point::new(0, 0),
            crate::geometry::Point::new(19, 0),
        )
        .unwrap();

        let output = TerminalEncoder::new().render(&fb);
        let first_line = output.lines().next().expect("iterator should have next element");
        assert!(first_line.chars().all(|c| c == '@'));
    }
}
