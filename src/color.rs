//! Packed 8-bit RGBA colors and alpha compositing.
//!
//! A color is a single `u32` with the channels at fixed bit offsets:
//!
//! ```text
//! bits 31..24  23..16  15..8  7..0
//!        A       B       G     R
//! ```
//!
//! On little-endian hosts the in-memory byte order of this word is
//! `[R, G, B, A]`, which is what image encoders expect.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A color channel selector for [`Rgba::channel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red, bits 0..8.
    R,
    /// Green, bits 8..16.
    G,
    /// Blue, bits 16..24.
    B,
    /// Alpha, bits 24..32.
    A,
}

impl Channel {
    /// All channels in packing order.
    pub const ALL: [Self; 4] = [Self::R, Self::G, Self::B, Self::A];

    /// Bit offset of this channel inside the packed word.
    #[must_use]
    pub const fn shift(self) -> u32 {
        match self {
            Self::R => 0,
            Self::G => 8,
            Self::B => 16,
            Self::A => 24,
        }
    }
}

/// Straight-alpha RGBA color packed into one 32-bit word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Rgba(u32);

impl Rgba {
    /// Fully transparent black (packed value 0).
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Pack four channels into a color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32)
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Reinterpret a packed word as a color.
    #[must_use]
    pub const fn from_u32(packed: u32) -> Self {
        Self(packed)
    }

    /// The packed word.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Extract one channel.
    #[must_use]
    pub const fn channel(self, channel: Channel) -> u8 {
        ((self.0 >> channel.shift()) & 0xff) as u8
    }

    /// Red channel.
    #[must_use]
    pub const fn r(self) -> u8 {
        self.channel(Channel::R)
    }

    /// Green channel.
    #[must_use]
    pub const fn g(self) -> u8 {
        self.channel(Channel::G)
    }

    /// Blue channel.
    #[must_use]
    pub const fn b(self) -> u8 {
        self.channel(Channel::B)
    }

    /// Alpha channel.
    #[must_use]
    pub const fn a(self) -> u8 {
        self.channel(Channel::A)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r(), self.g(), self.b(), a)
    }

    /// Convert to `[r, g, b, a]`.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    /// Create from `[r, g, b, a]`.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Multiply the alpha channel by `factor`, leaving r, g, b untouched.
    ///
    /// `factor` is clamped to `[0, 1]` and NaN counts as 0. The scaled alpha
    /// is truncated, not rounded.
    #[must_use]
    pub fn scale_alpha(self, factor: f64) -> Self {
        let factor = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
        let alpha = f64::from(self.a()) * factor;
        self.with_alpha(alpha as u8)
    }

    /// Composite `self` OVER `bottom`.
    ///
    /// Each color channel is `top * a + bottom * (1 - a)` with
    /// `a = self.a / 255`, truncated to an integer. The result is always
    /// opaque: the framebuffer is a flattened image with no further layers,
    /// so the bottom alpha does not participate.
    #[must_use]
    pub fn over(self, bottom: Self) -> Self {
        let alpha = f64::from(self.a()) / 255.0;
        let mix = |top: u8, bot: u8| -> u8 {
            (f64::from(top) * alpha + f64::from(bot) * (1.0 - alpha)) as u8
        };

        Self::new(
            mix(self.r(), bottom.r()),
            mix(self.g(), bottom.g()),
            mix(self.b(), bottom.b()),
            255,
        )
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgba({}, {}, {}, {})", self.r(), self.g(), self.b(), self.a())
    }
}

impl From<u32> for Rgba {
    fn from(packed: u32) -> Self {
        Self::from_u32(packed)
    }
}

impl From<Rgba> for u32 {
    fn from(color: Rgba) -> Self {
        color.to_u32()
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(arr: [u8; 4]) -> Self {
        Self::from_array(arr)
    }
}

/// Parses `RRGGBB` or `RRGGBBAA` hex, with an optional leading `#`.
/// Six digits give an opaque color.
impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }

        let value =
            u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor(s.to_string()))?;
        let [hi, b1, b2, b3] = value.to_be_bytes();
        Ok(if hex.len() == 6 { Self::rgb(b1, b2, b3) } else { Self::new(hi, b1, b2, b3) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r(), 255);
        assert_eq!(Rgba::GREEN.g(), 255);
        assert_eq!(Rgba::BLUE.b(), 255);
        assert_eq!(Rgba::TRANSPARENT.to_u32(), 0);
    }

    #[test]
    fn test_packing_order() {
        let color = Rgba::new(0x11, 0x22, 0x33, 0x44);
        assert_eq!(color.to_u32(), 0x4433_2211);
        assert_eq!(Rgba::from_u32(0x4433_2211), color);
    }

    #[test]
    fn test_channel_extraction() {
        let color = Rgba::new(10, 20, 30, 40);
        assert_eq!(color.channel(Channel::R), 10);
        assert_eq!(color.channel(Channel::G), 20);
        assert_eq!(color.channel(Channel::B), 30);
        assert_eq!(color.channel(Channel::A), 40);

        let from_all: Vec<u8> = Channel::ALL.iter().map(|&ch| color.channel(ch)).collect();
        assert_eq!(from_all, color.to_array());
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        let arr = color.to_array();
        assert_eq!(arr, [10, 20, 30, 40]);
        assert_eq!(Rgba::from_array(arr), color);
    }

    #[test]
    fn test_le_bytes_are_rgba() {
        let color = Rgba::new(1, 2, 3, 4);
        assert_eq!(color.to_u32().to_le_bytes(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_rgba_with_alpha() {
        let semi_red = Rgba::RED.with_alpha(128);
        assert_eq!(semi_red.r(), 255);
        assert_eq!(semi_red.a(), 128);
    }

    #[test]
    fn test_scale_alpha() {
        let color = Rgba::new(200, 100, 50, 255);
        let half = color.scale_alpha(0.5);
        assert_eq!(half.a(), 127);
        assert_eq!((half.r(), half.g(), half.b()), (200, 100, 50));

        assert_eq!(color.scale_alpha(1.0), color);
        assert_eq!(color.scale_alpha(0.0).a(), 0);
    }

    #[test]
    fn test_scale_alpha_truncates() {
        // 51 * 0.9 = 45.9
        assert_eq!(Rgba::new(0, 0, 0, 51).scale_alpha(0.9).a(), 45);
    }

    #[test]
    fn test_scale_alpha_clamps() {
        let color = Rgba::new(1, 2, 3, 200);
        assert_eq!(color.scale_alpha(2.0), color);
        assert_eq!(color.scale_alpha(-1.0).a(), 0);
        assert_eq!(color.scale_alpha(f64::NAN).a(), 0);
    }

    #[test]
    fn test_over_opaque_top_wins() {
        let top = Rgba::new(12, 34, 56, 255);
        assert_eq!(top.over(Rgba::WHITE), top);
        assert_eq!(top.over(Rgba::TRANSPARENT), top);
    }

    #[test]
    fn test_over_transparent_top_keeps_bottom() {
        let bottom = Rgba::new(90, 80, 70, 60);
        assert_eq!(Rgba::new(1, 2, 3, 0).over(bottom), bottom.with_alpha(255));
    }

    #[test]
    fn test_over_half_alpha() {
        let top = Rgba::new(255, 255, 255, 128);
        let result = top.over(Rgba::BLACK);
        // 255 * 128/255 = 128.0
        assert_eq!(result, Rgba::rgb(128, 128, 128));
    }

    #[test]
    fn test_over_is_always_opaque() {
        let result = Rgba::new(10, 10, 10, 3).over(Rgba::TRANSPARENT);
        assert_eq!(result.a(), 255);
    }

    #[test]
    fn test_rgba_default() {
        assert_eq!(Rgba::default(), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("ff0000".parse::<Rgba>().unwrap(), Rgba::RED);
        assert_eq!("#00ff00".parse::<Rgba>().unwrap(), Rgba::GREEN);
        assert_eq!("0a141e80".parse::<Rgba>().unwrap(), Rgba::new(10, 20, 30, 128));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!("red".parse::<Rgba>().is_err());
        assert!("#12345".parse::<Rgba>().is_err());
        assert!("gg0000".parse::<Rgba>().is_err());
        assert!("".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Rgba::new(1, 2, 3, 4)), "Rgba(1, 2, 3, 4)");
    }
}
