//! Packed 8-bit colors as stored in the framebuffer.

use yar_math::{Interval, Vec3};

/// A packed `0xAARRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub hex: u32,
}

impl Color {
    /// Opaque black, the background every render pass starts from.
    pub const BLACK: Color = Color { hex: 0xff00_0000 };
    /// Opaque white.
    pub const WHITE: Color = Color { hex: 0xffff_ffff };

    /// Wrap an already packed value.
    pub const fn from_hex(hex: u32) -> Self {
        Self { hex }
    }

    /// Build an opaque color from 8-bit channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 0xff)
    }

    /// Build a color from 8-bit channels including alpha.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            hex: (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32,
        }
    }

    /// Quantize a linear `[0, 1]` color vector to an opaque packed color.
    ///
    /// Channels are clamped, then truncated to 8 bits.
    pub fn from_vector(v: Vec3) -> Self {
        Self::from_rgb(
            to_channel(v.x),
            to_channel(v.y),
            to_channel(v.z),
        )
    }

    /// Expand to a `[0, 1]` color vector (alpha is dropped).
    pub fn to_vector(self) -> Vec3 {
        Vec3::new(self.r() as f32, self.g() as f32, self.b() as f32) / 255.0
    }

    #[inline]
    pub fn a(self) -> u8 {
        (self.hex >> 24) as u8
    }

    #[inline]
    pub fn r(self) -> u8 {
        (self.hex >> 16) as u8
    }

    #[inline]
    pub fn g(self) -> u8 {
        (self.hex >> 8) as u8
    }

    #[inline]
    pub fn b(self) -> u8 {
        self.hex as u8
    }

    /// Channels in RGBA byte order, as image encoders expect.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }
}

#[inline]
fn to_channel(x: f32) -> u8 {
    // NaN clamps to NaN and casts to 0
    (255.0 * Interval::UNIT.clamp(x)) as u8
}
