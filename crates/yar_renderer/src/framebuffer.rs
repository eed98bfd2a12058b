//! Fixed-size 2D store of packed pixels.

use crate::Color;

/// Row-major framebuffer of packed `0xAARRGGBB` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Create a framebuffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK.hex; width as usize * height as usize],
        }
    }

    pub fn size_x(&self) -> u32 {
        self.width
    }

    pub fn size_y(&self) -> u32 {
        self.height
    }

    /// Set every pixel to `color`.
    pub fn fill_color(&mut self, color: Color) {
        self.pixels.fill(color.hex);
    }

    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        Color::from_hex(self.pixels[self.index(x, y)])
    }

    /// Set the pixel at (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color.hex;
    }

    /// Packed pixels in row-major order.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Packed pixels as native-endian bytes (BGRA on little-endian hosts).
    pub fn raw_data(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        y as usize * self.width as usize + x as usize
    }
}
