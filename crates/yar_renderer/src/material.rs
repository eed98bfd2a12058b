//! Surface material for the direct-lighting shader.

use crate::Color;

/// Flat surface color, shaded with a single lambertian term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}
