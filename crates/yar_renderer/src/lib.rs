//! YAR renderer - tile-parallel CPU ray tracing.
//!
//! Casts primary rays per pixel, shades the closest hit with a single
//! directional light, averages adaptively chosen samples and writes the
//! result into a shared framebuffer. Tiles are rendered in parallel on the
//! rayon thread pool.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use yar_renderer::{Color, Material, PinholeCamera, Renderer, Sphere, Vec3};
//!
//! let mut renderer = Renderer::new(64, 64)?;
//! renderer.add_renderable(Arc::new(Sphere::new(
//!     Vec3::new(0.0, 0.0, 5.0),
//!     1.0,
//!     Arc::new(Material::new(Color::WHITE)),
//! )));
//! renderer.render(&PinholeCamera::new(64, 64))?;
//! renderer.save("render.tga")?;
//! ```

mod camera;
mod color;
pub mod error;
mod framebuffer;
mod hittable;
mod material;
mod output;
mod renderer;
mod sampler;
mod shader;
mod sphere;
mod tile;
mod triangle;

pub use camera::{PinholeCamera, RaySource};
pub use color::Color;
pub use error::{RenderError, RenderResult};
pub use framebuffer::Framebuffer;
pub use hittable::{HitInfo, Intersectable, NO_HIT_DISTANCE};
pub use material::Material;
pub use output::{to_rgba_image, ImageFileWriter, ImageWriter};
pub use renderer::{RenderConfig, RenderStats, Renderer};
pub use sampler::{PixelEstimate, PixelSampler, INITIAL_SAMPLES, SMALL_FLOAT};
pub use shader::{closest_hit, Shader, AMBIENT, LIGHT_DIRECTION};
pub use sphere::Sphere;
pub use tile::{generate_tiles, tile_bounds, RenderBounds};
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from yar_math
pub use yar_math::{Interval, Ray, Vec3};
