//! Tile-parallel renderer.
//!
//! A render pass clears the framebuffer to opaque black, splits the image
//! into a `tiles_per_row x tiles_per_row` grid and renders the tiles on the
//! rayon thread pool. Sampling runs without locks; only the final pixel
//! store takes the framebuffer mutex, which is shared by every worker.

use crate::camera::RaySource;
use crate::error::{RenderError, RenderResult};
use crate::framebuffer::Framebuffer;
use crate::hittable::Intersectable;
use crate::output::{ImageFileWriter, ImageWriter};
use crate::sampler::PixelSampler;
use crate::shader::Shader;
use crate::tile::{tile_bounds, RenderBounds};
use crate::Color;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum samples per pixel
    pub samples_per_pixel: u32,
    /// Stop after two samples when they agree
    pub adaptive_sampling: bool,
    /// Tiles along each image axis; a pass renders `tiles_per_row²` tiles
    pub tiles_per_row: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 8,
            adaptive_sampling: true,
            tiles_per_row: 8,
        }
    }
}

impl RenderConfig {
    /// Check the configuration against an image size.
    pub fn validate(&self, width: u32, height: u32) -> RenderResult<()> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage { width, height });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::ZeroSamplesPerPixel);
        }
        if self.tiles_per_row == 0 {
            return Err(RenderError::ZeroTilesPerRow);
        }
        // Tiles beyond the image size are empty; only the count must fit
        if self.tiles_per_row.checked_mul(self.tiles_per_row).is_none() {
            return Err(RenderError::TooManyTiles {
                tiles_per_row: self.tiles_per_row,
            });
        }
        Ok(())
    }

    /// Tiles in one pass. Only meaningful on a validated configuration.
    pub fn tile_count(&self) -> u32 {
        self.tiles_per_row.saturating_mul(self.tiles_per_row)
    }
}

/// Summary of a finished render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    /// Tiles rendered
    pub tiles: u32,
    /// Primary rays traced across all pixels
    pub samples: u64,
    pub elapsed: Duration,
}

/// Owns the framebuffer and the scene, and renders the scene into it.
pub struct Renderer {
    width: u32,
    height: u32,
    framebuffer: Mutex<Framebuffer>,
    renderables: Vec<Arc<dyn Intersectable>>,
    shader: Shader,
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer for a `width x height` image with default settings.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        Self::with_config(width, height, RenderConfig::default())
    }

    /// Create a renderer with an explicit configuration.
    pub fn with_config(width: u32, height: u32, config: RenderConfig) -> RenderResult<Self> {
        config.validate(width, height)?;

        Ok(Self {
            width,
            height,
            framebuffer: Mutex::new(Framebuffer::new(width, height)),
            renderables: Vec::new(),
            shader: Shader::default(),
            config,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_samples_per_pixel(&mut self, samples_per_pixel: u32) -> RenderResult<()> {
        self.update_config(RenderConfig {
            samples_per_pixel,
            ..self.config
        })
    }

    pub fn set_adaptive_sampling(&mut self, enabled: bool) {
        self.config.adaptive_sampling = enabled;
    }

    pub fn set_tiles_per_row(&mut self, tiles_per_row: u32) -> RenderResult<()> {
        self.update_config(RenderConfig {
            tiles_per_row,
            ..self.config
        })
    }

    /// Register a scene object. Objects are traced in insertion order.
    pub fn add_renderable(&mut self, renderable: Arc<dyn Intersectable>) {
        self.renderables.push(renderable);
    }

    pub fn renderables(&self) -> &[Arc<dyn Intersectable>] {
        &self.renderables
    }

    /// Render the whole image. Blocks until every tile is done.
    pub fn render(&self, camera: &dyn RaySource) -> RenderResult<RenderStats> {
        self.render_cancellable(camera, &AtomicBool::new(false))
    }

    /// Render the whole image, skipping tiles not yet started once `cancel`
    /// is set.
    ///
    /// A cancelled pass returns [`RenderError::Cancelled`] and leaves the
    /// finished tiles in the framebuffer.
    pub fn render_cancellable(
        &self,
        camera: &dyn RaySource,
        cancel: &AtomicBool,
    ) -> RenderResult<RenderStats> {
        let start = Instant::now();
        let (width, height) = (self.width, self.height);
        let tiles_per_row = self.config.tiles_per_row;
        let tiles_num = self.config.tile_count();

        log::debug!(
            "Rendering {}x{} in {} tiles, {} spp (adaptive: {}), {} objects",
            width,
            height,
            tiles_num,
            self.config.samples_per_pixel,
            self.config.adaptive_sampling,
            self.renderables.len()
        );

        self.lock_framebuffer()?.fill_color(Color::BLACK);

        let finished_tiles = AtomicU32::new(0);
        let samples_taken = AtomicU64::new(0);

        (0..tiles_num).into_par_iter().try_for_each(|tile_id| {
            if cancel.load(Ordering::Relaxed) {
                return Err(RenderError::Cancelled {
                    finished: finished_tiles.load(Ordering::SeqCst),
                    total: tiles_num,
                });
            }

            let bounds = tile_bounds(width, height, tiles_per_row, tile_id);
            let samples = self.render_tile(camera, &bounds)?;
            samples_taken.fetch_add(samples, Ordering::Relaxed);

            let finished = finished_tiles.fetch_add(1, Ordering::SeqCst) + 1;
            log::info!(
                "Progress: {:.1}%",
                100.0 * finished as f32 / tiles_num as f32
            );
            Ok(())
        })
        .inspect_err(|err| {
            if let RenderError::Cancelled { finished, total } = err {
                log::warn!("Render cancelled with {}/{} tiles finished", finished, total);
            }
        })?;

        let stats = RenderStats {
            tiles: tiles_num,
            samples: samples_taken.into_inner(),
            elapsed: start.elapsed(),
        };
        log::info!(
            "Rendered {} tiles ({} samples) in {:.2?}",
            stats.tiles,
            stats.samples,
            stats.elapsed
        );
        Ok(stats)
    }

    /// Render every pixel in `bounds` and store it in the framebuffer.
    ///
    /// Returns the number of samples taken.
    fn render_tile(&self, camera: &dyn RaySource, bounds: &RenderBounds) -> RenderResult<u64> {
        let sampler = PixelSampler::new(self.config.samples_per_pixel, self.config.adaptive_sampling);
        let mut samples = sampler.buffer();
        let mut taken = 0u64;

        for (x, y) in bounds.pixels() {
            let estimate = sampler.evaluate(&mut samples, |index| {
                let ray = camera.sample_ray(x, y, index);
                self.shader.shade(&ray, &self.renderables)
            })?;
            taken += estimate.samples as u64;

            self.lock_framebuffer()?
                .set_pixel(x, y, Color::from_vector(estimate.color));
        }

        Ok(taken)
    }

    /// Write the current framebuffer to `path`; the format follows the
    /// file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        self.save_with(&ImageFileWriter, path)
    }

    /// Write the current framebuffer through a custom writer.
    pub fn save_with(&self, writer: &dyn ImageWriter, path: impl AsRef<Path>) -> RenderResult<()> {
        let framebuffer = self.lock_framebuffer()?;
        writer.write(
            path.as_ref(),
            framebuffer.pixels(),
            framebuffer.size_x(),
            framebuffer.size_y(),
        )
    }

    /// Snapshot of the current framebuffer.
    pub fn framebuffer(&self) -> RenderResult<Framebuffer> {
        Ok(self.lock_framebuffer()?.clone())
    }

    fn update_config(&mut self, config: RenderConfig) -> RenderResult<()> {
        config.validate(self.width, self.height)?;
        self.config = config;
        Ok(())
    }

    fn lock_framebuffer(&self) -> RenderResult<std::sync::MutexGuard<'_, Framebuffer>> {
        self.framebuffer
            .lock()
            .map_err(|_| RenderError::FramebufferPoisoned)
    }
}
