//! Error types for the renderer.

use thiserror::Error;

/// Errors that can occur while configuring, rendering or saving.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image must have non-zero size, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("tiles_per_row must be at least 1")]
    ZeroTilesPerRow,

    #[error("{tiles_per_row} tiles per row overflow the tile count")]
    TooManyTiles { tiles_per_row: u32 },

    #[error("samples_per_pixel must be at least 1")]
    ZeroSamplesPerPixel,

    #[error("Intersectable reported a malformed hit (distance {distance})")]
    MalformedHit { distance: f32 },

    #[error("Framebuffer lock was poisoned by a panicking worker")]
    FramebufferPoisoned,

    #[error("Render cancelled after {finished} of {total} tiles")]
    Cancelled { finished: u32, total: u32 },

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
