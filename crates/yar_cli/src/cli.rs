use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;
use yar_renderer::RenderConfig;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "yar")]
#[command(about = "Tile-parallel CPU ray tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Maximum samples per pixel
    #[arg(long, short = 's', default_value_t = 8)]
    pub samples: u32,

    /// Always take every sample instead of stopping on converged pixels
    #[arg(long)]
    pub no_adaptive: bool,

    /// Tiles along each image axis
    #[arg(long, default_value_t = 8)]
    pub tiles_per_row: u32,

    /// JSON render configuration; replaces --samples, --no-adaptive and --tiles-per-row
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Jitter samples inside each pixel
    #[arg(long)]
    pub jitter: bool,

    /// Output file (.tga, .png, .bmp, ...)
    #[arg(long, short = 'o', default_value = "render.tga")]
    pub output: PathBuf,

    /// Logging level (overridden per module by RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    /// Render configuration from the command-line flags.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            samples_per_pixel: self.samples,
            adaptive_sampling: !self.no_adaptive,
            tiles_per_row: self.tiles_per_row,
        }
    }
}
