use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use yar_renderer::{PinholeCamera, RenderConfig, Renderer};

mod cli;
mod logger;
mod scene;

use cli::Args;
use logger::init_logger;
use scene::demo_scene;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    log::info!("Starting YAR");

    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str::<RenderConfig>(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => args.render_config(),
    };

    let mut renderer = Renderer::with_config(args.width, args.height, config)
        .context("Invalid render configuration")?;
    for object in demo_scene() {
        renderer.add_renderable(object);
    }

    let camera = PinholeCamera::new(args.width, args.height)
        .with_fov(50.0)
        .with_jitter(args.jitter);

    let stats = renderer.render(&camera)?;
    let pixels = args.width as u64 * args.height as u64;
    log::info!(
        "{:.2} samples per pixel on average",
        stats.samples as f64 / pixels as f64
    );

    renderer
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}
