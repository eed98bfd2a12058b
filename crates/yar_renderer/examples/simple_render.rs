//! Simple render example.
//!
//! Renders a few spheres on a triangle floor and saves a TGA image.

use std::sync::Arc;
use yar_renderer::{
    Color, Material, PinholeCamera, RenderConfig, Renderer, Sphere, Triangle, Vec3,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("YAR Ray Tracer - Simple Example");
    println!("===============================");

    let (width, height) = (640, 480);
    let config = RenderConfig {
        samples_per_pixel: 16,
        adaptive_sampling: true,
        tiles_per_row: 8,
    };

    let mut renderer = Renderer::with_config(width, height, config)?;

    let floor = Arc::new(Material::new(Color::from_rgb(120, 120, 120)));
    renderer.add_renderable(Arc::new(Triangle::new(
        Vec3::new(-20.0, -1.0, 0.0),
        Vec3::new(20.0, -1.0, 0.0),
        Vec3::new(0.0, -1.0, 40.0),
        floor,
    )));

    let colors = [
        Color::from_rgb(220, 60, 50),
        Color::from_rgb(60, 200, 80),
        Color::from_rgb(60, 90, 230),
    ];
    for (i, color) in colors.into_iter().enumerate() {
        renderer.add_renderable(Arc::new(Sphere::new(
            Vec3::new(-2.5 + 2.5 * i as f32, 0.0, 6.0),
            1.0,
            Arc::new(Material::new(color)),
        )));
    }

    let camera = PinholeCamera::new(width, height).with_jitter(true);

    let stats = renderer.render(&camera)?;
    println!(
        "Rendered {}x{} in {:?} ({} samples)",
        width, height, stats.elapsed, stats.samples
    );

    let filename = "output.tga";
    renderer.save(filename)?;
    println!("Saved to {}", filename);

    Ok(())
}
