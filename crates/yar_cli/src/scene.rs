//! Demo scene used by the command-line renderer.

use std::sync::Arc;
use yar_renderer::{Color, Intersectable, Material, Sphere, Triangle, Vec3};

/// Three spheres above a floor made of two triangles, in front of a camera
/// at the origin looking down +Z.
pub fn demo_scene() -> Vec<Arc<dyn Intersectable>> {
    let mut objects: Vec<Arc<dyn Intersectable>> = Vec::new();

    let floor = Arc::new(Material::new(Color::from_rgb(110, 110, 120)));
    let corners = [
        Vec3::new(-10.0, -1.0, 2.0),
        Vec3::new(10.0, -1.0, 2.0),
        Vec3::new(10.0, -1.0, 30.0),
        Vec3::new(-10.0, -1.0, 30.0),
    ];
    objects.push(Arc::new(Triangle::new(corners[0], corners[1], corners[2], floor.clone())));
    objects.push(Arc::new(Triangle::new(corners[0], corners[2], corners[3], floor)));

    let spheres = [
        (Vec3::new(-2.2, 0.0, 7.0), 1.0, Color::from_rgb(230, 70, 60)),
        (Vec3::new(0.0, 0.3, 6.0), 1.3, Color::from_rgb(240, 240, 240)),
        (Vec3::new(2.2, 0.0, 7.0), 1.0, Color::from_rgb(60, 110, 230)),
    ];
    for (center, radius, color) in spheres {
        objects.push(Arc::new(Sphere::new(center, radius, Arc::new(Material::new(color)))));
    }

    objects
}
