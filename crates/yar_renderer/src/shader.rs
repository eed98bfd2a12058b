//! Direct-lighting shader.
//!
//! Finds the closest hit among all scene objects and applies a single
//! directional light with a lambertian term plus a constant ambient floor.
//! No shadows, no bounces.

use crate::error::{RenderError, RenderResult};
use crate::hittable::{HitInfo, Intersectable};
use std::sync::Arc;
use yar_math::{Ray, Vec3};

/// World-space direction the light travels in.
pub const LIGHT_DIRECTION: Vec3 = Vec3::new(-1.0, -1.0, 1.0);

/// Ambient term added to the lambertian factor before clamping.
pub const AMBIENT: f32 = 0.1;

/// Fixed single-light lambertian shader.
#[derive(Debug, Clone, Copy)]
pub struct Shader {
    /// Unit vector pointing from surfaces towards the light
    to_light: Vec3,
    ambient: f32,
}

impl Shader {
    pub fn new(light_direction: Vec3, ambient: f32) -> Self {
        Self {
            to_light: -light_direction.normalize(),
            ambient,
        }
    }

    /// Compute the color seen along `ray`.
    ///
    /// Returns black when no object is hit. Fails if any object reports a
    /// hit with a non-finite distance or normal.
    pub fn shade(&self, ray: &Ray, renderables: &[Arc<dyn Intersectable>]) -> RenderResult<Vec3> {
        Ok(match closest_hit(ray, renderables)? {
            Some(hit) => self.lambert(&hit),
            None => Vec3::ZERO,
        })
    }

    /// Light factor in `[ambient, 1]` for a surface normal.
    pub fn light_value(&self, normal: Vec3) -> f32 {
        let ndotl = normal.dot(self.to_light).max(0.0);
        (ndotl + self.ambient).min(1.0)
    }

    fn lambert(&self, hit: &HitInfo) -> Vec3 {
        hit.material.color.to_vector() * self.light_value(hit.normal)
    }
}

impl Default for Shader {
    fn default() -> Self {
        Self::new(LIGHT_DIRECTION, AMBIENT)
    }
}

/// Query every object in insertion order and keep the nearest hit.
///
/// Ties keep the earlier object.
pub fn closest_hit<'a>(
    ray: &Ray,
    renderables: &'a [Arc<dyn Intersectable>],
) -> RenderResult<Option<HitInfo<'a>>> {
    let mut closest: Option<HitInfo<'a>> = None;

    for renderable in renderables {
        let Some(hit) = renderable.trace(ray) else {
            continue;
        };
        if !hit.is_valid() {
            return Err(RenderError::MalformedHit {
                distance: hit.distance,
            });
        }
        if closest.map_or(true, |c| hit.distance < c.distance) {
            closest = Some(hit);
        }
    }

    Ok(closest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Material, Sphere};

    /// Reports a fixed hit for every ray.
    struct FixedHit {
        distance: f32,
        normal: Vec3,
        material: Material,
    }

    impl Intersectable for FixedHit {
        fn trace<'a>(&'a self, _ray: &Ray) -> Option<HitInfo<'a>> {
            Some(HitInfo::new(self.distance, self.normal, &self.material))
        }
    }

    fn fixed(distance: f32, normal: Vec3, color: Color) -> Arc<dyn Intersectable> {
        Arc::new(FixedHit {
            distance,
            normal,
            material: Material::new(color),
        })
    }

    fn forward_ray() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::Z)
    }

    #[test]
    fn test_miss_is_black() {
        let shader = Shader::default();
        assert_eq!(shader.shade(&forward_ray(), &[]).unwrap(), Vec3::ZERO);

        let away: Vec<Arc<dyn Intersectable>> = vec![Arc::new(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Arc::new(Material::default()),
        ))];
        assert_eq!(shader.shade(&forward_ray(), &away).unwrap(), Vec3::ZERO);
    }

    #[test]
    fn test_closest_hit_wins() {
        let to_light = -LIGHT_DIRECTION.normalize();
        let scene = vec![
            fixed(5.0, to_light, Color::from_rgb(255, 0, 0)),
            fixed(2.0, to_light, Color::from_rgb(0, 255, 0)),
            fixed(9.0, to_light, Color::from_rgb(0, 0, 255)),
        ];

        let color = Shader::default().shade(&forward_ray(), &scene).unwrap();
        assert_eq!(color, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_equal_distance_keeps_first() {
        let to_light = -LIGHT_DIRECTION.normalize();
        let scene = vec![
            fixed(3.0, to_light, Color::from_rgb(255, 0, 0)),
            fixed(3.0, to_light, Color::from_rgb(0, 255, 0)),
        ];

        let hit = closest_hit(&forward_ray(), &scene).unwrap().unwrap();
        assert_eq!(hit.material.color, Color::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_facing_light_is_full_color() {
        let shader = Shader::default();
        let to_light = -LIGHT_DIRECTION.normalize();
        assert_eq!(shader.light_value(to_light), 1.0);
    }

    #[test]
    fn test_facing_away_is_ambient() {
        let shader = Shader::default();
        let away = LIGHT_DIRECTION.normalize();
        assert!((shader.light_value(away) - AMBIENT).abs() < 1e-6);
        assert!((shader.light_value(Vec3::Z) - AMBIENT).abs() < 1e-6);
        assert!((shader.light_value(Vec3::NEG_X) - AMBIENT).abs() < 1e-6);
    }

    #[test]
    fn test_light_value_is_monotonic_in_ndotl() {
        let shader = Shader::default();
        let to_light = -LIGHT_DIRECTION.normalize();

        let mut previous = 0.0;
        for i in 0..=10 {
            // Rotate from perpendicular towards the light
            let t = i as f32 / 10.0;
            let normal = (Vec3::X * (1.0 - t) + to_light * t).normalize();
            let value = shader.light_value(normal);
            let expected = (normal.dot(to_light).max(0.0) + AMBIENT).min(1.0);
            assert!((value - expected).abs() < 1e-6);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_color_is_scaled_material() {
        let scene = vec![fixed(1.0, Vec3::NEG_Z, Color::WHITE)];
        let color = Shader::default().shade(&forward_ray(), &scene).unwrap();
        let expected = Vec3::splat(Shader::default().light_value(Vec3::NEG_Z));
        assert!((color - expected).length() < 1e-6);
    }

    #[test]
    fn test_malformed_hit_is_fatal() {
        let scene = vec![fixed(f32::NAN, Vec3::Z, Color::WHITE)];
        let result = Shader::default().shade(&forward_ray(), &scene);
        assert!(matches!(result, Err(RenderError::MalformedHit { .. })));
    }
}
