//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitInfo, Intersectable},
    Material,
};
use std::sync::Arc;
use yar_math::{Interval, Ray, Vec3};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Intersectable for Sphere {
    fn trace<'a>(&'a self, ray: &Ray) -> Option<HitInfo<'a>> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 || a == 0.0 || self.radius == 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !Interval::FORWARD.surrounds(root) {
            root = (h + sqrtd) / a;
            if !Interval::FORWARD.surrounds(root) {
                return None;
            }
        }

        let normal = (ray.at(root) - self.center) / self.radius;
        Some(HitInfo::new(root, normal, &self.material))
    }
}
