//! Intersectable trait and HitInfo for ray-object intersection.

use crate::Material;
use yar_math::{Ray, Vec3};

/// Distance of a ray that hit nothing.
pub const NO_HIT_DISTANCE: f32 = f32::MAX;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitInfo<'a> {
    /// Ray parameter t where the intersection occurs
    pub distance: f32,
    /// Surface normal at the intersection (unit length)
    pub normal: Vec3,
    /// Material of the object that was hit
    pub material: &'a Material,
}

impl<'a> HitInfo<'a> {
    pub fn new(distance: f32, normal: Vec3, material: &'a Material) -> Self {
        Self {
            distance,
            normal,
            material,
        }
    }

    /// A hit is usable only with a finite distance below [`NO_HIT_DISTANCE`]
    /// and a finite normal.
    pub fn is_valid(&self) -> bool {
        self.distance.is_finite() && self.distance < NO_HIT_DISTANCE && self.normal.is_finite()
    }
}

/// Trait for scene objects that can be hit by rays.
///
/// Implementations are shared between render workers and must not mutate
/// state while tracing.
pub trait Intersectable: Send + Sync {
    /// Test if a ray hits this object in front of its origin.
    ///
    /// Returns the closest hit on this object, if any.
    fn trace<'a>(&'a self, ray: &Ray) -> Option<HitInfo<'a>>;
}
