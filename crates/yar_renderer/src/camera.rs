//! Ray sources: map pixel coordinates to world-space rays.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use yar_math::{Ray, Vec3};

/// Produces primary rays for pixels.
///
/// A ray source is shared read-only by every render worker during a pass.
pub trait RaySource: Send + Sync {
    /// The ray through pixel `(x, y)`. Must be a pure function of the
    /// coordinates and the source's fixed state.
    fn ray(&self, x: u32, y: u32) -> Ray;

    /// The ray used for the `sample_index`-th sample of pixel `(x, y)`.
    ///
    /// Defaults to [`RaySource::ray`]; sources that jitter inside the pixel
    /// override this and must stay deterministic per `(x, y, sample_index)`.
    fn sample_ray(&self, x: u32, y: u32, sample_index: u32) -> Ray {
        let _ = sample_index;
        self.ray(x, y)
    }
}

/// Pinhole camera generating rays through pixel centers.
#[derive(Debug, Clone)]
pub struct PinholeCamera {
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,
    vfov: f32, // Vertical field of view in degrees

    jitter: bool,

    // Cached computed values (set by initialize())
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl PinholeCamera {
    /// Create a camera at the origin looking down +Z.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        let mut camera = Self {
            image_width,
            image_height,
            look_from: Vec3::ZERO,
            look_at: Vec3::Z,
            vup: Vec3::Y,
            vfov: 60.0,
            jitter: false,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
        };
        camera.initialize();
        camera
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.initialize();
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self.initialize();
        self
    }

    /// Enable deterministic sub-pixel jitter for samples after the first.
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn origin(&self) -> Vec3 {
        self.look_from
    }

    fn initialize(&mut self) {
        let height = self.image_height.max(1) as f32;
        let width = self.image_width.max(1) as f32;

        let theta = self.vfov.to_radians();
        let viewport_height = 2.0 * (theta / 2.0).tan();
        let viewport_width = viewport_height * (width / height);

        // Camera basis: w points backwards, u to the right, v up
        let w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(w).normalize();
        let v = w.cross(u);

        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        self.pixel_delta_u = viewport_u / width;
        self.pixel_delta_v = viewport_v / height;

        let viewport_upper_left = self.look_from - w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }

    fn ray_through(&self, x: f32, y: f32) -> Ray {
        let pixel_sample = self.pixel00_loc + x * self.pixel_delta_u + y * self.pixel_delta_v;
        Ray::new(self.look_from, pixel_sample - self.look_from)
    }
}

impl RaySource for PinholeCamera {
    fn ray(&self, x: u32, y: u32) -> Ray {
        self.ray_through(x as f32, y as f32)
    }

    fn sample_ray(&self, x: u32, y: u32, sample_index: u32) -> Ray {
        if !self.jitter || sample_index == 0 {
            return self.ray(x, y);
        }

        let mut rng = StdRng::seed_from_u64(pixel_seed(x, y, sample_index));
        let dx = rng.gen::<f32>() - 0.5;
        let dy = rng.gen::<f32>() - 0.5;
        self.ray_through(x as f32 + dx, y as f32 + dy)
    }
}

/// Mix pixel coordinates and sample index into one seed.
fn pixel_seed(x: u32, y: u32, sample_index: u32) -> u64 {
    let packed = (x as u64) << 32 | y as u64;
    packed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ (sample_index as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_forward() {
        let camera = PinholeCamera::new(100, 100);

        let ray = camera.ray(50, 50);
        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!(ray.direction().z > 0.0);
        assert!(ray.direction().x.abs() < 0.02);
        assert!(ray.direction().y.abs() < 0.02);
    }

    #[test]
    fn test_image_axes() {
        let camera = PinholeCamera::new(100, 100);

        // Looking down +Z with +Y up, screen-right is world -X; y grows downwards
        assert!(camera.ray(99, 50).direction().x < camera.ray(0, 50).direction().x);
        assert!(camera.ray(50, 99).direction().y < camera.ray(50, 0).direction().y);
    }

    #[test]
    fn test_with_position() {
        let camera = PinholeCamera::new(10, 10).with_position(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
        );
        let ray = camera.ray(5, 5);
        assert_eq!(ray.origin(), Vec3::new(0.0, 0.0, 5.0));
        assert!(ray.direction().z < 0.0);
    }

    #[test]
    fn test_sample_ray_without_jitter_matches_ray() {
        let camera = PinholeCamera::new(10, 10);
        assert_eq!(camera.sample_ray(3, 4, 5), camera.ray(3, 4));
    }

    #[test]
    fn test_jitter_is_deterministic() {
        let camera = PinholeCamera::new(10, 10).with_jitter(true);

        assert_eq!(camera.sample_ray(3, 4, 0), camera.ray(3, 4));
        assert_eq!(camera.sample_ray(3, 4, 1), camera.sample_ray(3, 4, 1));
        assert_ne!(camera.sample_ray(3, 4, 1), camera.sample_ray(3, 4, 2));
    }
}
