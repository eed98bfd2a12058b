// Re-export glam for convenience
pub use glam::*;

// YAR math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_length_of_difference() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(1.0, 2.0, 6.0);
        assert_eq!((a - b).length(), 3.0);
    }

    #[test]
    fn test_vec3_normalize() {
        let v = Vec3::new(-1.0, -1.0, 1.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }
}
