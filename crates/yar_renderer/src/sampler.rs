//! Adaptive per-pixel sampling.
//!
//! Every pixel starts with two samples. When they agree to within
//! [`SMALL_FLOAT`] the pixel is treated as converged and the remaining
//! samples are skipped. Comparing two samples is only a coarse proxy for the
//! pixel's variance; a flat region and an edge that happens to return equal
//! first samples look the same to it.

use crate::error::RenderResult;
use yar_math::Vec3;

/// Convergence threshold on the distance between the first two samples.
pub const SMALL_FLOAT: f32 = 1e-4;

/// Samples taken before the convergence check.
pub const INITIAL_SAMPLES: u32 = 2;

/// Result of evaluating one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelEstimate {
    /// Arithmetic mean of the samples taken
    pub color: Vec3,
    /// Number of samples actually taken
    pub samples: u32,
}

/// Adaptive sampling policy for a single pixel.
#[derive(Debug, Clone, Copy)]
pub struct PixelSampler {
    samples_per_pixel: u32,
    adaptive: bool,
}

impl PixelSampler {
    /// `samples_per_pixel` must be at least 1; configuration validation
    /// guarantees this before a render starts.
    pub fn new(samples_per_pixel: u32, adaptive: bool) -> Self {
        Self {
            samples_per_pixel,
            adaptive,
        }
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    /// Allocate a sample buffer sized for this sampler.
    ///
    /// Reuse one buffer for all pixels of a tile.
    pub fn buffer(&self) -> Vec<Vec3> {
        Vec::with_capacity(self.samples_per_pixel as usize)
    }

    /// Evaluate one pixel. `sample` is called with the sample index and
    /// returns that sample's color.
    pub fn evaluate<F>(&self, samples: &mut Vec<Vec3>, mut sample: F) -> RenderResult<PixelEstimate>
    where
        F: FnMut(u32) -> RenderResult<Vec3>,
    {
        samples.clear();

        let initial = INITIAL_SAMPLES.min(self.samples_per_pixel);
        for index in 0..initial {
            samples.push(sample(index)?);
        }

        if !self.adaptive || !self.converged(samples) {
            for index in initial..self.samples_per_pixel {
                samples.push(sample(index)?);
            }
        }

        debug_assert!(samples.len() <= self.samples_per_pixel as usize);

        let count = samples.len() as u32;
        let sum: Vec3 = samples.iter().copied().sum();
        Ok(PixelEstimate {
            color: sum / count as f32,
            samples: count,
        })
    }

    fn converged(&self, samples: &[Vec3]) -> bool {
        match samples {
            [first, second, ..] => (*first - *second).length() <= SMALL_FLOAT,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;

    fn constant(color: Vec3) -> impl FnMut(u32) -> RenderResult<Vec3> {
        move |_| Ok(color)
    }

    #[test]
    fn test_converged_pixel_stops_at_two() {
        let sampler = PixelSampler::new(8, true);
        let mut buffer = sampler.buffer();
        let mut calls = 0;

        let estimate = sampler
            .evaluate(&mut buffer, |_| {
                calls += 1;
                Ok(Vec3::splat(0.5))
            })
            .unwrap();

        assert_eq!(calls, 2);
        assert_eq!(estimate.samples, 2);
        assert_eq!(estimate.color, Vec3::splat(0.5));
    }

    #[test]
    fn test_average_of_exactly_two_samples() {
        let sampler = PixelSampler::new(8, true);
        let mut buffer = sampler.buffer();

        // Below the threshold, later samples would pull the mean far away
        let tiny = SMALL_FLOAT / 2.0;
        let estimate = sampler
            .evaluate(&mut buffer, |i| {
                Ok(match i {
                    0 => Vec3::ZERO,
                    1 => Vec3::new(tiny, 0.0, 0.0),
                    _ => Vec3::ONE,
                })
            })
            .unwrap();

        assert_eq!(estimate.samples, 2);
        assert_eq!(estimate.color, Vec3::new(tiny / 2.0, 0.0, 0.0));
    }

    #[test]
    fn test_divergent_pixel_takes_all_samples() {
        let sampler = PixelSampler::new(8, true);
        let mut buffer = sampler.buffer();

        let estimate = sampler
            .evaluate(&mut buffer, |i| Ok(Vec3::splat(i as f32)))
            .unwrap();

        assert_eq!(estimate.samples, 8);
        assert_eq!(estimate.color, Vec3::splat(3.5));
    }

    #[test]
    fn test_disabled_adaptive_always_takes_all_samples() {
        let sampler = PixelSampler::new(6, false);
        let mut buffer = sampler.buffer();
        let mut indices = Vec::new();

        let estimate = sampler
            .evaluate(&mut buffer, |i| {
                indices.push(i);
                Ok(Vec3::ONE)
            })
            .unwrap();

        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(estimate.samples, 6);
        assert_eq!(estimate.color, Vec3::ONE);
    }

    #[test]
    fn test_single_sample_per_pixel() {
        let sampler = PixelSampler::new(1, true);
        let mut buffer = sampler.buffer();

        let estimate = sampler
            .evaluate(&mut buffer, constant(Vec3::X))
            .unwrap();
        assert_eq!(estimate.samples, 1);
        assert_eq!(estimate.color, Vec3::X);
    }

    #[test]
    fn test_buffer_is_cleared_between_pixels() {
        let sampler = PixelSampler::new(4, false);
        let mut buffer = sampler.buffer();

        sampler.evaluate(&mut buffer, constant(Vec3::ONE)).unwrap();
        let estimate = sampler.evaluate(&mut buffer, constant(Vec3::ZERO)).unwrap();

        assert_eq!(estimate.samples, 4);
        assert_eq!(estimate.color, Vec3::ZERO);
        assert!(buffer.capacity() >= 4);
    }

    #[test]
    fn test_sample_error_propagates() {
        let sampler = PixelSampler::new(4, true);
        let mut buffer = sampler.buffer();

        let result = sampler.evaluate(&mut buffer, |i| {
            if i == 1 {
                Err(RenderError::MalformedHit { distance: f32::NAN })
            } else {
                Ok(Vec3::ZERO)
            }
        });
        assert!(matches!(result, Err(RenderError::MalformedHit { .. })));
    }
}
