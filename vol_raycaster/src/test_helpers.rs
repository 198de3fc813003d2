//! Module with helper functions
//! Saves repetition in unit tests, integration tests and benchmarks

use nalgebra::{point, vector, Vector3};

use crate::volumetric::{GradientVolume, LinearVolume, Volume};

/// Highest sample of generated volumes
pub const MAX_SAMPLE: f32 = 255.0;

/// Cube volume with every sample equal to `value`
pub fn constant_volume(side: usize, value: f32) -> LinearVolume {
    LinearVolume::from_fn(vector![side, side, side], |_, _, _| value)
        .expect("side must be non-zero")
}

/// Samples grow linearly along x axis, `slope` per voxel
pub fn ramp_volume(size: Vector3<usize>, slope: f32) -> LinearVolume {
    LinearVolume::from_fn(size, |x, _, _| x as f32 * slope).expect("size must be non-zero")
}

/// Cube volume with a ball in the middle.
/// Samples fall off linearly from [`MAX_SAMPLE`] in the center to zero at the ball surface.
pub fn sphere_volume(side: usize) -> LinearVolume {
    let center = (side as f32 - 1.0) / 2.0;
    let center = point![center, center, center];
    let radius = side as f32 / 2.0;
    LinearVolume::from_fn(vector![side, side, side], |x, y, z| {
        let dist = (point![x as f32, y as f32, z as f32] - center).norm();
        f32::max(0.0, 1.0 - dist / radius) * MAX_SAMPLE
    })
    .expect("side must be non-zero")
}

/// Pair volume with its gradient
pub fn with_gradient<V>(volume: V) -> (V, GradientVolume)
where
    V: Volume,
{
    let gradient = GradientVolume::from_volume(&volume);
    (volume, gradient)
}
