use crate::common::{BoundBox, ValueRange};

use nalgebra::{Point3, Vector3};

/// Scalar field sampled on integer coordinates `0..size` on every axis.
// Volume assumes f32 data
// Volume is axis aligned, lowest corner at origin
pub trait Volume {
    /// Get data dimensions
    fn get_size(&self) -> Vector3<usize>;

    /// Range of sample values
    fn get_value_range(&self) -> ValueRange;

    /// Highest sample value, used to normalize samples
    fn maximum(&self) -> f32 {
        self.get_value_range().high
    }

    /// Trilinear interpolation sample, zero if outside
    fn sample_at(&self, pos: Point3<f32>) -> f32;

    /// Raw sample, `None` if outside
    fn get_data(&self, x: usize, y: usize, z: usize) -> Option<f32>;

    fn get_bound_box(&self) -> BoundBox {
        BoundBox::from_volume_size(self.get_size())
    }

    fn get_name(&self) -> &str;
}

/// Gradient of a volume at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSample {
    pub direction: Vector3<f32>,
    pub magnitude: f32,
}

impl GradientSample {
    pub fn new(direction: Vector3<f32>, magnitude: f32) -> GradientSample {
        GradientSample {
            direction,
            magnitude,
        }
    }

    pub fn zero() -> GradientSample {
        GradientSample::new(Vector3::zeros(), 0.0)
    }
}

/// Precomputed gradient of a volume, same grid as the volume.
pub trait GradientField {
    /// Trilinear interpolation of direction and magnitude, zero if outside
    fn sample_at(&self, pos: Point3<f32>) -> GradientSample;

    /// Range of gradient magnitudes over all voxels
    fn get_magnitude_range(&self) -> ValueRange;

    fn min_magnitude(&self) -> f32 {
        self.get_magnitude_range().low
    }

    fn max_magnitude(&self) -> f32 {
        self.get_magnitude_range().high
    }
}
