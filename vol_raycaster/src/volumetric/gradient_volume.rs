use nalgebra::{vector, Point3, Vector3};

use crate::common::ValueRange;

use super::{linear_volume::Cell, GradientField, GradientSample, Volume};

/// Gradient of a volume, computed once by finite differences.
///
/// Central differences inside the grid, one-sided differences on its faces.
pub struct GradientVolume {
    size: Vector3<usize>,
    data: Vec<GradientSample>,
    magnitude_range: ValueRange,
}

impl std::fmt::Debug for GradientVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradientVolume")
            .field("size", &self.size)
            .field("magnitude range", &self.magnitude_range)
            .finish()
    }
}

impl GradientVolume {
    pub fn from_volume<V>(volume: &V) -> GradientVolume
    where
        V: Volume + ?Sized,
    {
        let size = volume.get_size();
        let mut data = Vec::with_capacity(size.x * size.y * size.z);

        for x in 0..size.x {
            for y in 0..size.y {
                for z in 0..size.z {
                    let direction = vector![
                        difference(size.x, x, |i| volume.get_data(i, y, z)),
                        difference(size.y, y, |i| volume.get_data(x, i, z)),
                        difference(size.z, z, |i| volume.get_data(x, y, i))
                    ];
                    data.push(GradientSample::new(direction, direction.norm()));
                }
            }
        }

        let magnitude_range = ValueRange::from_samples(data.iter().map(|g| g.magnitude));

        GradientVolume {
            size,
            data,
            magnitude_range,
        }
    }

    fn get_3d_index(&self, x: usize, y: usize, z: usize) -> usize {
        z + y * self.size.z + x * self.size.y * self.size.z
    }

    pub fn get_data(&self, x: usize, y: usize, z: usize) -> Option<GradientSample> {
        if x >= self.size.x || y >= self.size.y || z >= self.size.z {
            return None;
        }
        self.data.get(self.get_3d_index(x, y, z)).copied()
    }
}

/// Finite difference along one axis at index `i` of `len` samples.
fn difference<F>(len: usize, i: usize, get: F) -> f32
where
    F: Fn(usize) -> Option<f32>,
{
    if len < 2 {
        return 0.0;
    }
    let (low, high) = if i == 0 {
        (0, 1)
    } else if i == len - 1 {
        (len - 2, len - 1)
    } else {
        (i - 1, i + 1)
    };
    let low_val = get(low).unwrap_or(0.0);
    let high_val = get(high).unwrap_or(0.0);
    (high_val - low_val) / (high - low) as f32
}

impl GradientField for GradientVolume {
    fn sample_at(&self, pos: Point3<f32>) -> GradientSample {
        let cell = match Cell::at(self.size, pos) {
            Some(cell) => cell,
            None => return GradientSample::zero(),
        };

        let direction = cell.interpolate(|x, y, z| self.data[self.get_3d_index(x, y, z)].direction);
        let magnitude = cell.interpolate(|x, y, z| self.data[self.get_3d_index(x, y, z)].magnitude);
        GradientSample::new(direction, magnitude)
    }

    fn get_magnitude_range(&self) -> ValueRange {
        self.magnitude_range
    }
}
