use log::warn;
use nalgebra::{Point3, Vector3};

use crate::common::ValueRange;

use super::{Volume, VolumeError};

/// Volume stored in one contiguous buffer.
/// Sample `[x, y, z]` lives at index `z + y * size.z + x * size.y * size.z`.
pub struct LinearVolume {
    size: Vector3<usize>,
    data: Vec<f32>,
    value_range: ValueRange,
}

impl std::fmt::Debug for LinearVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearVolume")
            .field("size", &self.size)
            .field("data len ", &self.data.len())
            .field("value range", &self.value_range)
            .finish()
    }
}

impl LinearVolume {
    /// Construct volume from samples in [`LinearVolume`] order.
    pub fn new(size: Vector3<usize>, data: Vec<f32>) -> Result<LinearVolume, VolumeError> {
        if size.iter().any(|&s| s == 0) {
            return Err(VolumeError::ZeroDimension);
        }
        let expected = size.x * size.y * size.z;
        if data.len() != expected {
            return Err(VolumeError::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        let value_range = ValueRange::from_samples(data.iter().copied());
        if value_range.high <= 0.0 {
            warn!("Volume {size:?} has no positive samples, normalized samples will be zero");
        }

        Ok(LinearVolume {
            size,
            data,
            value_range,
        })
    }

    /// Construct volume by evaluating `f` on every grid point.
    pub fn from_fn<F>(size: Vector3<usize>, mut f: F) -> Result<LinearVolume, VolumeError>
    where
        F: FnMut(usize, usize, usize) -> f32,
    {
        let mut data = Vec::with_capacity(size.x * size.y * size.z);
        for x in 0..size.x {
            for y in 0..size.y {
                for z in 0..size.z {
                    data.push(f(x, y, z));
                }
            }
        }
        LinearVolume::new(size, data)
    }

    fn get_3d_index(&self, x: usize, y: usize, z: usize) -> usize {
        z + y * self.size.z + x * self.size.y * self.size.z
    }
}

/// Eight grid points surrounding a position, with interpolation weights.
pub(super) struct Cell {
    pub low: Point3<usize>,
    pub high: Point3<usize>,
    pub t: Vector3<f32>,
}

impl Cell {
    /// `None` if `pos` lies outside the grid (or is NaN).
    pub fn at(size: Vector3<usize>, pos: Point3<f32>) -> Option<Cell> {
        let inside = (0..3).all(|i| pos[i] >= 0.0 && pos[i] <= (size[i] - 1) as f32);
        if !inside {
            return None;
        }

        let low = pos.map(|v| v as usize);
        let high = Point3::from(low.coords.zip_map(&size, |l, s| usize::min(l + 1, s - 1)));
        let t = pos.coords.map(f32::fract);
        Some(Cell { low, high, t })
    }

    /// Trilinear blend of the eight corner values, fetched by `get`.
    pub fn interpolate<T, F>(&self, get: F) -> T
    where
        T: std::ops::Mul<f32, Output = T> + std::ops::Add<Output = T> + Copy,
        F: Fn(usize, usize, usize) -> T,
    {
        let (l, h, t) = (&self.low, &self.high, &self.t);
        let lerp = |a: T, b: T, t: f32| a * (1.0 - t) + b * t;

        // x planes
        let c00 = lerp(get(l.x, l.y, l.z), get(h.x, l.y, l.z), t.x);
        let c01 = lerp(get(l.x, l.y, h.z), get(h.x, l.y, h.z), t.x);
        let c10 = lerp(get(l.x, h.y, l.z), get(h.x, h.y, l.z), t.x);
        let c11 = lerp(get(l.x, h.y, h.z), get(h.x, h.y, h.z), t.x);

        // y lines
        let c0 = lerp(c00, c10, t.y);
        let c1 = lerp(c01, c11, t.y);

        lerp(c0, c1, t.z)
    }
}

impl Volume for LinearVolume {
    fn get_size(&self) -> Vector3<usize> {
        self.size
    }

    fn get_value_range(&self) -> ValueRange {
        self.value_range
    }

    fn sample_at(&self, pos: Point3<f32>) -> f32 {
        match Cell::at(self.size, pos) {
            Some(cell) => cell.interpolate(|x, y, z| self.data[self.get_3d_index(x, y, z)]),
            None => 0.0,
        }
    }

    fn get_data(&self, x: usize, y: usize, z: usize) -> Option<f32> {
        if x >= self.size.x || y >= self.size.y || z >= self.size.z {
            return None;
        }
        self.data.get(self.get_3d_index(x, y, z)).copied()
    }

    fn get_name(&self) -> &str {
        "LinearVolume"
    }
}
