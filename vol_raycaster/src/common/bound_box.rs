use nalgebra::{Point3, Vector3};

use super::Ray;

/// Axis aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundBox {
    pub lower: Point3<f32>,
    pub upper: Point3<f32>,
}

impl BoundBox {
    pub fn new(lower: Point3<f32>, upper: Point3<f32>) -> BoundBox {
        BoundBox { lower, upper }
    }

    /// Box spanning voxel centers of a volume with `size` samples per axis.
    /// Samples live on integer coordinates, so the last one sits at `size - 1`.
    pub fn from_volume_size(size: Vector3<usize>) -> BoundBox {
        let upper = size.map(|v| v.saturating_sub(1) as f32);
        BoundBox::new(Point3::origin(), Point3::from(upper))
    }

    /// Corner selected by `sign`: `false` is the lower corner, `true` the upper one.
    fn corner(&self, sign: bool) -> &Point3<f32> {
        if sign {
            &self.upper
        } else {
            &self.lower
        }
    }

    /// Slab test. Returns `(tmin, tmax)`, distances along the ray where it
    /// enters and exits the box, or `None` on a miss.
    ///
    /// The ray itself is not modified. A box lying entirely behind the ray
    /// origin is a miss. When the origin is inside the box, `tmin` is negative.
    pub fn intersect(&self, ray: &Ray) -> Option<(f32, f32)> {
        // Source: An Efficient and Robust Ray–Box Intersection Algorithm. Amy Williams et al. 2004.
        let inv_dir = ray.direction.map(|d| 1.0 / d);
        let sign = inv_dir.map(|d| d < 0.0);

        let mut tmin = (self.corner(sign.x).x - ray.origin.x) * inv_dir.x;
        let mut tmax = (self.corner(!sign.x).x - ray.origin.x) * inv_dir.x;
        let tymin = (self.corner(sign.y).y - ray.origin.y) * inv_dir.y;
        let tymax = (self.corner(!sign.y).y - ray.origin.y) * inv_dir.y;

        if tmin > tymax || tymin > tmax {
            return None;
        }
        tmin = f32::max(tmin, tymin);
        tmax = f32::min(tmax, tymax);

        let tzmin = (self.corner(sign.z).z - ray.origin.z) * inv_dir.z;
        let tzmax = (self.corner(!sign.z).z - ray.origin.z) * inv_dir.z;

        if tmin > tzmax || tzmin > tmax {
            return None;
        }
        tmin = f32::max(tmin, tzmin);
        tmax = f32::min(tmax, tzmax);

        // whole box is behind the origin
        if tmax < 0.0 {
            return None;
        }

        Some((tmin, tmax))
    }
}
