use nalgebra::{Point3, Vector3};

/// Ray cast by camera.
/// Main usecase is getting intersections with volumes ([`BoundBox::intersect`](super::BoundBox::intersect)),
/// then iterating over the intersected line segment in steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Construct new ray using `origin` and `direction`.
    /// `direction` must be unit vector.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Ray {
        Ray { origin, direction }
    }

    /// Returns point `t` units far from ray origin in ray direction
    pub fn point_from_t(&self, t: f32) -> Point3<f32> {
        self.origin + t * self.direction
    }

    /// Sample positions along segment `[tmin, tmax]`, `step` units apart.
    /// First sample is at `tmin`, last one is the largest `t <= tmax`.
    pub fn samples(&self, (tmin, tmax): (f32, f32), step: f32) -> RaySamples {
        RaySamples {
            t: tmin,
            tmax,
            step,
            pos: self.point_from_t(tmin),
            increment: step * self.direction,
        }
    }
}

/// Iterator over `(t, position)` pairs of a ray segment.
///
/// Position is incremented instead of recomputed from `t`.
pub struct RaySamples {
    t: f32,
    tmax: f32,
    step: f32,
    pos: Point3<f32>,
    increment: Vector3<f32>,
}

impl Iterator for RaySamples {
    type Item = (f32, Point3<f32>);

    fn next(&mut self) -> Option<Self::Item> {
        // Also stops on NaN
        if !(self.t <= self.tmax) {
            return None;
        }
        let item = (self.t, self.pos);
        self.t += self.step;
        self.pos += self.increment;
        Some(item)
    }
}
