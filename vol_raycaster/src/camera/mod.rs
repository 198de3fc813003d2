mod perspective_camera;

pub use perspective_camera::PerspectiveCamera;

use nalgebra::{Point3, Vector2, Vector3};

use crate::common::Ray;

/// Source of primary rays.
pub trait Camera {
    /// Ray crossing the view plane at normalized device coordinates `ndc`.
    ///
    /// Both coordinates are in `[-1, 1]`, `[-1, -1]` being upper left corner.
    fn get_ray(&self, ndc: Vector2<f32>) -> Ray;

    /// Position in world coordinates
    fn get_position(&self) -> Point3<f32>;

    /// Looking direction, normalized
    fn get_forward(&self) -> Vector3<f32>;
}
