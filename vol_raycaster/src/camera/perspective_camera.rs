/*
    vol_raycaster
    Author: Michal Majer
    Date: 2022-05-05
*/

use nalgebra::{vector, Point3, Vector2, Vector3};

use crate::common::Ray;

use super::Camera;

/// Ray-casting camera
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Position of the camera in world coordinates
    position: Point3<f32>,
    /// Up direction from the camera's perspective
    up: Vector3<f32>,
    /// Right direction from the camera's perspective
    right: Vector3<f32>,
    /// Direction of camera, normalized
    direction: Vector3<f32>,
    /// Aspect ratio of image plane
    aspect: f32,
    /// Vertical Field of View in degrees
    fov_y: f32,
    /// Size of image plane
    img_plane_size: Vector2<f32>, // Calculated from fov_y
    /// Vector offset spanning the image plane horizontally (left to right)
    du: Vector3<f32>,
    /// Vector offset spanning the image plane vertically (top to bottom)
    dv: Vector3<f32>,
}

impl PerspectiveCamera {
    /// Construct new camera
    ///
    /// # Arguments
    ///
    /// * `position` - Position of the camera in world coordinates
    /// * `direction` - Looking direction of the camera
    ///
    /// # Notes
    ///
    /// The up direction is assumed to be 'up' (positive y axis)
    ///
    /// Default fov is 60 degrees, default aspect ratio is 1.
    pub fn new(position: Point3<f32>, direction: Vector3<f32>) -> PerspectiveCamera {
        let mut camera = PerspectiveCamera {
            position,
            up: vector![0.0, 1.0, 0.0],
            right: vector![1.0, 0.0, 0.0],
            direction,
            aspect: 1.0,
            fov_y: 60.0,
            img_plane_size: vector![0.0, 0.0],
            du: Vector3::zeros(),
            dv: Vector3::zeros(),
        };
        camera.recalc_plane_size();
        camera.recalc_plane();
        camera
    }

    /// Camera at `position` looking at `target`
    pub fn look_at(position: Point3<f32>, target: Point3<f32>) -> PerspectiveCamera {
        PerspectiveCamera::new(position, target - position)
    }

    /// Changes aspect ratio to match `(width, height)` resolution
    pub fn change_aspect_from_resolution(&mut self, width: u16, height: u16) {
        let aspect = (width as f32) / (height as f32);
        self.change_aspect(aspect);
    }

    /// Change aspect ratio of camera
    ///
    /// For example 1.7777 for 16:9 ratio
    pub fn change_aspect(&mut self, aspect_ratio: f32) {
        self.aspect = aspect_ratio;
        self.recalc_plane_size();
        self.recalc_dudv();
    }

    /// Set new position of camera
    pub fn set_pos(&mut self, pos: Point3<f32>) {
        self.position = pos;
    }

    /// Set new direction of camera
    pub fn set_direction(&mut self, direction: Vector3<f32>) {
        self.direction = direction;
        self.recalc_plane();
    }

    // Call when camera direction changed
    fn recalc_plane(&mut self) {
        self.direction = self.direction.normalize();
        self.recalc_up_right();
        self.recalc_dudv();
    }

    // Call when camera direction changed
    fn recalc_up_right(&mut self) {
        let mut world_up = vector![0.0, 1.0, 0.0];
        // looking straight up or down
        if self.direction.cross(&world_up).norm() < 1e-6 {
            world_up = vector![0.0, 0.0, 1.0];
        }
        self.right = self.direction.cross(&world_up).normalize();
        self.up = self.right.cross(&self.direction);
    }

    // Call when fov or aspect ratio changed
    fn recalc_plane_size(&mut self) {
        self.img_plane_size = vector![0.0, 2.0 * f32::tan(f32::to_radians(0.5 * self.fov_y))];
        self.img_plane_size.x = self.img_plane_size.y * self.aspect;
    }

    // Call when direction or plane size changed
    fn recalc_dudv(&mut self) {
        self.du = self.img_plane_size.x * self.right;
        self.dv = -self.img_plane_size.y * self.up; // Notice '-' sign
    }
}

impl Camera for PerspectiveCamera {
    fn get_ray(&self, ndc: Vector2<f32>) -> Ray {
        let dir = self.direction + 0.5 * ndc.x * self.du + 0.5 * ndc.y * self.dv;
        Ray::new(self.position, dir.normalize())
    }

    fn get_position(&self) -> Point3<f32> {
        self.position
    }

    fn get_forward(&self) -> Vector3<f32> {
        self.direction
    }
}
