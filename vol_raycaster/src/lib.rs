//! # vol_raycaster
//!
//! CPU volume raycaster. Casts a ray per pixel through a scalar volume and its
//! gradient field and accumulates color according to the selected [`RenderMode`](render::RenderMode):
//! slicing, MIP, isosurface, 1D and 2D transfer function compositing, MIDA and its
//! blend with DVR and MIP.
//!
//! ```
//! use nalgebra::{point, vector};
//! use vol_raycaster::{
//!     camera::PerspectiveCamera,
//!     render::{RenderConfig, RenderMode, Renderer},
//!     test_helpers::{sphere_volume, with_gradient},
//! };
//!
//! let (volume, gradient) = with_gradient(sphere_volume(16));
//! let config = RenderConfig::builder()
//!     .resolution(vector![64, 64])
//!     .render_mode(RenderMode::Mip)
//!     .build()
//!     .unwrap();
//!
//! let mut renderer = Renderer::new(volume, gradient, config);
//! let camera = PerspectiveCamera::look_at(point![7.5, 7.5, -40.0], point![7.5, 7.5, 7.5]);
//! renderer.render(&camera);
//!
//! assert_eq!(renderer.frame_buffer().len(), 64 * 64);
//! ```

pub mod camera;
pub mod color;
pub mod common;
pub mod render;
pub mod test_helpers;
pub mod transfer_function;
pub mod volumetric;

pub use camera::{Camera, PerspectiveCamera};
