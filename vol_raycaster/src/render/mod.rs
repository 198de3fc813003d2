//! Frame rendering.
//!
//! [`Renderer`] owns the frame buffer and dispatches one [`Tracer`] call per pixel.

mod parallel;
mod render_config;
mod renderer;
pub mod shading;
mod tracer;

pub use render_config::{ConfigError, PhongParams, RenderConfig, RenderConfigBuilder, RenderMode};
pub use renderer::{render_frame, Renderer};
pub use tracer::{Tracer, ISO_COLOR};
