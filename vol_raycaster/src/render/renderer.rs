/*
    vol_raycaster
    Author: Michal Majer
    Date: 2022-05-05
*/

use std::time::Instant;

use log::{debug, trace};

use crate::{
    camera::Camera,
    color::{self, RGBA},
    volumetric::{GradientField, Volume},
};

use super::{
    parallel::{render_serial, render_tiles},
    RenderConfig, Tracer,
};

/// Render one frame of `volume` seen by `camera` into `buffer`.
///
/// Buffer is cleared to transparent black first, pixels whose ray misses the
/// volume keep that value. Buffer is row major, `[0, 0]` is upper left corner.
///
/// # Panics
///
/// If `buffer` does not hold exactly `width * height` pixels of `config`.
pub fn render_frame<V, G, C>(
    volume: &V,
    gradient: &G,
    camera: &C,
    config: &RenderConfig,
    buffer: &mut [RGBA],
) where
    V: Volume + Sync + ?Sized,
    G: GradientField + Sync + ?Sized,
    C: Camera + Sync + ?Sized,
{
    assert_eq!(
        buffer.len(),
        config.pixel_count(),
        "frame buffer does not match resolution"
    );

    let start = Instant::now();

    buffer.fill(color::zero());

    let tracer = Tracer::new(volume, gradient, camera, config);
    let resolution = config.resolution();
    if config.multi_thread {
        render_tiles(&tracer, resolution, buffer);
    } else {
        render_serial(&tracer, resolution, buffer);
    }

    trace!(
        "Frame {:?} {}x{} rendered in {:?}",
        config.render_mode,
        resolution.0,
        resolution.1,
        start.elapsed()
    );
}

/// Frame driver.
///
/// Owns volume, its gradient, the active [`RenderConfig`] and the frame buffer.
///
/// The camera is not owned. It is not passed to [`new`](Renderer::new) and is
/// instead borrowed by every [`render`](Renderer::render) call, as it usually
/// changes between frames. Keep the camera next to the renderer and pass it
/// each frame.
pub struct Renderer<V, G>
where
    V: Volume,
    G: GradientField,
{
    volume: V,
    gradient: G,
    config: RenderConfig,
    buffer: Vec<RGBA>,
}

impl<V, G> Renderer<V, G>
where
    V: Volume,
    G: GradientField,
{
    /// # Panics
    ///
    /// If `config` is not valid, see [`RenderConfig::validate`].
    pub fn new(volume: V, gradient: G, config: RenderConfig) -> Renderer<V, G> {
        Self::check_config(&config);
        let buffer = vec![color::zero(); config.pixel_count()];
        Renderer {
            volume,
            gradient,
            config,
            buffer,
        }
    }

    fn check_config(config: &RenderConfig) {
        if let Err(err) = config.validate() {
            panic!("Invalid render config: {err}");
        }
    }

    /// Replace active config. Frame buffer is resized (and cleared) if resolution changed.
    ///
    /// # Panics
    ///
    /// If `config` is not valid, see [`RenderConfig::validate`].
    pub fn set_config(&mut self, config: RenderConfig) {
        Self::check_config(&config);
        if config.resolution != self.config.resolution {
            debug!(
                "Resizing frame buffer {:?} -> {:?}",
                self.config.resolution(),
                config.resolution()
            );
            self.buffer.clear();
            self.buffer.resize(config.pixel_count(), color::zero());
        }
        debug!("New render config, mode {:?}", config.render_mode);
        self.config = config;
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Resolution as `(width, height)`
    pub fn resolution(&self) -> (usize, usize) {
        self.config.resolution()
    }

    pub fn volume(&self) -> &V {
        &self.volume
    }

    pub fn gradient(&self) -> &G {
        &self.gradient
    }

    /// Recompute the whole frame buffer
    pub fn render<C>(&mut self, camera: &C)
    where
        V: Sync,
        G: Sync,
        C: Camera + Sync + ?Sized,
    {
        render_frame(
            &self.volume,
            &self.gradient,
            camera,
            &self.config,
            &mut self.buffer,
        );
    }

    /// Rendered pixels, row major, `width * height` long
    pub fn frame_buffer(&self) -> &[RGBA] {
        &self.buffer
    }
}
