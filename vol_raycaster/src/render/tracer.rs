//! Per-ray algorithms, one per [`RenderMode`].
//!
//! All tracers but the slicer walk the ray segment `[tmin, tmax]` returned by
//! the bounding box intersection, sampling every `sample_step` units.

use nalgebra::{vector, Point3, Vector3};

use crate::{
    camera::Camera,
    color::{self, RGBA},
    common::Ray,
    volumetric::{GradientField, Volume},
};

use super::{
    shading::{phong, smoothstep},
    RenderConfig, RenderMode,
};

/// Color of isosurface hits
pub const ISO_COLOR: Vector3<f32> = vector![0.8, 0.8, 0.0];

/// Bisection stops when the sample is this close to the isovalue,
/// or the search interval gets this short
const BISECTION_PRECISION: f32 = 0.01;
/// Upper bound of bisection steps, for flat regions
const BISECTION_MAX_ITERATIONS: usize = 30;

/// Everything a ray needs, borrowed for the duration of a frame.
pub struct Tracer<'a, V, G, C>
where
    V: Volume + ?Sized,
    G: GradientField + ?Sized,
    C: Camera + ?Sized,
{
    volume: &'a V,
    gradient: &'a G,
    camera: &'a C,
    config: &'a RenderConfig,
    /// Slicing plane passes through this point
    volume_center: Point3<f32>,
    /// Slicing plane normal, facing the camera
    plane_normal: Vector3<f32>,
}

impl<'a, V, G, C> Tracer<'a, V, G, C>
where
    V: Volume + ?Sized,
    G: GradientField + ?Sized,
    C: Camera + ?Sized,
{
    pub fn new(volume: &'a V, gradient: &'a G, camera: &'a C, config: &'a RenderConfig) -> Self {
        let volume_center = Point3::from(volume.get_size().map(|v| v as f32) / 2.0);
        let plane_normal = -camera.get_forward().normalize();
        Self {
            volume,
            gradient,
            camera,
            config,
            volume_center,
            plane_normal,
        }
    }

    /// Color of pixel `[x, y]`, `[0, 0]` being upper left corner.
    /// Transparent black if its ray misses the volume.
    pub fn render_pixel(&self, x: usize, y: usize) -> RGBA {
        let (width, height) = self.config.resolution();
        let pixel_pos = vector![x as f32 / width as f32, y as f32 / height as f32];
        let ray = self.camera.get_ray(pixel_pos * 2.0 - vector![1.0, 1.0]);
        self.trace_pixel(&ray)
    }

    /// Color of a ray. Transparent black if the volume is missed.
    pub fn trace_pixel(&self, ray: &Ray) -> RGBA {
        match self.volume.get_bound_box().intersect(ray) {
            Some(t) => self.trace(ray, t),
            None => color::zero(),
        }
    }

    /// Run the tracer selected by the render mode on segment `t` of the ray
    pub fn trace(&self, ray: &Ray, t: (f32, f32)) -> RGBA {
        match self.config.render_mode {
            RenderMode::Slicer => self.trace_slice(ray),
            RenderMode::Mip => self.trace_mip(ray, t),
            RenderMode::Iso => self.trace_iso(ray, t),
            RenderMode::Composite => self.trace_composite(ray, t),
            RenderMode::Tf2d => self.trace_tf2d(ray, t),
            RenderMode::Mida => self.trace_mida(ray, t),
            RenderMode::Combined => self.trace_combined(ray, t),
        }
    }

    /// Sample value relative to the volume maximum
    fn normalize(&self, val: f32) -> f32 {
        let maximum = self.volume.maximum();
        if maximum > 0.0 {
            val / maximum
        } else {
            0.0
        }
    }

    /// Slice through the volume center, perpendicular to the camera.
    /// Does not depend on the ray segment.
    pub fn trace_slice(&self, ray: &Ray) -> RGBA {
        let t = (self.volume_center - ray.origin).dot(&self.plane_normal)
            / ray.direction.dot(&self.plane_normal);
        let val = self.volume.sample_at(ray.point_from_t(t));
        color::mono(f32::max(self.normalize(val), 0.0), 1.0)
    }

    /// Maximum intensity projection
    pub fn trace_mip(&self, ray: &Ray, t: (f32, f32)) -> RGBA {
        let max_val = ray
            .samples(t, self.config.sample_step)
            .map(|(_, pos)| self.volume.sample_at(pos))
            .fold(0.0, f32::max);

        color::mono(self.normalize(max_val), 1.0)
    }

    /// Transfer function color of a sample, Phong shaded if enabled.
    ///
    /// Light vector points from the ray origin to the sample.
    fn sample_color(&self, tf_color: Vector3<f32>, pos: Point3<f32>, ray: &Ray) -> Vector3<f32> {
        if !self.config.volume_shading {
            return tf_color;
        }

        let gradient = self.gradient.sample_at(pos);
        let view = (self.camera.get_position() - pos).normalize();
        let light = (pos - ray.origin).normalize();
        let shaded = phong(&tf_color, &gradient, &light, &view, &self.config.phong);

        if !self.config.smoothstep {
            return shaded;
        }

        let max_magnitude = self.gradient.max_magnitude();
        let weight = smoothstep(
            self.config.gradient_low * max_magnitude,
            self.config.gradient_high * max_magnitude,
            gradient.magnitude,
        );
        tf_color * (1.0 - weight) + shaded * weight
    }

    /// Front-to-back compositing with the 1D transfer function
    pub fn trace_composite(&self, ray: &Ray, t: (f32, f32)) -> RGBA {
        let mut accum = color::zero();
        let mut opacity = 0.0;

        for (_, pos) in ray.samples(t, self.config.sample_step) {
            let val = self.volume.sample_at(pos);
            let tf_value = self.config.tf.sample(val);
            let sample_opacity = tf_value.w.clamp(0.0, 1.0);
            let sample_color = self.sample_color(tf_value.xyz(), pos, ray);

            accum += (1.0 - opacity) * sample_opacity * color::rgb(sample_color, 1.0);
            opacity += (1.0 - opacity) * sample_opacity;

            // early ray termination
            if opacity >= 1.0 {
                break;
            }
        }
        accum
    }

    /// First hit of the isosurface.
    ///
    /// Without shading, hit is the first sample above isovalue, no refinement.
    /// With shading, the crossing is refined by bisection and Phong shaded.
    pub fn trace_iso(&self, ray: &Ray, t: (f32, f32)) -> RGBA {
        let iso_value = self.config.iso_value;
        let step = self.config.sample_step;

        if !self.config.volume_shading {
            let hit = ray
                .samples(t, step)
                .any(|(_, pos)| self.volume.sample_at(pos) > iso_value);
            return if hit {
                color::rgb(ISO_COLOR, 1.0)
            } else {
                color::zero()
            };
        }

        let increment = step * ray.direction;
        for (t, pos) in ray.samples(t, step) {
            let val = self.volume.sample_at(pos);
            let next_val = self.volume.sample_at(pos + increment);

            if val > iso_value || next_val > iso_value {
                let precise_t = self.bisection(ray, t, t + step, iso_value);
                let precise_pos = ray.point_from_t(precise_t);

                let gradient = self.gradient.sample_at(precise_pos);
                let view = (self.camera.get_position() - precise_pos).normalize();
                let light = (precise_pos - ray.origin).normalize();
                let shaded = phong(&ISO_COLOR, &gradient, &light, &view, &self.config.phong);

                return color::rgb(shaded, 1.0);
            }
        }

        // no surface, opaque black
        color::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Find `t` in `[t0, t1]` where the sample is close to `iso_value`.
    ///
    /// Returns the last midpoint, even if precision was not reached.
    pub fn bisection(&self, ray: &Ray, t0: f32, t1: f32, iso_value: f32) -> f32 {
        let (mut low, mut high) = (t0, t1);
        let mut mid = (low + high) / 2.0;

        for _ in 0..BISECTION_MAX_ITERATIONS {
            mid = (low + high) / 2.0;
            let val = self.volume.sample_at(ray.point_from_t(mid));

            if (val - iso_value).abs() < BISECTION_PRECISION
                || (high - low).abs() < BISECTION_PRECISION
            {
                break;
            }

            if val < iso_value {
                low = mid;
            } else {
                high = mid;
            }
        }
        mid
    }

    /// Front-to-back compositing of opacity from the 2D transfer function.
    /// Color is the flat transfer function color.
    pub fn trace_tf2d(&self, ray: &Ray, t: (f32, f32)) -> RGBA {
        let tf2d = &self.config.tf2d;
        let min_magnitude = self.gradient.min_magnitude();
        let max_magnitude = self.gradient.max_magnitude();
        let mut opacity = 0.0;

        for (_, pos) in ray.samples(t, self.config.sample_step) {
            let val = self.volume.sample_at(pos);
            let gradient = self.gradient.sample_at(pos);
            let sample_opacity = tf2d.opacity(val, gradient.magnitude, min_magnitude, max_magnitude);

            opacity += (1.0 - opacity) * sample_opacity * tf2d.color.w;

            if opacity >= 1.0 {
                opacity = 1.0;
                break;
            }
        }

        tf2d.color * opacity
    }

    /// MIDA accumulation.
    ///
    /// `beta = 1 - delta * delta_scale`, where delta is the rise of the
    /// normalized running maximum at this sample. Returns accumulated color
    /// and the highest sample.
    fn accumulate_mida(&self, ray: &Ray, t: (f32, f32), delta_scale: f32) -> (RGBA, f32) {
        let mut accum = color::zero();
        let mut opacity: f32 = 0.0;
        let mut max_val: f32 = 0.0;

        for (_, pos) in ray.samples(t, self.config.sample_step) {
            let val = self.volume.sample_at(pos);

            let tf_value = self.config.tf.sample(val);
            let sample_opacity = tf_value.w.clamp(0.0, 1.0);
            let sample_color = self.sample_color(tf_value.xyz(), pos, ray);

            let delta = if val > max_val {
                self.normalize(val) - self.normalize(max_val)
            } else {
                0.0
            };
            let beta = (1.0 - delta * delta_scale).clamp(0.0, 1.0);

            accum = beta * accum
                + (1.0 - beta * opacity) * sample_opacity * color::rgb(sample_color, 1.0);
            opacity = (beta * opacity + (1.0 - beta * opacity) * sample_opacity).clamp(0.0, 1.0);

            max_val = f32::max(val, max_val);
        }
        (accum, max_val)
    }

    /// Maximum intensity difference accumulation.
    /// Behaves like MIP where the running maximum rises, like compositing elsewhere.
    pub fn trace_mida(&self, ray: &Ray, t: (f32, f32)) -> RGBA {
        self.accumulate_mida(ray, t, 1.0).0
    }

    /// MIDA with `gamma` control.
    ///
    /// `gamma` in `<-1;0>` weakens the MIDA term towards DVR,
    /// `gamma` in `(0;1>` blends the result towards MIP.
    pub fn trace_combined(&self, ray: &Ray, t: (f32, f32)) -> RGBA {
        let gamma = self.config.gamma;

        if gamma <= 0.0 {
            return self.accumulate_mida(ray, t, 1.0 + gamma).0;
        }

        let (accum, max_val) = self.accumulate_mida(ray, t, 1.0);
        let mip = color::mono(self.normalize(max_val), 1.0);
        accum * (1.0 - gamma) + mip * gamma
    }
}
