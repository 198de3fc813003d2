use nalgebra::{vector, Vector2};
use thiserror::Error;

use crate::transfer_function::{TransferFunction1D, TransferFunction2D};

/// Rendering technique, one tracer per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Plane through the volume center, perpendicular to the view direction
    #[default]
    Slicer,
    /// Maximum intensity projection
    Mip,
    /// First hit of an isosurface
    Iso,
    /// Front-to-back compositing with the 1D transfer function
    Composite,
    /// Front-to-back compositing with the 2D transfer function
    Tf2d,
    /// Maximum intensity difference accumulation
    Mida,
    /// MIDA blended towards DVR (`gamma < 0`) or MIP (`gamma > 0`)
    Combined,
}

/// Coefficients of Phong illumination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongParams {
    /// Ambient
    pub ka: f32,
    /// Diffuse
    pub kd: f32,
    /// Specular
    pub ks: f32,
    /// Shininess, exponent of the specular term
    pub alpha: f32,
}

impl Default for PhongParams {
    fn default() -> Self {
        Self {
            ka: 0.1,
            kd: 0.7,
            ks: 0.2,
            alpha: 100.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("render resolution must be non-zero")]
    ZeroResolution,
    #[error("sample step must be positive and finite, got {0}")]
    InvalidSampleStep(f32),
    #[error("transfer function range must be non-zero and finite, got {0}")]
    InvalidTransferFunctionRange(f32),
    #[error("smoothstep thresholds must satisfy 0 <= low <= high, got {low} and {high}")]
    InvalidSmoothstepThresholds { low: f32, high: f32 },
    #[error("2D transfer function radius must not be negative, got {0}")]
    NegativeRadius(f32),
    #[error("gamma must be in <-1;1>, got {0}")]
    InvalidGamma(f32),
}

/// Every tunable parameter of a frame.
///
/// Replaced as a whole, two configs are equal only if every field
/// (including the whole lookup table) matches.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub render_mode: RenderMode,
    /// Width and height of the frame buffer
    pub resolution: Vector2<u16>,

    /// Phong shading of samples
    pub volume_shading: bool,
    /// Blend shaded and unshaded color by gradient magnitude
    pub smoothstep: bool,
    pub iso_value: f32,
    /// MIDA to DVR (`<-1;0>`) and MIDA to MIP (`(0;1>`) control
    pub gamma: f32,
    pub phong: PhongParams,
    /// Smoothstep thresholds, fractions of the highest gradient magnitude
    pub gradient_low: f32,
    pub gradient_high: f32,

    pub tf: TransferFunction1D,
    pub tf2d: TransferFunction2D,

    /// Distance between two samples on a ray
    pub sample_step: f32,
    /// Render tiles on all cores. Single thread otherwise.
    pub multi_thread: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::default(),
            resolution: vector![512, 512],
            volume_shading: false,
            smoothstep: false,
            iso_value: 95.0,
            gamma: 0.0,
            phong: PhongParams::default(),
            gradient_low: 0.125,
            gradient_high: 0.25,
            tf: TransferFunction1D::default(),
            tf2d: TransferFunction2D::default(),
            sample_step: 1.0,
            multi_thread: true,
        }
    }
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Resolution as `(width, height)`
    pub fn resolution(&self) -> (usize, usize) {
        (self.resolution.x as usize, self.resolution.y as usize)
    }

    /// Number of pixels in a frame
    pub fn pixel_count(&self) -> usize {
        let (width, height) = self.resolution();
        width * height
    }

    /// Check preconditions of rendering
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution.x == 0 || self.resolution.y == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        if !(self.sample_step > 0.0 && self.sample_step.is_finite()) {
            return Err(ConfigError::InvalidSampleStep(self.sample_step));
        }
        let range = self.tf.index_range;
        if range == 0.0 || !range.is_finite() {
            return Err(ConfigError::InvalidTransferFunctionRange(range));
        }
        let (low, high) = (self.gradient_low, self.gradient_high);
        if !(0.0 <= low && low <= high) {
            return Err(ConfigError::InvalidSmoothstepThresholds { low, high });
        }
        if self.tf2d.radius < 0.0 {
            return Err(ConfigError::NegativeRadius(self.tf2d.radius));
        }
        // NaN fails too
        if !(-1.0..=1.0).contains(&self.gamma) {
            return Err(ConfigError::InvalidGamma(self.gamma));
        }
        Ok(())
    }
}

/// Builder of [`RenderConfig`], starts from defaults.
///
/// ```
/// use vol_raycaster::render::{RenderConfig, RenderMode};
/// use nalgebra::vector;
///
/// let config = RenderConfig::builder()
///     .resolution(vector![640, 480])
///     .render_mode(RenderMode::Mip)
///     .build()
///     .unwrap();
/// assert_eq!(config.resolution(), (640, 480));
/// ```
#[derive(Default)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn render_mode(mut self, render_mode: RenderMode) -> Self {
        self.config.render_mode = render_mode;
        self
    }

    pub fn resolution(mut self, resolution: Vector2<u16>) -> Self {
        self.config.resolution = resolution;
        self
    }

    pub fn volume_shading(mut self, enabled: bool) -> Self {
        self.config.volume_shading = enabled;
        self
    }

    /// Smoothstep weighting by gradient magnitude, thresholds are fractions of the highest magnitude
    pub fn smoothstep(mut self, enabled: bool, low: f32, high: f32) -> Self {
        self.config.smoothstep = enabled;
        self.config.gradient_low = low;
        self.config.gradient_high = high;
        self
    }

    pub fn iso_value(mut self, iso_value: f32) -> Self {
        self.config.iso_value = iso_value;
        self
    }

    pub fn gamma(mut self, gamma: f32) -> Self {
        self.config.gamma = gamma;
        self
    }

    pub fn phong(mut self, phong: PhongParams) -> Self {
        self.config.phong = phong;
        self
    }

    pub fn transfer_function(mut self, tf: TransferFunction1D) -> Self {
        self.config.tf = tf;
        self
    }

    pub fn transfer_function_2d(mut self, tf2d: TransferFunction2D) -> Self {
        self.config.tf2d = tf2d;
        self
    }

    pub fn sample_step(mut self, sample_step: f32) -> Self {
        self.config.sample_step = sample_step;
        self
    }

    pub fn multi_thread(mut self, multi_thread: bool) -> Self {
        self.config.multi_thread = multi_thread;
        self
    }

    pub fn build(self) -> Result<RenderConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Skips validation
    pub fn build_unchecked(self) -> RenderConfig {
        self.config
    }
}
