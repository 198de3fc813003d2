//! Classification of samples into color and opacity.

use crate::color::{self, RGBA};

/// Number of entries of [`TransferFunction1D`] lookup table
pub const TF_LUT_SIZE: usize = 256;

/// Lookup table mapping a sample value to RGBA.
///
/// Sample `value` maps to index `(value - index_start) / index_range * 256`,
/// clamped to `0..=255`. Opacity (W component) is in `<0;1>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction1D {
    pub lut: [RGBA; TF_LUT_SIZE],
    pub index_start: f32,
    pub index_range: f32,
}

impl TransferFunction1D {
    pub fn new(lut: [RGBA; TF_LUT_SIZE], index_start: f32, index_range: f32) -> Self {
        Self {
            lut,
            index_start,
            index_range,
        }
    }

    /// Fill the table from `f`, called with bin position in `<0;1)`.
    pub fn from_fn<F>(index_start: f32, index_range: f32, f: F) -> Self
    where
        F: Fn(f32) -> RGBA,
    {
        let mut lut = [color::zero(); TF_LUT_SIZE];
        for (i, entry) in lut.iter_mut().enumerate() {
            *entry = f(i as f32 / TF_LUT_SIZE as f32);
        }
        Self::new(lut, index_start, index_range)
    }

    /// Gray ramp, both intensity and opacity grow with sample value.
    pub fn grayscale(index_start: f32, index_range: f32) -> Self {
        Self::from_fn(index_start, index_range, |v| color::mono(v, v))
    }

    /// Table index of a sample value, `None` for degenerate mapping (zero range, NaN).
    pub fn index(&self, value: f32) -> Option<usize> {
        let range01 = (value - self.index_start) / self.index_range;
        if !range01.is_finite() {
            return None;
        }
        let index = range01 * TF_LUT_SIZE as f32;
        // float to int cast saturates negative values to zero
        Some(usize::min(index as usize, TF_LUT_SIZE - 1))
    }

    /// Color and opacity of a sample value
    pub fn sample(&self, value: f32) -> RGBA {
        match self.index(value) {
            Some(i) => self.lut[i],
            None => color::zero(),
        }
    }
}

impl Default for TransferFunction1D {
    fn default() -> Self {
        Self::grayscale(0.0, TF_LUT_SIZE as f32)
    }
}

/// Triangle in (intensity, gradient magnitude) space.
///
/// The apex sits at (`intensity`, lowest gradient magnitude of the volume),
/// the base spans `intensity ± radius` at the highest gradient magnitude.
/// Every sample inside gets the same `color`, weighted by a tent opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferFunction2D {
    pub intensity: f32,
    pub radius: f32,
    pub color: RGBA,
}

impl TransferFunction2D {
    pub fn new(intensity: f32, radius: f32, color: RGBA) -> Self {
        Self {
            intensity,
            radius,
            color,
        }
    }

    /// Tent opacity of a sample.
    ///
    /// Edges of the triangle are the lines from the apex to both base corners.
    /// Opacity is 1 on the vertical line through the apex and falls linearly
    /// to 0 at the edges, measured horizontally. Outside of the triangle it is 0.
    pub fn opacity(
        &self,
        intensity: f32,
        gradient_magnitude: f32,
        min_magnitude: f32,
        max_magnitude: f32,
    ) -> f32 {
        let magnitude_span = max_magnitude - min_magnitude;
        if self.radius <= 0.0 || !(magnitude_span > 0.0) {
            return 0.0;
        }

        let inside_span = intensity > self.intensity - self.radius
            && intensity < self.intensity + self.radius
            && gradient_magnitude >= min_magnitude
            && gradient_magnitude < max_magnitude;
        if !inside_span {
            return 0.0;
        }

        // Horizontal distance from the apex line to either edge at this magnitude
        let half_width = self.radius * (gradient_magnitude - min_magnitude) / magnitude_span;
        let distance = (intensity - self.intensity).abs();

        if distance > half_width {
            // below an edge
            return 0.0;
        }
        if half_width == 0.0 {
            // apex
            return 1.0;
        }
        1.0 - distance / half_width
    }
}

impl Default for TransferFunction2D {
    fn default() -> Self {
        Self::new(128.0, 32.0, color::new(0.8, 0.8, 0.8, 1.0))
    }
}
