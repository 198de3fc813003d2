//! Scalar volume and its gradient field.
//!
//! Renderer is generic over [`Volume`] and [`GradientField`], any storage can be plugged in.
//! [`LinearVolume`] and [`GradientVolume`] are in-memory implementations.

mod gradient_volume;
mod linear_volume;
mod volume;

pub use gradient_volume::GradientVolume;
pub use linear_volume::LinearVolume;
pub use volume::{GradientField, GradientSample, Volume};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VolumeError {
    #[error("volume data has {actual} samples, dimensions require {expected}")]
    DataSizeMismatch { expected: usize, actual: usize },
    #[error("volume dimensions must be non-zero")]
    ZeroDimension,
}
