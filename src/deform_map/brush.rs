//! Brush painting module
//!
//! This module composites Gaussian falloff strokes into a [`PixelBuffer`](crate::deform_map::pixel::PixelBuffer).

pub mod blend;
mod engine;
mod gaussian_engine;
pub mod types;

#[cfg(test)]
mod tests;

pub use blend::{FALLOFF_CUTOFF, blend_pixel, gaussian_falloff};
pub use engine::BrushEngine;
pub use gaussian_engine::{BOUNDING_SIGMAS, GaussianBrushEngine, ScanRegion};
pub use types::{BrushEngineConfig, BrushEngineConfigBuilder, BrushStroke, BrushStrokeBuilder, ScanStrategy};
