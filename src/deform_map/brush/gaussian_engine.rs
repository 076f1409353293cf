//! Gaussian falloff brush.
//!
//! Each stroke adds `tint * falloff * power` to every pixel whose falloff is
//! above [`FALLOFF_CUTOFF`]. Rows are independent, so they can be painted
//! in parallel without changing the result.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::deform_map::brush::blend::{FALLOFF_CUTOFF, blend_pixel, gaussian_falloff};
use crate::deform_map::brush::engine::BrushEngine;
use crate::deform_map::brush::types::{BrushEngineConfig, BrushStroke, ScanStrategy};
use crate::deform_map::common::error::Result;
use crate::deform_map::pixel::{Color4, PixelBuffer};

/// Half-width of the bounded scan, in sigmas. Falloff drops below the
/// cutoff at roughly 3.03 sigma.
pub const BOUNDING_SIGMAS: f32 = 4.0;

/// Half-open pixel rectangle `[x0, x1) x [y0, y1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRegion {
    pub x0: u32,
    pub x1: u32,
    pub y0: u32,
    pub y1: u32,
}

pub struct GaussianBrushEngine {
    config: BrushEngineConfig,
}

impl Default for GaussianBrushEngine {
    fn default() -> Self {
        Self::new(BrushEngineConfig::default())
    }
}

impl GaussianBrushEngine {
    pub fn new(config: BrushEngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BrushEngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BrushEngineConfig) {
        self.config = config;
    }

    /// Pixels visited for `stroke`, or `None` when the region misses the buffer.
    pub fn scan_region(&self, buffer: &PixelBuffer, stroke: &BrushStroke) -> Option<ScanRegion> {
        let (width, height) = (buffer.width() as i64, buffer.height() as i64);

        let region = match self.config.scan {
            ScanStrategy::Full => (0, width, 0, height),
            ScanStrategy::Bounded => {
                let radius = (BOUNDING_SIGMAS * stroke.sigma).ceil() as i64;
                let (cx, cy) = (stroke.center_x as i64, stroke.center_y as i64);
                (
                    cx.saturating_sub(radius).max(0),
                    cx.saturating_add(radius).saturating_add(1).min(width),
                    cy.saturating_sub(radius).max(0),
                    cy.saturating_add(radius).saturating_add(1).min(height),
                )
            }
        };

        let (x0, x1, y0, y1) = region;
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(ScanRegion {
            x0: x0 as u32,
            x1: x1 as u32,
            y0: y0 as u32,
            y1: y1 as u32,
        })
    }
}

impl BrushEngine for GaussianBrushEngine {
    #[instrument(skip_all, fields(
        center_x = stroke.center_x,
        center_y = stroke.center_y,
        sigma = stroke.sigma,
        power = stroke.power,
    ))]
    fn apply(&self, buffer: &mut PixelBuffer, stroke: &BrushStroke) -> Result<()> {
        stroke.validate()?;

        let Some(region) = self.scan_region(buffer, stroke) else {
            debug!("Stroke region lies outside the buffer");
            return Ok(());
        };

        let width = buffer.width() as usize;
        let (x0, x1, y0) = (region.x0 as usize, region.x1 as usize, region.y0 as usize);
        let stroke = *stroke;

        let paint_row = move |(offset, row): (usize, &mut [Color4])| -> usize {
            let dy = (stroke.center_y as i64 - (y0 + offset) as i64) as f32;
            let mut touched = 0;
            for (x, pixel) in row.iter_mut().enumerate().take(x1).skip(x0) {
                let dx = (stroke.center_x as i64 - x as i64) as f32;
                let falloff = gaussian_falloff(dx, dy, stroke.sigma);
                if falloff <= FALLOFF_CUTOFF {
                    continue;
                }
                *pixel = blend_pixel(*pixel, &stroke, falloff);
                touched += 1;
            }
            touched
        };

        let rows = buffer.row_span_mut(region.y0, region.y1);
        let touched: usize = if self.config.parallel {
            rows.par_chunks_mut(width).enumerate().map(paint_row).sum()
        } else {
            rows.chunks_mut(width).enumerate().map(paint_row).sum()
        };

        debug!(touched, ?region, "Stroke applied");
        Ok(())
    }
}
