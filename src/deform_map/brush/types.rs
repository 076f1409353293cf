//! Brush stroke parameters and engine configuration

use crate::deform_map::common::error::{PainterError, Result};
use crate::deform_map::pixel::{Channel, NormalizedColor};

/// Parameters for one Gaussian paint operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushStroke {
    /// Stroke center in pixel coordinates; may lie outside the buffer
    pub center_x: i32,
    pub center_y: i32,
    /// Gaussian standard deviation in pixels
    pub sigma: f32,
    /// Signed strength; a negative power subtracts the tint
    pub power: f32,
    pub clamp_min: f32,
    pub clamp_max: f32,
    /// The only channel clamped to `[clamp_min, clamp_max]`
    pub clamp_channel: Channel,
    /// Additive tint in normalized space
    pub color: NormalizedColor,
}

impl Default for BrushStroke {
    fn default() -> Self {
        Self {
            center_x: 0,
            center_y: 0,
            sigma: 10.0,
            power: 0.05,
            clamp_min: 0.0,
            clamp_max: 1.0,
            clamp_channel: Channel::R,
            color: NormalizedColor::new(1.0, 0.0, 0.0, 1.0),
        }
    }
}

impl BrushStroke {
    pub fn builder() -> BrushStrokeBuilder {
        BrushStrokeBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(PainterError::InvalidParameter(format!(
                "sigma must be positive and finite, got {}",
                self.sigma
            )));
        }
        // The falloff divides by 2σ², which must not underflow or overflow.
        if !(2.0 * self.sigma * self.sigma).is_normal() {
            return Err(PainterError::InvalidParameter(format!(
                "sigma {} is outside the representable falloff range",
                self.sigma
            )));
        }
        if !self.power.is_finite() {
            return Err(PainterError::InvalidParameter(format!(
                "power must be finite, got {}",
                self.power
            )));
        }
        if !(self.clamp_min.is_finite() && self.clamp_max.is_finite())
            || self.clamp_min > self.clamp_max
        {
            return Err(PainterError::clamp_range(
                self.clamp_channel,
                self.clamp_min,
                self.clamp_max,
            ));
        }
        if !self.color.is_finite() {
            return Err(PainterError::InvalidParameter(format!(
                "tint color must be finite, got {:?}",
                self.color
            )));
        }
        Ok(())
    }
}

/// Builder for BrushStroke
#[derive(Default)]
pub struct BrushStrokeBuilder {
    center: Option<(i32, i32)>,
    sigma: Option<f32>,
    power: Option<f32>,
    clamp: Option<(f32, f32)>,
    clamp_channel: Option<Channel>,
    color: Option<NormalizedColor>,
}

impl BrushStrokeBuilder {
    pub fn center(mut self, x: i32, y: i32) -> Self {
        self.center = Some((x, y));
        self
    }

    pub fn sigma(mut self, sigma: f32) -> Self {
        self.sigma = Some(sigma);
        self
    }

    pub fn power(mut self, power: f32) -> Self {
        self.power = Some(power);
        self
    }

    pub fn clamp(mut self, min: f32, max: f32) -> Self {
        self.clamp = Some((min, max));
        self
    }

    pub fn clamp_channel(mut self, channel: Channel) -> Self {
        self.clamp_channel = Some(channel);
        self
    }

    pub fn color(mut self, color: NormalizedColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn build(self) -> BrushStroke {
        let default = BrushStroke::default();
        let (center_x, center_y) = self.center.unwrap_or((default.center_x, default.center_y));
        let (clamp_min, clamp_max) = self.clamp.unwrap_or((default.clamp_min, default.clamp_max));
        BrushStroke {
            center_x,
            center_y,
            sigma: self.sigma.unwrap_or(default.sigma),
            power: self.power.unwrap_or(default.power),
            clamp_min,
            clamp_max,
            clamp_channel: self.clamp_channel.unwrap_or(default.clamp_channel),
            color: self.color.unwrap_or(default.color),
        }
    }
}

/// Which pixels the engine visits for a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStrategy {
    /// Every pixel in the buffer
    Full,
    /// Only pixels within `BOUNDING_SIGMAS * sigma` of the center
    Bounded,
}

/// Configuration for the Gaussian brush engine
#[derive(Debug, Clone)]
pub struct BrushEngineConfig {
    pub scan: ScanStrategy,
    /// Split rows across the rayon thread pool
    pub parallel: bool,
}

impl Default for BrushEngineConfig {
    fn default() -> Self {
        Self {
            scan: ScanStrategy::Bounded,
            parallel: true,
        }
    }
}

impl BrushEngineConfig {
    pub fn builder() -> BrushEngineConfigBuilder {
        BrushEngineConfigBuilder::default()
    }
}

/// Builder for BrushEngineConfig
#[derive(Default)]
pub struct BrushEngineConfigBuilder {
    scan: Option<ScanStrategy>,
    parallel: Option<bool>,
}

impl BrushEngineConfigBuilder {
    pub fn scan(mut self, scan: ScanStrategy) -> Self {
        self.scan = Some(scan);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    pub fn build(self) -> BrushEngineConfig {
        let default = BrushEngineConfig::default();
        BrushEngineConfig {
            scan: self.scan.unwrap_or(default.scan),
            parallel: self.parallel.unwrap_or(default.parallel),
        }
    }
}
