//! Session-level input and configuration types

use std::fmt;

use crate::deform_map::brush::BrushEngineConfig;
use crate::deform_map::codec::CodecConfig;
use crate::deform_map::persistence::SaveConfig;
use crate::deform_map::pixel::{Channel, Color4, NormalizedColor};

/// Which deformation axis a stroke paints into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PaintMode {
    /// Red tint, clamped on the R channel
    #[default]
    ScaleX,
    /// Green tint, clamped on the G channel
    ScaleY,
}

impl PaintMode {
    pub fn clamp_channel(self) -> Channel {
        match self {
            PaintMode::ScaleX => Channel::R,
            PaintMode::ScaleY => Channel::G,
        }
    }
}

/// Pointer button held during a paint event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Adds the tint
    Primary,
    /// Subtracts the tint
    Secondary,
}

impl PointerButton {
    pub fn sign(self) -> f32 {
        match self {
            PointerButton::Primary => 1.0,
            PointerButton::Secondary => -1.0,
        }
    }
}

/// Pointer position normalized to the viewport, `(0, 0)` at one corner and
/// `(1, 1)` at the opposite one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub u: f32,
    pub v: f32,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn new(u: f32, v: f32, button: PointerButton) -> Self {
        Self { u, v, button }
    }

    pub fn in_viewport(&self) -> bool {
        (0.0..=1.0).contains(&self.u) && (0.0..=1.0).contains(&self.v)
    }
}

/// Brush parameters shared by every stroke of a session
#[derive(Debug, Clone, PartialEq)]
pub struct PaintSettings {
    pub mode: PaintMode,
    pub power: f32,
    pub sigma: f32,
    pub clamp_min: f32,
    pub clamp_max: f32,
    /// Tint used in `ScaleX` mode
    pub color_l: NormalizedColor,
    /// Tint used in `ScaleY` mode
    pub color_r: NormalizedColor,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            mode: PaintMode::ScaleX,
            power: 0.05,
            sigma: 10.0,
            clamp_min: 0.0,
            clamp_max: 1.0,
            color_l: NormalizedColor::new(1.0, 0.0, 0.0, 1.0),
            color_r: NormalizedColor::new(0.0, 1.0, 0.0, 1.0),
        }
    }
}

impl PaintSettings {
    pub fn tint(&self) -> NormalizedColor {
        match self.mode {
            PaintMode::ScaleX => self.color_l,
            PaintMode::ScaleY => self.color_r,
        }
    }
}

/// Configuration for a painter session
#[derive(Debug, Clone)]
pub struct PainterConfig {
    pub initial_width: u32,
    pub initial_height: u32,
    /// Neutral fill; 0.5 on R and G means "no deformation"
    pub initial_color: NormalizedColor,
    pub paint: PaintSettings,
    pub engine: BrushEngineConfig,
    pub codec: CodecConfig,
    pub save: SaveConfig,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            initial_width: 512,
            initial_height: 512,
            initial_color: NormalizedColor::new(0.5, 0.5, 0.0, 1.0),
            paint: PaintSettings::default(),
            engine: BrushEngineConfig::default(),
            codec: CodecConfig::default(),
            save: SaveConfig::default(),
        }
    }
}

impl PainterConfig {
    pub fn builder() -> PainterConfigBuilder {
        PainterConfigBuilder::default()
    }
}

/// Builder for PainterConfig
#[derive(Default)]
pub struct PainterConfigBuilder {
    initial_size: Option<(u32, u32)>,
    initial_color: Option<NormalizedColor>,
    paint: Option<PaintSettings>,
    engine: Option<BrushEngineConfig>,
    codec: Option<CodecConfig>,
    save: Option<SaveConfig>,
}

impl PainterConfigBuilder {
    pub fn initial_size(mut self, width: u32, height: u32) -> Self {
        self.initial_size = Some((width, height));
        self
    }

    pub fn initial_color(mut self, color: NormalizedColor) -> Self {
        self.initial_color = Some(color);
        self
    }

    pub fn paint(mut self, paint: PaintSettings) -> Self {
        self.paint = Some(paint);
        self
    }

    pub fn engine(mut self, engine: BrushEngineConfig) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn codec(mut self, codec: CodecConfig) -> Self {
        self.codec = Some(codec);
        self
    }

    pub fn save(mut self, save: SaveConfig) -> Self {
        self.save = Some(save);
        self
    }

    pub fn build(self) -> PainterConfig {
        let default = PainterConfig::default();
        let (initial_width, initial_height) = self
            .initial_size
            .unwrap_or((default.initial_width, default.initial_height));
        PainterConfig {
            initial_width,
            initial_height,
            initial_color: self.initial_color.unwrap_or(default.initial_color),
            paint: self.paint.unwrap_or(default.paint),
            engine: self.engine.unwrap_or(default.engine),
            codec: self.codec.unwrap_or(default.codec),
            save: self.save.unwrap_or(default.save),
        }
    }
}

/// Pixel readout under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelProbe {
    pub x: u32,
    pub y: u32,
    pub color: Color4,
}

impl PixelProbe {
    /// R and G as fractions of 255
    pub fn normalized_rg(&self) -> (f32, f32) {
        (self.color.r as f32 / 255.0, self.color.g as f32 / 255.0)
    }
}

impl fmt::Display for PixelProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g) = self.normalized_rg();
        writeln!(f, "RG: {}, {}", self.color.r, self.color.g)?;
        writeln!(f, "01: {:.2}, {:.2}", r, g)?;
        write!(f, "XY: {}, {}", self.x, self.y)
    }
}
