use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::deform_map::brush::{BrushEngine, BrushStroke, GaussianBrushEngine};
use crate::deform_map::codec::{PngEncoder, StandardDecoder};
use crate::deform_map::common::error::Result;
use crate::deform_map::persistence::{LocalClock, TexturePersistence, trim_path_quotes};
use crate::deform_map::pixel::{Color4, PixelBuffer};
use crate::deform_map::session::types::{
    PaintMode, PaintSettings, PainterConfig, PixelProbe, PointerEvent,
};

pub type DefaultPersistence = TexturePersistence<StandardDecoder, PngEncoder, LocalClock>;

/// Owns the live deformation map and turns pointer input into strokes.
///
/// The session is the only mutator of its buffer. Loading or initializing
/// replaces the buffer wholesale, and only once the new one is complete.
pub struct PainterSession<B: BrushEngine> {
    engine: B,
    persistence: DefaultPersistence,
    config: PainterConfig,
    buffer: PixelBuffer,
    status: String,
    load_path: String,
}

impl PainterSession<GaussianBrushEngine> {
    pub fn new(config: PainterConfig) -> Result<Self> {
        let engine = GaussianBrushEngine::new(config.engine.clone());
        Self::with_engine(engine, config)
    }
}

impl<B: BrushEngine> PainterSession<B> {
    pub fn with_engine(engine: B, config: PainterConfig) -> Result<Self> {
        let buffer = PixelBuffer::new(
            config.initial_width,
            config.initial_height,
            config.initial_color.quantize(),
        )?;
        let persistence = TexturePersistence::new(config.codec.clone(), config.save.clone());

        Ok(Self {
            engine,
            persistence,
            config,
            buffer,
            status: String::new(),
            load_path: String::new(),
        })
    }

    /// Replaces the buffer with a fresh `width` x `height` one filled with `color`.
    pub fn initialize_texture(&mut self, width: u32, height: u32, color: Color4) -> Result<()> {
        self.buffer = PixelBuffer::new(width, height, color)?;
        self.status = format!("Initialized : {}x{}", width, height);
        info!("Initialized {}x{} texture", width, height);
        Ok(())
    }

    /// Loads the image at `path`, surrounding quotes trimmed.
    ///
    /// On failure the current buffer is kept and the status records why.
    pub fn load_texture(&mut self, path: &str) -> Result<()> {
        let path = trim_path_quotes(path);

        match self.persistence.load(path) {
            Ok(buffer) => {
                self.buffer = buffer;
                self.status = format!("Load success : {}", path);
                self.load_path = path.to_string();
                Ok(())
            }
            Err(e) => {
                warn!("Load failed: {}", e);
                self.status = format!("Load failed : {}", e);
                Err(e)
            }
        }
    }

    /// Saves the buffer into the configured directory, returning the written path.
    ///
    /// The written path becomes the default load path.
    pub fn save_texture(&mut self) -> Result<PathBuf> {
        match self.persistence.save(&self.buffer) {
            Ok(path) => {
                self.status = format!("Save success : {}", path.display());
                self.load_path = path.display().to_string();
                Ok(path)
            }
            Err(e) => {
                warn!("Save failed: {}", e);
                self.status = format!("Save failed : {}", e);
                Err(e)
            }
        }
    }

    pub fn apply_stroke(&mut self, stroke: &BrushStroke) -> Result<()> {
        self.engine.apply(&mut self.buffer, stroke)
    }

    /// Builds the stroke for a pointer event, or `None` outside the viewport.
    pub fn stroke_for(&self, event: &PointerEvent) -> Option<BrushStroke> {
        if !event.in_viewport() {
            return None;
        }

        let settings = &self.config.paint;
        let center_x = (event.u * self.buffer.width() as f32).floor() as i32;
        let center_y = (event.v * self.buffer.height() as f32).floor() as i32;

        Some(BrushStroke {
            center_x,
            center_y,
            sigma: settings.sigma,
            power: settings.power * event.button.sign(),
            clamp_min: settings.clamp_min,
            clamp_max: settings.clamp_max,
            clamp_channel: settings.mode.clamp_channel(),
            color: settings.tint(),
        })
    }

    /// Paints at the pointer. Returns whether a stroke was applied.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Result<bool> {
        let Some(stroke) = self.stroke_for(event) else {
            debug!("Pointer ({}, {}) outside viewport", event.u, event.v);
            return Ok(false);
        };
        self.apply_stroke(&stroke)?;
        Ok(true)
    }

    /// Reads the pixel under a normalized pointer position.
    pub fn probe(&self, u: f32, v: f32) -> Option<PixelProbe> {
        if !((0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v)) {
            return None;
        }
        let x = (u * self.buffer.width() as f32).floor() as u32;
        let y = (v * self.buffer.height() as f32).floor() as u32;
        let color = self.buffer.get(x, y).ok()?;
        Some(PixelProbe { x, y, color })
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Raw RGBA8 store for handing to a display surface.
    pub fn pixels(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn load_path(&self) -> &str {
        &self.load_path
    }

    pub fn paint_mode(&self) -> PaintMode {
        self.config.paint.mode
    }

    pub fn set_paint_mode(&mut self, mode: PaintMode) {
        self.config.paint.mode = mode;
    }

    pub fn settings(&self) -> &PaintSettings {
        &self.config.paint
    }

    pub fn settings_mut(&mut self) -> &mut PaintSettings {
        &mut self.config.paint
    }

    pub fn save_directory(&self) -> &Path {
        &self.persistence.config().directory
    }

    pub fn config(&self) -> &PainterConfig {
        &self.config
    }
}
