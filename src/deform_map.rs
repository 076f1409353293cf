//! Deformation map painting module
//!
//! This module paints Gaussian brush strokes into an RGBA deformation map and
//! persists the map as PNG, with separate modules for pixel storage, brush
//! compositing, image coding, file persistence and session orchestration.

pub mod pixel;
pub mod brush;
pub mod codec;
pub mod persistence;
pub mod session;
pub mod common;

pub use common::{
    PainterError,
    Result,
};

pub use pixel::{
    Channel,
    Color4,
    NormalizedColor,
    PixelBuffer,
};

pub use brush::{
    BrushEngine,
    BrushEngineConfig,
    BrushStroke,
    GaussianBrushEngine,
    ScanStrategy,
};

pub use codec::{
    ChannelOrder,
    CodecConfig,
    ImageCodec,
    PngCompression,
};

pub use persistence::{
    SaveConfig,
    TexturePersistence,
};

pub use session::{
    PaintMode,
    PaintSettings,
    PainterConfig,
    PainterSession,
    PixelProbe,
    PointerButton,
    PointerEvent,
};
