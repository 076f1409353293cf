//! Painter session module
//!
//! This module owns the live deformation map and exposes the operations a
//! host (GUI, CLI, game loop) drives it with.

mod painter_session;
pub mod types;


pub use painter_session::{DefaultPersistence, PainterSession};
pub use types::{
    PaintMode, PaintSettings, PainterConfig, PainterConfigBuilder, PixelProbe, PointerButton,
    PointerEvent,
};
