//! Pixel storage module
//!
//! Holds the RGBA8 buffer that strokes are painted into and the color types
//! used to blend into it.

mod buffer;
pub mod types;


pub use buffer::PixelBuffer;
pub use types::{Channel, Color4, NormalizedColor, quantize_channel};
