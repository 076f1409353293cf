use std::path::PathBuf;

use thiserror::Error;

use crate::deform_map::pixel::Channel;

#[derive(Error, Debug)]
pub enum PainterError {
    #[error("Invalid texture dimensions: width={0}, height={1}")]
    InvalidDimension(u32, u32),

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Invalid brush parameter: {0}")]
    InvalidParameter(String),

    #[error("Pixel data holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("File not found : {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Save target already exists: {}", .0.display())]
    SaveCollision(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PainterError {
    pub(crate) fn clamp_range(channel: Channel, min: f32, max: f32) -> Self {
        PainterError::InvalidParameter(format!(
            "clamp range [{}, {}] on channel {:?} is empty or not finite",
            min, max, channel
        ))
    }
}

pub type Result<T> = std::result::Result<T, PainterError>;
