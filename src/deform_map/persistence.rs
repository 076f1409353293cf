//! Texture persistence module
//!
//! This module loads deformation maps from image files and saves them as PNG
//! without overwriting earlier saves.

mod clock;
mod texture_persistence;
pub mod types;


pub use clock::{Clock, LocalClock, TIMESTAMP_FORMAT};
pub use texture_persistence::TexturePersistence;
pub use types::{
    APP_DIR_NAME, DEFAULT_BASE_NAME, SAVE_EXTENSION, SaveConfig, SaveConfigBuilder,
    default_save_directory, trim_path_quotes,
};
