//! Save location configuration

use std::path::PathBuf;

/// Directory name used under the platform data directory
pub const APP_DIR_NAME: &str = "deform-map-painter";

pub const DEFAULT_BASE_NAME: &str = "DeformMap";

/// File extension of saved deformation maps
pub const SAVE_EXTENSION: &str = "png";

/// Resolves the application data directory, falling back to the working directory.
pub fn default_save_directory() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Strips the quote characters a pasted path is often wrapped in.
pub fn trim_path_quotes(path: &str) -> &str {
    path.trim_matches('"')
}

/// Where `save` writes deformation maps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveConfig {
    pub directory: PathBuf,
    /// File stem; a timestamp suffix is appended on collision
    pub base_name: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            directory: default_save_directory(),
            base_name: DEFAULT_BASE_NAME.to_string(),
        }
    }
}

impl SaveConfig {
    pub fn builder() -> SaveConfigBuilder {
        SaveConfigBuilder::default()
    }
}

/// Builder for SaveConfig
#[derive(Default)]
pub struct SaveConfigBuilder {
    directory: Option<PathBuf>,
    base_name: Option<String>,
}

impl SaveConfigBuilder {
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = Some(base_name.into());
        self
    }

    pub fn build(self) -> SaveConfig {
        SaveConfig {
            directory: self.directory.unwrap_or_else(default_save_directory),
            base_name: self
                .base_name
                .unwrap_or_else(|| DEFAULT_BASE_NAME.to_string()),
        }
    }
}
