use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::deform_map::codec::{CodecConfig, ImageCodec, PixelDecoder, PixelEncoder, PngEncoder, StandardDecoder};
use crate::deform_map::common::error::{PainterError, Result};
use crate::deform_map::persistence::clock::{Clock, LocalClock};
use crate::deform_map::persistence::types::{SAVE_EXTENSION, SaveConfig};
use crate::deform_map::pixel::PixelBuffer;

/// Reads and writes deformation maps on disk through an [`ImageCodec`].
pub struct TexturePersistence<D: PixelDecoder, E: PixelEncoder, C: Clock> {
    codec: ImageCodec<D, E>,
    clock: C,
    config: SaveConfig,
}

impl TexturePersistence<StandardDecoder, PngEncoder, LocalClock> {
    pub fn new(codec_config: CodecConfig, config: SaveConfig) -> Self {
        Self {
            codec: ImageCodec::new(codec_config),
            clock: LocalClock,
            config,
        }
    }
}

impl<D: PixelDecoder, E: PixelEncoder, C: Clock> TexturePersistence<D, E, C> {
    pub fn with_custom(codec: ImageCodec<D, E>, clock: C, config: SaveConfig) -> Self {
        Self {
            codec,
            clock,
            config,
        }
    }

    /// Reads and decodes the image at `path`.
    ///
    /// Fails with `FileNotFound` when `path` is not a readable file and with
    /// `DecodeError` (naming the path) when the contents are not an image.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<PixelBuffer> {
        let path = path.as_ref();

        if !path.is_file() {
            warn!("No file at {}", path.display());
            return Err(PainterError::FileNotFound(path.to_path_buf()));
        }

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            fs::read(path).map_err(|e| match e.kind() {
                ErrorKind::NotFound => PainterError::FileNotFound(path.to_path_buf()),
                _ => PainterError::InputReadError(format!("{}: {}", path.display(), e)),
            })?
        };

        let buffer = self.codec.decode(&input_data).map_err(|e| match e {
            PainterError::DecodeError(reason) => {
                PainterError::DecodeError(format!("{}: {}", path.display(), reason))
            }
            other => other,
        })?;

        info!(
            width = buffer.width(),
            height = buffer.height(),
            "Loaded {}",
            path.display()
        );
        Ok(buffer)
    }

    /// Saves into the configured directory under the configured base name.
    pub fn save(&self, buffer: &PixelBuffer) -> Result<PathBuf> {
        self.save_as(buffer, &self.config.directory, &self.config.base_name)
    }

    /// Encodes `buffer` and writes it to `{directory}/{base_name}.png`.
    ///
    /// An existing file is never overwritten: the name gains a `_YYMMDDHHMMSS`
    /// suffix, and if that name is taken too the save fails with
    /// `SaveCollision`. Returns the path actually written.
    #[instrument(skip(self, buffer, directory), fields(directory = %directory.as_ref().display()))]
    pub fn save_as<P: AsRef<Path>>(&self, buffer: &PixelBuffer, directory: P, base_name: &str) -> Result<PathBuf> {
        let directory = directory.as_ref();

        let bytes = {
            let _span = tracing::info_span!("encode_image").entered();
            self.codec.encode(buffer)?
        };

        fs::create_dir_all(directory).map_err(|e| {
            PainterError::OutputWriteError(format!("{}: {}", directory.display(), e))
        })?;

        let path = self.resolve_save_path(directory, base_name);

        {
            let _span = tracing::info_span!("write_output_file", bytes = bytes.len()).entered();
            write_new_file(&path, &bytes)?;
        }

        info!("Saved {}", path.display());
        Ok(path)
    }

    fn resolve_save_path(&self, directory: &Path, base_name: &str) -> PathBuf {
        let path = directory.join(format!("{}.{}", base_name, SAVE_EXTENSION));
        if !path.exists() {
            return path;
        }

        let stamped = directory.join(format!(
            "{}_{}.{}",
            base_name,
            self.clock.timestamp(),
            SAVE_EXTENSION
        ));
        debug!("{} exists, trying {}", path.display(), stamped.display());
        stamped
    }

    pub fn codec(&self) -> &ImageCodec<D, E> {
        &self.codec
    }

    pub fn config(&self) -> &SaveConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SaveConfig) {
        self.config = config;
    }
}

fn write_new_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => PainterError::SaveCollision(path.to_path_buf()),
            _ => PainterError::OutputWriteError(format!("{}: {}", path.display(), e)),
        })?;

    write_or_discard(path, file, bytes)
}

/// Writes `bytes` to the freshly created `path`, deleting it if the write fails.
pub(super) fn write_or_discard<W: Write>(path: &Path, mut out: W, bytes: &[u8]) -> Result<()> {
    if let Err(e) = out.write_all(bytes).and_then(|_| out.flush()) {
        drop(out);
        // The write error is the one worth reporting.
        let _ = fs::remove_file(path);
        warn!("Removed partially written {}", path.display());
        return Err(PainterError::OutputWriteError(format!("{}: {}", path.display(), e)));
    }
    Ok(())
}
