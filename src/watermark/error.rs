//! Watermark error types.
//!
//! Defines errors that can occur while watermarking a single image. These are
//! caught at the single-image boundary and never abort a batch.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during watermark processing.
#[derive(Error, Debug)]
pub enum WatermarkError {
    /// Base image or logo could not be opened or decoded
    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Logo resampling failed
    #[error("Failed to resize logo: {0}")]
    Resize(String),

    /// Result could not be encoded or written
    #[error("Failed to encode image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Filesystem error around the output (e.g. parent directory creation)
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WatermarkError {
    /// Path of the file the error is about, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Decode { path, .. } | Self::Encode { path, .. } | Self::Io { path, .. } => {
                Some(path)
            }
            Self::Resize(_) => None,
        }
    }
}
