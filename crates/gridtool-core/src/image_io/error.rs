use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported image format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ImageIoError {
    /// Path of the file the failed operation was working on
    pub fn path(&self) -> &PathBuf {
        match self {
            ImageIoError::Io { path, .. }
            | ImageIoError::UnsupportedFormat { path, .. }
            | ImageIoError::Decode { path, .. }
            | ImageIoError::Encode { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageIoError>;
