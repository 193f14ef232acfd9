// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrandError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("color {hex} appears in more than one of primary/secondary/prohibited")]
    ConflictingColorRule { hex: String },

    #[error("invalid hex color: {0:?} (expected 3 or 6 hex digits)")]
    InvalidHex(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("image error: {0}")]
    Image(String),
}

pub type Result<T> = std::result::Result<T, BrandError>;

// Allow `?` on std::io::Error by converting to BrandError::Io with unknown path.
impl From<std::io::Error> for BrandError {
    fn from(source: std::io::Error) -> Self {
        BrandError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<image::ImageError> for BrandError {
    fn from(e: image::ImageError) -> Self {
        BrandError::Image(e.to_string())
    }
}
