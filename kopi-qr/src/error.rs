//! Error types for QR generation

use std::path::PathBuf;

use thiserror::Error;

/// QR generation error types
#[derive(Debug, Error)]
pub enum QrError {
    /// Output directory could not be created
    #[error("Cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// URL does not fit in a QR code
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// PNG could not be written
    #[error("Image write failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for QR operations
pub type QrResult<T> = Result<T, QrError>;
