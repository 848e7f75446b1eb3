//! Error types for the renderer

use thiserror::Error;

/// Result type alias using the renderer's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the per-pixel pipeline. Marching itself
/// has no error path; a ray that finds nothing is a `Miss`, not a failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame configuration parse error
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
