//! Error types
//!
//! The mapper itself never fails. These errors cover the surfaces around it:
//! loading configuration, reading and writing replay files, parsing CLI input.

use thiserror::Error;

/// Errors that can occur outside of the mapping pass
#[derive(Error, Debug)]
pub enum MapperError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for fallible operations around the mapper
pub type MapperResult<T> = Result<T, MapperError>;
