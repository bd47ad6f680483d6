//! Error types for regionsweep.

use thiserror::Error;

/// Result type alias for regionsweep operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering and dispatching regions.
#[derive(Error, Debug)]
pub enum Error {
    // Provider errors
    #[error("{0}")]
    Provider(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    // Per-region errors, raised by processors and never observed by the dispatcher
    #[error("Processing failed in {region}: {message}")]
    Processing { region: String, message: String },

    // Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a processing error for a region.
    pub fn processing(region: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Processing {
            region: region.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
