//! Error types for bing-geocoder

use thiserror::Error;

/// Main error type for bing-geocoder operations
///
/// Only construction-time misconfiguration is fatal to callers; per-request
/// transport and payload failures are absorbed by the client and surface as
/// empty result sets instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for bing-geocoder operations
pub type Result<T> = std::result::Result<T, Error>;
