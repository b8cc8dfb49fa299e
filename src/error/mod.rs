//! Crate error type.
//!
//! There is no domain error taxonomy here: failures from the underlying
//! libraries pass through unmodified to the caller. The enum only gives the
//! public API a single fallible surface.

use thiserror::Error;

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for the Vistas clients.
#[derive(Error, Debug)]
pub enum Error {
    /// An endpoint or base URL failed to parse.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Transport-level failure from the HTTP client, including non-success
    /// status codes.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// A response body failed to decode.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configuration value was missing or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),
}
