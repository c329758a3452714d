//! Error types for downstream-cascade

use thiserror::Error;

/// Errors surfaced by the cascade library
#[derive(Error, Debug)]
pub enum Error {
    /// Run inputs are unusable (missing or malformed before any host call)
    #[error("configuration error: {0}")]
    Config(String),

    /// The host returned a branch collection we cannot interpret
    #[error("malformed host response: {0}")]
    MalformedHostResponse(String),

    /// Host-side rejection or transport failure
    #[error("host error: {0}")]
    Host(String),

    /// GitHub API client error
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// I/O error (step-output file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
