//! Error types for parley.

use thiserror::Error;

/// Result type for parley operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for parley operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Tokenization or part-of-speech tagging failed.
    #[error("Tagging failed: {0}")]
    Tagging(String),

    /// A lexical resource is missing or unavailable.
    #[error("Lexical resource unavailable: {0}")]
    Resource(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a tagging error.
    pub fn tagging(msg: impl Into<String>) -> Self {
        Error::Tagging(msg.into())
    }

    /// Create a resource error.
    pub fn resource(msg: impl Into<String>) -> Self {
        Error::Resource(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
