//! Error types for the joke fetch path
//!
//! Every failure that can happen while fetching a joke ends up here and is
//! eventually rendered as text inside the modal. Nothing in the interaction
//! flow itself can fail.

use thiserror::Error;

/// Errors produced while fetching a joke
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JokeError {
    /// No API credential available in the environment
    #[error("OpenAI API key not set ({0})")]
    MissingCredential(String),

    /// Request failed below HTTP (DNS, connect, reset, TLS)
    #[error("{0}")]
    Transport(String),

    /// Endpoint answered with a non-success status
    #[error("{0}")]
    Api(String),

    /// Success status, but the body was not the JSON we expected
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Async runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl From<std::io::Error> for JokeError {
    fn from(e: std::io::Error) -> Self {
        JokeError::Runtime(e.to_string())
    }
}

impl From<reqwest::Error> for JokeError {
    fn from(e: reqwest::Error) -> Self {
        JokeError::Transport(e.to_string())
    }
}

impl JokeError {
    /// Check if this error is recoverable
    ///
    /// Recoverable errors may go away on the next press. The rest need
    /// the user to fix their setup.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Needs the environment to be fixed
            JokeError::MissingCredential(_) => false,
            // Network blips, rate limits and garbled bodies are transient
            JokeError::Transport(_) => true,
            JokeError::Api(_) => true,
            JokeError::InvalidResponse(_) => true,
            JokeError::Runtime(_) => false,
        }
    }
}

/// Result type alias for joke operations
pub type Result<T> = std::result::Result<T, JokeError>;
