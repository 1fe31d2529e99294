//! Error types for the relay.
//!
//! [`RelayError`] is the top-level error; [`ErrorKind`] tags it as configuration, transport or
//! upstream so callers can branch on the kind instead of matching every variant.

use thiserror::Error;

/// Top-level error for the relay (startup config, bot transport, upstream completion API).
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

/// Coarse classification of a [`RelayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid configuration; fatal at startup.
    Configuration,
    /// Sending to the chat platform failed.
    Transport,
    /// The completion API failed (network, status, timeout, payload).
    Upstream,
}

impl RelayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RelayError::Config(_) => ErrorKind::Configuration,
            RelayError::Bot(_) => ErrorKind::Transport,
            RelayError::Upstream(_) => ErrorKind::Upstream,
        }
    }
}

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;
