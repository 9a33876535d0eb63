//! Error types for the application

use thiserror::Error;

/// Result type alias using our EngineError
pub type Result<T> = std::result::Result<T, EngineError>;

/// Main error type for engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// Feed I/O errors (replay file missing, unreadable)
    #[error("Feed I/O error: {0}")]
    FeedIo(#[from] std::io::Error),

    /// Malformed feed record
    #[error("Malformed feed record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Order rejected by the gateway
    #[error("Order rejected: {0}")]
    OrderRejected(String),

    /// Referenced an order the gateway does not know
    #[error("Unknown order id: {0}")]
    UnknownOrder(u64),

    /// Channel send errors
    #[error("Channel send error: {0}")]
    ChannelSend(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Shorthand for a configuration error from any displayable cause
    pub fn config(msg: impl std::fmt::Display) -> Self {
        EngineError::Configuration(msg.to_string())
    }
}
