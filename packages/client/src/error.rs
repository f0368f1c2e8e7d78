//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection could not be established
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The server went away while the session was running
    #[error("Connection lost")]
    ConnectionLost,
}
