//! UseCase errors.
//!
//! The display text of each variant is the `msg` sent back to the client in
//! an `error` event.

use roomchat_shared::protocol::ErrorPayload;
use thiserror::Error;

/// Errors of the `join` event
#[derive(Debug, Error)]
pub enum JoinRoomError {
    #[error("Invalid input: username and room are required")]
    InvalidInput,

    #[error("An error occurred while processing your request")]
    Internal(String),
}

impl JoinRoomError {
    pub fn to_error_payload(&self) -> ErrorPayload {
        match self {
            JoinRoomError::InvalidInput => ErrorPayload::new(self.to_string()),
            JoinRoomError::Internal(detail) => {
                ErrorPayload::new(self.to_string()).with_detail(detail.clone())
            }
        }
    }
}

/// Errors of the `send_message` event
#[derive(Debug, Error)]
pub enum SendMessageError {
    #[error("Invalid message: room is required")]
    MissingRoom,

    #[error("An error occurred while processing your message")]
    Internal(String),
}

impl SendMessageError {
    pub fn to_error_payload(&self) -> ErrorPayload {
        match self {
            SendMessageError::MissingRoom => ErrorPayload::new(self.to_string()),
            SendMessageError::Internal(detail) => {
                ErrorPayload::new(self.to_string()).with_detail(detail.clone())
            }
        }
    }
}
