//! Outbound side of the connection to the chat server.

use roomchat_shared::protocol::ClientEvent;
use thiserror::Error;

/// Transport errors
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Transport is closed")]
    Closed,
}

/// Fire-and-forget emitter of client events.
///
/// `emit` hands the event over and returns without waiting for the server.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    fn emit(&self, event: ClientEvent) -> Result<(), TransportError>;
}
