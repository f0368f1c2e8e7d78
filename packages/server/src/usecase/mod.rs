//! UseCase layer: one struct per operation of the relay.

mod connect;
mod disconnect;
mod error;
mod join_room;
mod list_rooms;
mod report_error;
mod send_message;

pub use connect::ConnectUseCase;
pub use disconnect::DisconnectUseCase;
pub use error::{JoinRoomError, SendMessageError};
pub use join_room::JoinRoomUseCase;
pub use list_rooms::ListRoomsUseCase;
pub use report_error::ReportErrorUseCase;
pub use send_message::SendMessageUseCase;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use crate::{
        domain::{ConnectionId, MessagePusher},
        infrastructure::{
            message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository,
        },
    };

    pub fn create_repository() -> Arc<InMemoryRoomRepository> {
        Arc::new(InMemoryRoomRepository::default())
    }

    pub fn create_pusher() -> Arc<WebSocketMessagePusher> {
        Arc::new(WebSocketMessagePusher::default())
    }

    /// Register a fresh connection and return its id with the receiving end
    pub async fn register(
        pusher: &WebSocketMessagePusher,
    ) -> (ConnectionId, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let connection = ConnectionId::generate();
        pusher.register_connection(connection, tx).await;
        (connection, rx)
    }
}
