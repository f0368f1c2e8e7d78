//! WebSocket transport.
//!
//! The connection is split into a writer task draining outbound events and a
//! reader task decoding inbound frames. Both talk to the session through
//! unbounded channels, so emitting never blocks the caller.

use futures_util::{Sink, SinkExt, Stream, StreamExt};
use roomchat_shared::protocol::{self, ClientEvent, ServerEvent};
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::{
    error::ClientError,
    transport::{Transport, TransportError},
};

/// Outbound half of a WebSocket connection
#[derive(Debug, Clone)]
pub struct WebSocketTransport {
    outbound: mpsc::UnboundedSender<ClientEvent>,
}

impl Transport for WebSocketTransport {
    fn emit(&self, event: ClientEvent) -> Result<(), TransportError> {
        self.outbound
            .send(event)
            .map_err(|_| TransportError::Closed)
    }
}

/// Inbound half of a WebSocket connection
///
/// Dropping it stops the reader task.
pub struct Inbound {
    events: mpsc::UnboundedReceiver<ServerEvent>,
    reader: JoinHandle<()>,
}

impl Inbound {
    /// Next event from the server, `None` once the connection is gone
    pub async fn recv(&mut self) -> Option<ServerEvent> {
        self.events.recv().await
    }
}

impl Drop for Inbound {
    fn drop(&mut self) {
        self.reader.abort();
    }
}

/// Connect to the chat server
///
/// # Arguments
///
/// * `url` - WebSocket URL of the server (e.g., "ws://127.0.0.1:5000/ws")
///
/// # Errors
///
/// Returns `ClientError::ConnectionError` if the handshake fails.
pub async fn connect(url: &str) -> Result<(WebSocketTransport, Inbound), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to chat server at {}", url);

    let (write, read) = ws_stream.split();

    let (outbound_tx, outbound_rx) = mpsc::unbounded_channel::<ClientEvent>();
    let (inbound_tx, inbound_rx) = mpsc::unbounded_channel::<ServerEvent>();

    tokio::spawn(writer_loop(outbound_rx, write));
    let reader = tokio::spawn(reader_loop(read, inbound_tx));

    Ok((
        WebSocketTransport {
            outbound: outbound_tx,
        },
        Inbound {
            events: inbound_rx,
            reader,
        },
    ))
}

async fn writer_loop<S>(mut outbound: mpsc::UnboundedReceiver<ClientEvent>, mut write: S)
where
    S: Sink<Message> + Unpin,
    S::Error: std::fmt::Display,
{
    while let Some(event) = outbound.recv().await {
        let json = match protocol::encode(&event) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("{}", e);
                continue;
            }
        };

        tracing::debug!("Emitting '{}'", event.name());
        if let Err(e) = write.send(Message::Text(json.into())).await {
            tracing::warn!("Failed to send '{}': {}", event.name(), e);
            break;
        }
    }

    write.close().await.ok();
}

async fn reader_loop<R, E>(mut read: R, inbound: mpsc::UnboundedSender<ServerEvent>)
where
    R: Stream<Item = Result<Message, E>> + Unpin,
    E: std::fmt::Display,
{
    while let Some(frame) = read.next().await {
        match frame {
            Ok(Message::Text(text)) => match protocol::decode::<ServerEvent>(&text) {
                Ok(event) => {
                    if inbound.send(event).is_err() {
                        break;
                    }
                }
                Err(e) => tracing::warn!("Ignoring frame: {}", e),
            },
            Ok(Message::Binary(data)) => {
                tracing::debug!("Ignoring {} bytes of binary data", data.len());
            }
            Ok(Message::Close(_)) => {
                tracing::info!("Server closed the connection");
                break;
            }
            Err(e) => {
                tracing::warn!("WebSocket read error: {}", e);
                break;
            }
            _ => {}
        }
    }
}
