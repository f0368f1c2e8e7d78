//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use roomchat_shared::protocol::{self, ClientEvent, ErrorPayload};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionId,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound message flow: events pushed to this
/// connection (via rx channel) are written to its WebSocket.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive messages
    let (tx, rx) = mpsc::unbounded_channel();
    let connection = state.connect_usecase.execute(tx).await;
    tracing::info!("Connection '{}' opened", connection);

    let state_clone = state.clone();

    // Spawn a task to receive events from this connection
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received text from '{}': {}", connection, text.as_str());

                    let reply = match protocol::decode::<ClientEvent>(text.as_str()) {
                        Ok(event) => handle_event(&state_clone, connection, event).await,
                        Err(e) => {
                            tracing::warn!("Malformed event from '{}': {}", connection, e);
                            Some(ErrorPayload::new("Malformed event").with_detail(e.to_string()))
                        }
                    };

                    if let Some(error) = reply {
                        state_clone
                            .report_error_usecase
                            .execute(connection, error)
                            .await;
                    }
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to write events pushed to this connection
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    let rooms = state.disconnect_usecase.execute(connection).await;
    tracing::info!(
        "Connection '{}' closed and removed from {} room(s)",
        connection,
        rooms.len()
    );
}

/// Run the use case for one event; returns the error to report to the sender, if any
async fn handle_event(
    state: &AppState,
    connection: ConnectionId,
    event: ClientEvent,
) -> Option<ErrorPayload> {
    match event {
        ClientEvent::Join(payload) => {
            let username = payload.username.clone();
            match state.join_room_usecase.execute(connection, payload).await {
                Ok(room) => {
                    tracing::info!(
                        "'{}' ({}) joined room '{}'",
                        username,
                        connection,
                        room.as_str()
                    );
                    None
                }
                Err(e) => {
                    tracing::warn!("Join from '{}' rejected: {:?}", connection, e);
                    Some(e.to_error_payload())
                }
            }
        }
        ClientEvent::SendMessage(payload) => {
            match state.send_message_usecase.execute(connection, payload).await {
                Ok(targets) => {
                    tracing::debug!("Message delivered to {} connection(s)", targets.len());
                    None
                }
                Err(e) => {
                    tracing::warn!("Message from '{}' rejected: {:?}", connection, e);
                    Some(e.to_error_payload())
                }
            }
        }
    }
}
