//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository},
    usecase::{
        ConnectUseCase, DisconnectUseCase, JoinRoomUseCase, ListRoomsUseCase, ReportErrorUseCase,
        SendMessageUseCase,
    },
};

use super::{
    handler::{
        http::{get_rooms, health_check},
        websocket::websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Room relay server
///
/// # Example
///
/// ```ignore
/// let server = Server::in_memory();
/// server.run("127.0.0.1".to_string(), 5000).await?;
/// ```
pub struct Server {
    connect_usecase: Arc<ConnectUseCase>,
    join_room_usecase: Arc<JoinRoomUseCase>,
    send_message_usecase: Arc<SendMessageUseCase>,
    disconnect_usecase: Arc<DisconnectUseCase>,
    list_rooms_usecase: Arc<ListRoomsUseCase>,
    report_error_usecase: Arc<ReportErrorUseCase>,
}

impl Server {
    pub fn new(
        connect_usecase: Arc<ConnectUseCase>,
        join_room_usecase: Arc<JoinRoomUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        disconnect_usecase: Arc<DisconnectUseCase>,
        list_rooms_usecase: Arc<ListRoomsUseCase>,
        report_error_usecase: Arc<ReportErrorUseCase>,
    ) -> Self {
        Self {
            connect_usecase,
            join_room_usecase,
            send_message_usecase,
            disconnect_usecase,
            list_rooms_usecase,
            report_error_usecase,
        }
    }

    /// Wire the use cases to the in-memory repository and the WebSocket pusher
    pub fn in_memory() -> Self {
        // 1. Repository (in-memory database)
        let repository = Arc::new(InMemoryRoomRepository::default());

        // 2. MessagePusher (WebSocket implementation)
        let message_pusher = Arc::new(WebSocketMessagePusher::default());

        // 3. UseCases
        Self::new(
            Arc::new(ConnectUseCase::new(message_pusher.clone())),
            Arc::new(JoinRoomUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            Arc::new(SendMessageUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            Arc::new(DisconnectUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            Arc::new(ListRoomsUseCase::new(repository)),
            Arc::new(ReportErrorUseCase::new(message_pusher)),
        )
    }

    /// Build the router with all endpoints
    pub fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            connect_usecase: self.connect_usecase,
            join_room_usecase: self.join_room_usecase,
            send_message_usecase: self.send_message_usecase,
            disconnect_usecase: self.disconnect_usecase,
            list_rooms_usecase: self.list_rooms_usecase,
            report_error_usecase: self.report_error_usecase,
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the server until Ctrl+C
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 5000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Chat room server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
    }
}
