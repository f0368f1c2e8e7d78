//! MessagePusher trait 定義
//!
//! 接続中のクライアントへテキストフレームを送るためのインターフェース。

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::ConnectionId;

/// Channel feeding the outbound half of one WebSocket connection
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Errors raised while pushing messages
#[derive(Debug, Error)]
pub enum MessagePushError {
    #[error("Connection '{0}' not found")]
    ConnectionNotFound(ConnectionId),

    #[error("Failed to push message: {0}")]
    PushFailed(String),
}

/// Delivers encoded events to connections
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    async fn register_connection(&self, connection: ConnectionId, sender: PusherChannel);

    async fn unregister_connection(&self, connection: &ConnectionId);

    /// Push to a single connection
    async fn push_to(&self, connection: &ConnectionId, content: &str)
    -> Result<(), MessagePushError>;

    /// Push to several connections; individual failures are tolerated
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError>;
}
