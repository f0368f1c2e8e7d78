//! UseCase: エラーイベントの返信
//!
//! 不正なイベントを送ってきた接続にだけ `error` イベントを返す。

use std::sync::Arc;

use roomchat_shared::protocol::{self, ErrorPayload, ServerEvent};

use crate::domain::{ConnectionId, MessagePusher};

/// 送信元の接続へエラーを返すユースケース
pub struct ReportErrorUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl ReportErrorUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// Push an `error` event to `connection`; failures are only logged
    pub async fn execute(&self, connection: ConnectionId, error: ErrorPayload) {
        let json = match protocol::encode(&ServerEvent::Error(error)) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("{}", e);
                return;
            }
        };

        if let Err(e) = self.message_pusher.push_to(&connection, &json).await {
            tracing::warn!("Failed to send error event to '{}': {}", connection, e);
        }
    }
}
