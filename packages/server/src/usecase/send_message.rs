//! UseCase: メッセージ送信処理
//!
//! - room が空なら拒否する
//! - 送信者がルームのメンバーかどうかは確認しない
//! - ルームの全メンバー（メンバーであれば送信者も含む）に配信する

use std::sync::Arc;

use roomchat_shared::protocol::{self, SendMessagePayload, ServerEvent};

use crate::domain::{ConnectionId, MessagePusher, RoomName, RoomRepository};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl SendMessageUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ConnectionId>)` - 配信対象の接続
    /// * `Err(SendMessageError)` - 送信失敗
    pub async fn execute(
        &self,
        from: ConnectionId,
        payload: SendMessagePayload,
    ) -> Result<Vec<ConnectionId>, SendMessageError> {
        let room =
            RoomName::try_from(payload.room).map_err(|_| SendMessageError::MissingRoom)?;

        let event = ServerEvent::message(payload.username, payload.msg);
        let json =
            protocol::encode(&event).map_err(|e| SendMessageError::Internal(e.to_string()))?;

        let targets = self.repository.get_members(&room).await;
        tracing::debug!(
            "Connection '{}' sends to room '{}' ({} members)",
            from,
            room.as_str(),
            targets.len()
        );

        self.message_pusher
            .broadcast(targets.clone(), &json)
            .await
            .map_err(|e| SendMessageError::Internal(e.to_string()))?;

        Ok(targets)
    }
}
