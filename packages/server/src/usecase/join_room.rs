//! UseCase: ルームへの参加
//!
//! - username / room のどちらかが空なら参加を拒否する
//! - 参加済みの他のルームからは退出しない
//! - 参加者本人を含むルームの全員にシステムメッセージを送る

use std::sync::Arc;

use roomchat_shared::protocol::{self, JoinPayload, SYSTEM_USERNAME, ServerEvent};

use crate::domain::{ConnectionId, MessagePusher, RoomName, RoomRepository, Username};

use super::error::JoinRoomError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルーム参加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(RoomName)` - 参加したルーム
    /// * `Err(JoinRoomError)` - 入力不正、またはアナウンスの送信失敗
    pub async fn execute(
        &self,
        connection: ConnectionId,
        payload: JoinPayload,
    ) -> Result<RoomName, JoinRoomError> {
        let (Ok(username), Ok(room)) = (
            Username::try_from(payload.username),
            RoomName::try_from(payload.room),
        ) else {
            return Err(JoinRoomError::InvalidInput);
        };

        // 1. Repository 経由でルームに参加
        if !self.repository.add_member(room.clone(), connection).await {
            tracing::debug!(
                "Connection '{}' is already in room '{}'",
                connection,
                room.as_str()
            );
        }

        // 2. 参加アナウンスをルーム全員にブロードキャスト
        let announcement = ServerEvent::message(
            SYSTEM_USERNAME,
            format!("{} has joined the room.", username.as_str()),
        );
        let json =
            protocol::encode(&announcement).map_err(|e| JoinRoomError::Internal(e.to_string()))?;
        let members = self.repository.get_members(&room).await;
        self.message_pusher
            .broadcast(members, &json)
            .await
            .map_err(|e| JoinRoomError::Internal(e.to_string()))?;

        Ok(room)
    }
}
