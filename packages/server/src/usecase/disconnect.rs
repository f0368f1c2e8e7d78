//! UseCase: 切断処理
//!
//! 接続を全てのルームから外し、MessagePusher の登録を解除する。
//! 退出の通知は送らない。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomName, RoomRepository};

/// 切断のユースケース
pub struct DisconnectUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// Returns the rooms the connection was in
    pub async fn execute(&self, connection: ConnectionId) -> Vec<RoomName> {
        let rooms = self.repository.remove_from_all(&connection).await;
        self.message_pusher.unregister_connection(&connection).await;
        rooms
    }
}
