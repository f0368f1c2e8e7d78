//! UseCase: 接続の登録

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel};

/// 新しい接続を登録するユースケース
pub struct ConnectUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// Assign an id to a new connection and make it reachable by pushes
    pub async fn execute(&self, sender: PusherChannel) -> ConnectionId {
        let connection = ConnectionId::generate();
        self.message_pusher
            .register_connection(connection, sender)
            .await;
        connection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::test_support::create_pusher;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_connect_registers_sender() {
        // テスト項目: 接続後、割り当てられた ID 宛ての送信が届く
        // given (前提条件):
        let pusher = create_pusher();
        let usecase = ConnectUseCase::new(pusher.clone());
        let (tx, mut rx) = mpsc::unbounded_channel();

        // when (操作):
        let connection = usecase.execute(tx).await;

        // then (期待する結果):
        pusher.push_to(&connection, "ping").await.unwrap();
        assert_eq!(rx.recv().await, Some("ping".to_string()));
    }
}
