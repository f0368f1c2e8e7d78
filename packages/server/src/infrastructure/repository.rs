//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! BTreeMap をインメモリ DB として使用します（ルーム名順に列挙できるため）。

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, Room, RoomName, RoomRepository};

/// インメモリ Room Repository 実装
#[derive(Default)]
pub struct InMemoryRoomRepository {
    rooms: Mutex<BTreeMap<RoomName, Room>>,
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn add_member(&self, room: RoomName, connection: ConnectionId) -> bool {
        let mut rooms = self.rooms.lock().await;
        rooms
            .entry(room.clone())
            .or_insert_with(|| {
                tracing::debug!("Room '{}' created", room.as_str());
                Room::new(room)
            })
            .add_member(connection)
    }

    async fn get_members(&self, room: &RoomName) -> Vec<ConnectionId> {
        let rooms = self.rooms.lock().await;
        rooms.get(room).map(Room::members).unwrap_or_default()
    }

    async fn remove_from_all(&self, connection: &ConnectionId) -> Vec<RoomName> {
        let mut rooms = self.rooms.lock().await;

        let left: Vec<RoomName> = rooms
            .values_mut()
            .filter_map(|room| room.remove_member(connection).then(|| room.name.clone()))
            .collect();

        rooms.retain(|name, room| {
            let keep = !room.is_empty();
            if !keep {
                tracing::debug!("Room '{}' removed (empty)", name.as_str());
            }
            keep
        });

        left
    }

    async fn list_rooms(&self) -> Vec<Room> {
        let rooms = self.rooms.lock().await;
        rooms.values().cloned().collect()
    }
}
