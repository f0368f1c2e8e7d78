//! UseCase: ルーム一覧の取得

use std::sync::Arc;

use crate::domain::{Room, RoomRepository};

/// ルーム一覧取得のユースケース
pub struct ListRoomsUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl ListRoomsUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Rooms with at least one member, sorted by name
    pub async fn execute(&self) -> Vec<Room> {
        self.repository.list_rooms().await
    }
}
