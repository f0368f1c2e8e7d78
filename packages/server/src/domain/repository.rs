//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ConnectionId, Room, RoomName};

/// Room Repository trait
///
/// Tracks which connections joined which rooms. A connection may be a member
/// of several rooms at once; joining a room never removes it from another.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Add a connection to a room, creating the room on first join.
    ///
    /// Returns `false` if the connection was already a member.
    async fn add_member(&self, room: RoomName, connection: ConnectionId) -> bool;

    /// Connections currently in a room (empty for unknown rooms)
    async fn get_members(&self, room: &RoomName) -> Vec<ConnectionId>;

    /// Remove a connection from every room, dropping rooms left empty.
    ///
    /// Returns the rooms the connection was in.
    async fn remove_from_all(&self, connection: &ConnectionId) -> Vec<RoomName>;

    /// All rooms, sorted by name
    async fn list_rooms(&self) -> Vec<Room>;
}
