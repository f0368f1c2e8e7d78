//! HTTP API response DTOs.

use serde::Serialize;

use crate::domain::Room;

/// Entry of `GET /api/rooms`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummaryDto {
    pub name: String,
    pub members: usize,
}

impl From<&Room> for RoomSummaryDto {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name.as_str().to_string(),
            members: room.member_count(),
        }
    }
}
