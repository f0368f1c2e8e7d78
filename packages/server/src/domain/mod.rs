//! Domain layer: value objects, the room entity and the seams implemented by
//! the infrastructure layer.

mod entity;
mod pusher;
mod repository;
mod value_object;

pub use entity::Room;
pub use pusher::{MessagePushError, MessagePusher, PusherChannel};
pub use repository::RoomRepository;
pub use value_object::{ConnectionId, RoomName, Username, ValueObjectError};

#[cfg(test)]
pub use pusher::MockMessagePusher;
