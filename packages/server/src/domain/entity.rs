//! Room entity.

use std::collections::BTreeSet;

use super::{ConnectionId, RoomName};

/// A chat room and the connections that joined it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: RoomName,
    members: BTreeSet<ConnectionId>,
}

impl Room {
    pub fn new(name: RoomName) -> Self {
        Self {
            name,
            members: BTreeSet::new(),
        }
    }

    /// Add a connection; returns `false` if it was already a member
    pub fn add_member(&mut self, connection: ConnectionId) -> bool {
        self.members.insert(connection)
    }

    /// Remove a connection; returns `false` if it wasn't a member
    pub fn remove_member(&mut self, connection: &ConnectionId) -> bool {
        self.members.remove(connection)
    }

    pub fn contains(&self, connection: &ConnectionId) -> bool {
        self.members.contains(connection)
    }

    pub fn members(&self) -> Vec<ConnectionId> {
        self.members.iter().copied().collect()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
