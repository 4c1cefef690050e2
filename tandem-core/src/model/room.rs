use crate::model::connection::ConnectionId;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rooms pair exactly two peers (1:1 calls).
pub const ROOM_CAPACITY: usize = 2;

/// Length of a generated room token in characters.
const ROOM_ID_LEN: usize = 6;

/// Short URL-safe room token. Generated ids come from a CSPRNG; ids
/// arriving over the wire are accepted as-is (unknown rooms are
/// materialized on first join).
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
pub struct RoomId(pub String);

impl RoomId {
    /// Generate a fresh random token. Uniqueness against live rooms is
    /// the caller's job (retry until the id is not a registry key).
    pub fn generate() -> Self {
        let mut raw = [0u8; ROOM_ID_LEN * 3 / 4 + 1];
        rand::thread_rng().fill_bytes(&mut raw);
        let mut token = URL_SAFE_NO_PAD.encode(raw);
        token.truncate(ROOM_ID_LEN);
        Self(token)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Membership of a single room, in join order.
#[derive(Debug, Default)]
pub struct Room {
    members: Vec<ConnectionId>,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= ROOM_CAPACITY
    }

    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.members.contains(id)
    }

    /// Add a member. Re-inserting an existing member is a no-op.
    pub fn insert(&mut self, id: ConnectionId) {
        if !self.contains(&id) {
            self.members.push(id);
        }
    }

    /// Remove a member; returns whether it was present.
    pub fn remove(&mut self, id: &ConnectionId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m != id);
        self.members.len() < before
    }

    /// Members other than `id`, in join order. This is what a joining
    /// peer is told about who is already in the room.
    pub fn peers_excluding(&self, id: &ConnectionId) -> Vec<ConnectionId> {
        self.members.iter().filter(|m| *m != id).copied().collect()
    }

    pub fn members(&self) -> &[ConnectionId] {
        &self.members
    }
}
