use crate::signaling::SignalSink;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::Value;
use std::sync::Arc;
use tandem_core::{ConnectionId, JoinReject, Room, RoomId, ServerEvent};
use tracing::{debug, info};

/// Outcome of a join attempt. The same information also goes back to
/// the joining connection over the wire (`joined` / `error-msg` /
/// `room-full`).
#[derive(Debug, Clone, PartialEq)]
pub enum JoinResult {
    Joined {
        room_id: RoomId,
        peers: Vec<ConnectionId>,
    },
    Rejected(JoinReject),
}

/// Owns all room state and runs the join/leave/signal protocol.
///
/// The gateway calls in whenever a connection emits an event or closes;
/// everything the registry wants delivered goes out through the injected
/// [`SignalSink`]. Room mutations happen under DashMap entry/shard locks,
/// so operations touching the same room are linearized while unrelated
/// rooms stay concurrent; deliveries always happen after locks are
/// released.
#[derive(Clone)]
pub struct RoomRegistry {
    rooms: Arc<DashMap<RoomId, Room>>,
    sink: Arc<dyn SignalSink>,
}

impl RoomRegistry {
    pub fn new(sink: Arc<dyn SignalSink>) -> Self {
        Self {
            rooms: Arc::new(DashMap::new()),
            sink,
        }
    }

    /// Allocate a fresh empty room under a random collision-checked id.
    pub fn create_room(&self) -> RoomId {
        loop {
            let id = RoomId::generate();
            match self.rooms.entry(id.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    slot.insert(Room::new());
                    info!("created room {}", id);
                    return id;
                }
            }
        }
    }

    /// Add `conn` to `room_id`, materializing the room if it does not
    /// exist yet. The joiner is told who was already present; everyone
    /// already present is told about the joiner.
    pub async fn join(&self, conn: ConnectionId, room_id: Option<RoomId>) -> JoinResult {
        let Some(room_id) = room_id.filter(|id| !id.is_empty()) else {
            let reject = JoinReject::NoRoomId;
            self.sink
                .deliver(
                    conn,
                    ServerEvent::ErrorMsg {
                        message: reject.to_string(),
                    },
                )
                .await;
            return JoinResult::Rejected(reject);
        };

        // Capacity check, peer snapshot and insert all happen under the
        // entry guard: two racing joins to the same room serialize here,
        // so the second one sees the first one's membership.
        let outcome = {
            let mut entry = self.rooms.entry(room_id.clone()).or_default();
            let room = entry.value_mut();

            if room.is_full() && !room.contains(&conn) {
                Err(JoinReject::RoomFull(room_id.clone()))
            } else {
                let peers = room.peers_excluding(&conn);
                room.insert(conn);
                info!(
                    "connection {} joined room {} (size={})",
                    conn,
                    room_id,
                    room.len()
                );
                Ok(peers)
            }
        };

        match outcome {
            Ok(peers) => {
                self.sink
                    .deliver(
                        conn,
                        ServerEvent::Joined {
                            room_id: room_id.clone(),
                            peers: peers.clone(),
                        },
                    )
                    .await;
                for peer in &peers {
                    self.sink
                        .deliver(*peer, ServerEvent::PeerJoined { socket_id: conn })
                        .await;
                }
                JoinResult::Joined { room_id, peers }
            }
            Err(reject) => {
                self.sink
                    .deliver(conn, ServerEvent::RoomFull { room_id })
                    .await;
                JoinResult::Rejected(reject)
            }
        }
    }

    /// Forward an opaque negotiation payload to another connection.
    ///
    /// Missing `to` or `data` makes this a silent no-op. There is no
    /// room-membership check: the relay trusts the application layer to
    /// have paired connections correctly.
    pub async fn signal(&self, from: ConnectionId, to: Option<ConnectionId>, data: Option<Value>) {
        let (Some(to), Some(data)) = (to, data) else {
            debug!("dropping malformed signal from {}", from);
            return;
        };

        self.sink
            .deliver(to, ServerEvent::Signal { from, data })
            .await;
    }

    /// Remove `conn` from every room it is in, notifying the remaining
    /// members and deleting rooms that become empty. Safe to call for a
    /// connection that never joined anything.
    pub async fn disconnect(&self, conn: ConnectionId) {
        let mut notify: Vec<(ConnectionId, ServerEvent)> = Vec::new();

        self.rooms.retain(|room_id, room| {
            if !room.remove(&conn) {
                return true;
            }

            info!("connection {} left room {}", conn, room_id);
            for peer in room.members() {
                notify.push((*peer, ServerEvent::PeerLeft { socket_id: conn }));
            }

            if room.is_empty() {
                info!("room {} deleted", room_id);
                false
            } else {
                true
            }
        });

        for (peer, event) in notify {
            self.sink.deliver(peer, event).await;
        }
    }

    /// Snapshot of a room's members in join order, if the room exists.
    pub fn members(&self, room_id: &RoomId) -> Option<Vec<ConnectionId>> {
        self.rooms.get(room_id).map(|room| room.members().to_vec())
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
