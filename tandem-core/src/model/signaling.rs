use crate::model::connection::ConnectionId;
use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Events a client sends to the relay. Optional fields decode as `None`
/// instead of failing the whole frame; the registry decides how a
/// missing field is handled (join → error reply, signal → silent drop).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", content = "d", rename_all = "kebab-case")]
#[serde(rename_all_fields = "camelCase")]
pub enum ClientEvent {
    Join {
        #[serde(default)]
        room_id: Option<RoomId>,
    },
    Signal {
        #[serde(default)]
        to: Option<ConnectionId>,
        #[serde(default)]
        data: Option<Value>,
    },
}

/// Events the relay sends to a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", content = "d", rename_all = "kebab-case")]
#[serde(rename_all_fields = "camelCase")]
pub enum ServerEvent {
    /// Sent once right after the socket is accepted, so the client
    /// learns the id its peers will address it by.
    Welcome { socket_id: ConnectionId },
    /// Join succeeded; `peers` lists who was already in the room, in
    /// join order.
    Joined {
        room_id: RoomId,
        peers: Vec<ConnectionId>,
    },
    /// Client protocol error (currently only a missing room id).
    ErrorMsg { message: String },
    /// The room already has two members.
    RoomFull { room_id: RoomId },
    PeerJoined { socket_id: ConnectionId },
    PeerLeft { socket_id: ConnectionId },
    /// Forwarded negotiation payload; `data` passes through unmodified.
    Signal { from: ConnectionId, data: Value },
}

/// Why a join was turned down. Non-fatal; the `Display` text is what
/// goes out in the `error-msg` event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinReject {
    #[error("no roomId provided")]
    NoRoomId,
    #[error("room {0} is full")]
    RoomFull(RoomId),
}
