mod connection;
mod room;
mod signaling;

pub use connection::ConnectionId;
pub use room::{Room, RoomId, ROOM_CAPACITY};
pub use signaling::{ClientEvent, JoinReject, ServerEvent};
