pub mod model;

pub use model::{ClientEvent, ConnectionId, JoinReject, Room, RoomId, ServerEvent, ROOM_CAPACITY};
