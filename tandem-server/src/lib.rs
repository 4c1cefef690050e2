mod app;
mod http;
mod registry;
mod signaling;

pub use app::{AppState, router};
pub use http::CreateRoomResponse;
pub use registry::{JoinResult, RoomRegistry};
pub use signaling::{SignalSink, SignalingService};
