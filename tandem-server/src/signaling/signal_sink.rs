use async_trait::async_trait;
use tandem_core::{ConnectionId, ServerEvent};

/// Delivery seam between the room registry and whatever transport is
/// carrying the connections (the WebSocket gateway in production, a
/// capturing mock in tests).
#[async_trait]
pub trait SignalSink: Send + Sync {
    /// Deliver one event to one connection. Best-effort: a recipient
    /// that is no longer live is dropped silently, never an error.
    async fn deliver(&self, to: ConnectionId, event: ServerEvent);
}
