use crate::signaling::SignalSink;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use std::sync::Arc;
use tandem_core::{ConnectionId, ServerEvent};
use tokio::sync::mpsc;
use tracing::{error, warn};

struct SignalingInner {
    peers: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
}

/// Connection table of the WebSocket gateway: maps each live connection
/// id to the channel feeding its socket sink.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                peers: DashMap::new(),
            }),
        }
    }

    pub fn add_peer(&self, conn: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.peers.insert(conn, tx);
    }

    pub fn remove_peer(&self, conn: &ConnectionId) {
        self.inner.peers.remove(conn);
    }

    pub fn send_event(&self, conn: ConnectionId, event: &ServerEvent) {
        if let Some(peer) = self.inner.peers.get(&conn) {
            match serde_json::to_string(event) {
                Ok(json) => {
                    if let Err(e) = peer.send(Message::Text(json.into())) {
                        error!("Failed to send WS message to {}: {:?}", conn, e);
                    }
                }
                Err(e) => error!("Failed to serialize server event: {}", e),
            }
        } else {
            warn!("Attempted to deliver event to disconnected connection {}", conn);
        }
    }
}

impl Default for SignalingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignalSink for SignalingService {
    async fn deliver(&self, to: ConnectionId, event: ServerEvent) {
        self.send_event(to, &event);
    }
}
