use crate::http::create_room_handler;
use crate::registry::RoomRegistry;
use crate::signaling::{SignalingService, ws_handler};
use axum::Router;
use axum::routing::{any, get};
use std::sync::Arc;

/// Shared handles for the axum handlers: the gateway's connection table
/// and the room registry wired to deliver through it.
#[derive(Clone)]
pub struct AppState {
    pub registry: RoomRegistry,
    pub signaling: SignalingService,
}

impl AppState {
    pub fn new() -> Self {
        let signaling = SignalingService::new();
        let registry = RoomRegistry::new(Arc::new(signaling.clone()));

        Self {
            registry,
            signaling,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create-room", get(create_room_handler))
        .route("/ws", any(ws_handler))
        .with_state(state)
}
