use crate::app::AppState;
use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tandem_core::RoomId;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub room_id: RoomId,
}

/// `GET /create-room` — allocate a fresh empty room and return its id,
/// for the "create room" button on a frontend.
pub async fn create_room_handler(State(state): State<AppState>) -> Json<CreateRoomResponse> {
    let room_id = state.registry.create_room();
    Json(CreateRoomResponse { room_id })
}
