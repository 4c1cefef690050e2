use crate::app::AppState;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tandem_core::{ClientEvent, ConnectionId, ServerEvent};
use tokio::sync::mpsc;
use tracing::{info, warn};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let conn_id = ConnectionId::new();
    info!("New WebSocket connection: {}", conn_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.signaling.add_peer(conn_id, tx);

    // The client needs to know the id its peers will address it by.
    state
        .signaling
        .send_event(conn_id, &ServerEvent::Welcome { socket_id: conn_id });

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let registry = state.registry.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(ClientEvent::Join { room_id }) => {
                            registry.join(conn_id, room_id).await;
                        }
                        Ok(ClientEvent::Signal { to, data }) => {
                            registry.signal(conn_id, to, data).await;
                        }
                        Err(e) => warn!("Invalid event from {}: {:?}", conn_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Unregister from the gateway first so nothing is delivered to a
    // half-dead socket, then let the registry clean up room membership.
    state.signaling.remove_peer(&conn_id);
    state.registry.disconnect(conn_id).await;

    info!("WebSocket disconnected: {}", conn_id);
}
