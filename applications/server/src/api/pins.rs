/// Pin catalog routes, REST fallback plus the realtime broadcast channel
use crate::state::AppState;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
    Json,
};
use pindrop_core::Pin;
use serde::Serialize;
use tracing::{debug, info, warn};

/// The unsolicited frame pushed to every new realtime connection
#[derive(Debug, Serialize)]
struct PinsEvent<'a> {
    event: &'static str,
    data: &'a [Pin],
}

/// GET /api/pins, static catalog fallback
pub async fn list_pins(State(app_state): State<AppState>) -> Json<Vec<Pin>> {
    Json(app_state.pins.pins().to_vec())
}

/// GET /ws, the realtime channel
///
/// Broadcast-on-connect: the full catalog goes out exactly once, unsolicited.
/// No client-to-server messages are expected; the socket is held open until
/// the client goes away.
pub async fn pin_feed(ws: WebSocketUpgrade, State(app_state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, app_state))
}

async fn handle_socket(mut socket: WebSocket, app_state: AppState) {
    info!("Client connected");

    let frame = PinsEvent {
        event: "pins",
        data: app_state.pins.pins(),
    };
    let frame = match serde_json::to_string(&frame) {
        Ok(frame) => frame,
        Err(e) => {
            warn!("Failed to serialize pin catalog: {e}");
            return;
        }
    };

    if socket.send(Message::Text(frame)).await.is_err() {
        info!("Client disconnected before the pin broadcast");
        return;
    }

    // Drain until the peer closes; nothing inbound is meaningful
    while let Some(msg) = socket.recv().await {
        match msg {
            Ok(Message::Close(_)) | Err(_) => break,
            Ok(other) => debug!("Ignoring realtime message: {other:?}"),
        }
    }

    info!("Client disconnected");
}
