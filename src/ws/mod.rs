//! WebSocket module: a read-only event stream per game (spec §6.2
//! "subscribe"). Unlike the teacher's room sockets, there is nothing for a
//! client to send — the arena is headless, so this is output-only.

mod hub;

use axum::{
    extract::{Path, State, WebSocketUpgrade},
    response::Response,
};
use uuid::Uuid;

use crate::api::AppState;

/// WebSocket handler - upgrades HTTP to a live event feed for one game.
pub async fn handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Response {
    ws.on_upgrade(move |socket| hub::stream_events(socket, state, game_id))
}
