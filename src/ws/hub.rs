//! Per-connection event forwarding: subscribe to a game's `EventBus` and
//! relay every event as a JSON text frame, replaying the full backlog first
//! so a late subscriber still sees turn 0 onward (spec §6.2 "subscribe ...
//! replays from sequence 0").

use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, StreamExt};
use uuid::Uuid;

use crate::api::AppState;
use crate::error::AppError;

pub async fn stream_events(socket: WebSocket, state: AppState, game_id: Uuid) {
    let (mut sender, mut receiver) = socket.split();

    let handle = match state.registry.get(game_id) {
        Ok(handle) => handle,
        Err(e) => {
            let _ = sender.send(Message::Text(error_frame(&e))).await;
            return;
        }
    };

    for event in handle.get_events(0) {
        let msg = serde_json::to_string(&event).unwrap_or_default();
        if sender.send(Message::Text(msg.into())).await.is_err() {
            return;
        }
    }

    let (subscriber_id, mut rx) = handle.subscribe();

    let forward_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let msg = serde_json::to_string(&event).unwrap_or_default();
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // The client has nothing to send; drain the incoming side so the
    // connection closes promptly when they disconnect.
    let drain_task = tokio::spawn(async move { while receiver.next().await.is_some() {} });

    tokio::select! {
        _ = forward_task => {},
        _ = drain_task => {},
    }

    handle.bus.unsubscribe(subscriber_id);
    tracing::debug!(game = %game_id, "event stream subscriber disconnected");
}

fn error_frame(e: &AppError) -> String {
    serde_json::json!({ "error": e.to_string() }).to_string()
}
