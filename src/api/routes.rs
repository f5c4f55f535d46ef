//! Route definitions (spec §6.2 control surface)

use axum::{
    routing::{get, post},
    Router,
};

use super::{handlers, AppState};
use crate::ws;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/games", post(handlers::create_game))
        .route("/api/games/:game_id", get(handlers::get_game))
        .route("/api/games/:game_id/events", get(handlers::get_events))
        .route("/api/games/:game_id/pause", post(handlers::pause_game))
        .route("/api/games/:game_id/resume", post(handlers::resume_game))
        .route("/api/games/:game_id/speed", post(handlers::set_speed))
        .route("/api/games/:game_id/cancel", post(handlers::cancel_game))
        .route("/ws/games/:game_id", get(ws::handler))
}
