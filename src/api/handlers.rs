//! HTTP handlers for the control surface (spec §6.2): start a game, read its
//! state and event log, and drive pause/resume/speed.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AppState;
use crate::config::GameConfig;
use crate::error::AppResult;
use crate::events::Event;
use crate::state::{Player, TurnPhase};

#[derive(Debug, Serialize)]
pub struct CreateGameResponse {
    pub game_id: Uuid,
}

pub async fn create_game(
    State(state): State<AppState>,
    Json(config): Json<GameConfig>,
) -> AppResult<Json<CreateGameResponse>> {
    let game_id = state.registry.start_game(config)?;
    Ok(Json(CreateGameResponse { game_id }))
}

#[derive(Debug, Serialize)]
pub struct GameStateResponse {
    pub game_id: Uuid,
    pub seed: u64,
    pub turn_number: u32,
    pub turn_phase: TurnPhase,
    pub current_player: Uuid,
    pub players: Vec<Player>,
    pub property_owners: HashMap<u8, Uuid>,
    pub is_over: bool,
    pub winner: Option<Uuid>,
}

pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> AppResult<Json<GameStateResponse>> {
    let handle = state.registry.get(game_id)?;
    let game = handle.get_state();
    Ok(Json(GameStateResponse {
        game_id,
        seed: game.seed,
        turn_number: game.state.turn_number,
        turn_phase: game.state.turn_phase,
        current_player: game.state.current_player().id,
        players: game.state.players.clone(),
        property_owners: game.state.property_owners.clone(),
        is_over: game.is_over(),
        winner: game.winner(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    #[serde(default)]
    pub since: u64,
}

pub async fn get_events(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Query(query): Query<EventsQuery>,
) -> AppResult<Json<Vec<Event>>> {
    let handle = state.registry.get(game_id)?;
    Ok(Json(handle.get_events(query.since)))
}

pub async fn pause_game(State(state): State<AppState>, Path(game_id): Path<Uuid>) -> AppResult<Json<serde_json::Value>> {
    let handle = state.registry.get(game_id)?;
    handle.pause();
    Ok(Json(serde_json::json!({ "status": "paused" })))
}

pub async fn resume_game(State(state): State<AppState>, Path(game_id): Path<Uuid>) -> AppResult<Json<serde_json::Value>> {
    let handle = state.registry.get(game_id)?;
    handle.resume();
    Ok(Json(serde_json::json!({ "status": "resumed" })))
}

#[derive(Debug, Deserialize)]
pub struct SetSpeedRequest {
    pub multiplier: f32,
}

pub async fn set_speed(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(req): Json<SetSpeedRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let handle = state.registry.get(game_id)?;
    handle.set_speed(req.multiplier);
    Ok(Json(serde_json::json!({ "status": "ok", "speed_multiplier": crate::config::GameConfig::clamp_speed(req.multiplier) })))
}

pub async fn cancel_game(State(state): State<AppState>, Path(game_id): Path<Uuid>) -> AppResult<Json<serde_json::Value>> {
    state.registry.cancel(game_id)?;
    Ok(Json(serde_json::json!({ "status": "cancelled" })))
}

/// Health check
pub async fn health() -> &'static str {
    "OK"
}
