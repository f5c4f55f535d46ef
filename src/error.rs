//! Application error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by engine mutation. These should never occur in normal
/// play; one surfacing aborts the game with `GameOver{reason: engine_error}`
/// rather than propagating further (spec §7, "defensive").
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no active game")]
    NoActiveGame,

    #[error("player not found: {0}")]
    PlayerNotFound(uuid::Uuid),

    #[error("invalid tile index: {0}")]
    InvalidTile(u8),

    #[error("illegal action: {0}")]
    IllegalAction(String),

    #[error("wrong turn phase: expected {expected}, found {found}")]
    WrongPhase { expected: String, found: String },

    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Game error: {0}")]
    GameError(String),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::GameError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Engine(e) => {
                tracing::error!("engine error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "engine error".into())
            }
            AppError::Agent(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("internal error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".into())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
