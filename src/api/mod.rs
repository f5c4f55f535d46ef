//! API module - HTTP handlers and routes for the control surface (spec §6.2).
//! The thinnest layer in the system: no game logic lives here, only
//! `Registry` lookups and DTO shaping.

mod handlers;
mod routes;

use std::sync::Arc;

use crate::orchestrator::Registry;

pub use routes::routes;

/// Shared application state. Replaces the teacher's `{db, redis, hub}` with
/// the one thing a headless arena needs: the in-memory game registry
/// (spec §6.3 drops persistence from the core entirely).
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}
