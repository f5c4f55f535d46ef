//! Monopoly Arena Core — a headless, multi-agent Monopoly simulation.
//!
//! Three layers (spec §1):
//! - `rules` / `engine` / `state` / `board` / `rng` — the Deterministic
//!   Rules Engine: pure, seeded, and the only code allowed to mutate game
//!   state.
//! - `agents` — the Agent Decision Layer: one async trait wrapping
//!   whichever LLM backend is configured, plus the `GameView` filter,
//!   prompt assembly, and deterministic fallback policy.
//! - `orchestrator` — the async Orchestrator: the per-game turn loop,
//!   pacing/control surface, and in-memory game registry.
//!
//! `api` / `ws` are the thinnest layer in the system: HTTP/WebSocket
//! plumbing over `orchestrator::Registry`, nothing more.

pub mod agents;
pub mod api;
pub mod board;
pub mod bus;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod events;
pub mod orchestrator;
pub mod personality;
pub mod rng;
pub mod rules;
pub mod state;
pub mod ws;
