//! Game State Machine, Trade Executor, Bankruptcy Resolution, and Auctions
//! (spec §4.2–§4.4). These modules mutate `state::GameState` directly and
//! return the `EventKind`s produced; only the orchestrator decides when to
//! emit them through the bus.

pub mod auction;
pub mod bankruptcy;
pub(crate) mod build_ops;
pub mod game;
pub mod landing;
pub mod trade;
pub mod turn;

pub use game::Game;
