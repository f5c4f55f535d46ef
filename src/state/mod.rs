mod bank;
mod deck;
mod game;
mod player;

pub use bank::Bank;
pub use deck::Deck;
pub use game::{GameState, TurnPhase};
pub use player::Player;
