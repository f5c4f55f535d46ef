//! Static reference data — board spaces and cards, constructed once and
//! shared read-only across the game (spec §3.1).

mod cards;
mod tiles;

pub use cards::{Card, CardEffect, DeckKind, CHANCE_CARDS, COMMUNITY_CHEST_CARDS};
pub use tiles::{get_space, group_spaces, is_ownable, ColorGroup, Space, SpaceKind, BOARD};
