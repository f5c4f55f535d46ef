//! The game aggregate (spec §3.2): everything the rules engine needs to
//! resolve a turn lives here. `GameState` itself never touches the event
//! bus — the engine reads/writes this struct and emits through `EventBus`
//! separately, so the state stays a plain data type with no I/O.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::DeckKind;
use crate::rng::DiceRoll;
use crate::state::{Bank, Deck, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    PreRoll,
    Roll,
    Landed,
    PostRoll,
    EndTurn,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub bank: Bank,
    pub chance_deck: Deck,
    pub community_chest_deck: Deck,
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub turn_number: u32,
    pub turn_phase: TurnPhase,
    pub last_roll: Option<DiceRoll>,
    /// position -> owner, mirrors `Player::properties` for O(1) lookup by
    /// tile instead of by player.
    pub property_owners: HashMap<u8, Uuid>,
    /// Set when this roll's doubles freed the current player from jail, so
    /// `may_roll_again` doesn't mistake the escape roll for a free re-roll
    /// (spec §4.2: no extra turn granted on a jail-escaping double).
    pub jail_escape_this_roll: bool,
}

impl GameState {
    pub fn new(players: Vec<Player>, bank: Bank, chance_deck: Deck, community_chest_deck: Deck) -> Self {
        Self {
            bank,
            chance_deck,
            community_chest_deck,
            players,
            current_player_index: 0,
            turn_number: 0,
            turn_phase: TurnPhase::PreRoll,
            last_roll: None,
            property_owners: HashMap::new(),
            jail_escape_this_roll: false,
        }
    }

    pub fn get_player(&self, id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_player_mut(&mut self, id: Uuid) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player_index]
    }

    /// Owner of `position`, if any, skipping bankrupt (liquidated) players.
    pub fn owner_of(&self, position: u8) -> Option<Uuid> {
        self.property_owners.get(&position).copied()
    }

    pub fn deck_mut(&mut self, kind: DeckKind) -> &mut Deck {
        match kind {
            DeckKind::Chance => &mut self.chance_deck,
            DeckKind::CommunityChest => &mut self.community_chest_deck,
        }
    }

    /// Index of the next player still in the game, wrapping past bankrupt
    /// players. Panics only if every player is bankrupt, which the
    /// orchestrator must never allow to happen (the game ends first).
    pub fn next_active_index(&self, from: usize) -> usize {
        let n = self.players.len();
        let mut idx = from;
        for _ in 0..n {
            idx = (idx + 1) % n;
            if !self.players[idx].is_bankrupt {
                return idx;
            }
        }
        idx
    }

    pub fn active_player_count(&self) -> usize {
        self.players.iter().filter(|p| !p.is_bankrupt).count()
    }

    pub fn advance_turn(&mut self) {
        self.current_player_index = self.next_active_index(self.current_player_index);
        self.turn_number += 1;
        self.turn_phase = TurnPhase::PreRoll;
        self.last_roll = None;
        self.jail_escape_this_roll = false;
        self.current_player_mut().consecutive_doubles = 0;
    }
}
