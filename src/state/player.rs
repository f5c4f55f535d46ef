//! Mutable per-player holdings (spec §3.2)

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::{get_space, DeckKind, SpaceKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub position: u8,
    pub cash: i64,
    pub properties: HashSet<u8>,
    /// 1..=4 = houses, 5 = hotel. Absent entry means no buildings.
    pub houses: HashMap<u8, u8>,
    pub mortgaged: HashSet<u8>,
    pub in_jail: bool,
    pub jail_turns: u8,
    pub get_out_of_jail_cards: u8,
    /// Origin deck of each held Get Out of Jail Free card. Each deck holds
    /// exactly one such card, so a player can hold at most one per deck.
    pub jail_card_chance: bool,
    pub jail_card_community_chest: bool,
    pub is_bankrupt: bool,
    pub consecutive_doubles: u8,
}

impl Player {
    pub fn new(id: Uuid, name: String, starting_cash: i64) -> Self {
        Self {
            id,
            name,
            position: 0,
            cash: starting_cash,
            properties: HashSet::new(),
            houses: HashMap::new(),
            mortgaged: HashSet::new(),
            in_jail: false,
            jail_turns: 0,
            get_out_of_jail_cards: 0,
            jail_card_chance: false,
            jail_card_community_chest: false,
            is_bankrupt: false,
            consecutive_doubles: 0,
        }
    }

    /// Grant a held Get Out of Jail Free card from `deck`'s draw.
    pub fn grant_jail_card(&mut self, deck: DeckKind) {
        match deck {
            DeckKind::Chance => self.jail_card_chance = true,
            DeckKind::CommunityChest => self.jail_card_community_chest = true,
        }
        self.get_out_of_jail_cards += 1;
    }

    /// Take back a held jail card, reporting which deck it must be returned
    /// to. `None` if this player holds none.
    pub fn take_jail_card(&mut self) -> Option<DeckKind> {
        if self.jail_card_chance {
            self.jail_card_chance = false;
            self.get_out_of_jail_cards -= 1;
            Some(DeckKind::Chance)
        } else if self.jail_card_community_chest {
            self.jail_card_community_chest = false;
            self.get_out_of_jail_cards -= 1;
            Some(DeckKind::CommunityChest)
        } else {
            None
        }
    }

    pub fn house_count(&self, position: u8) -> u8 {
        self.houses.get(&position).copied().unwrap_or(0)
    }

    pub fn is_mortgaged(&self, position: u8) -> bool {
        self.mortgaged.contains(&position)
    }

    /// Net worth: cash + unmortgaged property at face value + half the
    /// mortgage value of mortgaged property + buildings at half their cost.
    /// Used for debt-resolution sizing and fallback heuristics.
    pub fn net_worth(&self) -> i64 {
        let mut total = self.cash;
        for &pos in &self.properties {
            let Some(space) = get_space(pos) else { continue };
            if self.mortgaged.contains(&pos) {
                total += (space.mortgage_value / 2) as i64;
            } else {
                total += space.price as i64;
            }
            if space.kind == SpaceKind::Property {
                let houses = self.house_count(pos) as i64;
                total += houses * (space.house_cost as i64 / 2);
            }
        }
        total
    }
}
