//! Chance / Community Chest draw piles (spec §3.2)

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::board::{Card, DeckKind, CardEffect, CHANCE_CARDS, COMMUNITY_CHEST_CARDS};
use crate::rng::GameRng;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub kind: DeckKind,
    pub draw_pile: VecDeque<Card>,
    /// True while some player holds this deck's Get Out of Jail Free card;
    /// the card is excluded from the draw pile while held (spec §3.2).
    pub jail_card_held: bool,
}

impl Deck {
    pub fn new_shuffled(kind: DeckKind, rng: &mut GameRng) -> Self {
        let source = match kind {
            DeckKind::Chance => &CHANCE_CARDS,
            DeckKind::CommunityChest => &COMMUNITY_CHEST_CARDS,
        };
        let mut cards: Vec<Card> = source.clone();
        rng.shuffle(&mut cards);
        Self {
            kind,
            draw_pile: cards.into_iter().collect(),
            jail_card_held: false,
        }
    }

    /// Draw the top card. If it is Get Out of Jail Free, it is NOT returned
    /// to the pile (the caller retains it and must mark `jail_card_held`);
    /// every other card is pushed to the bottom.
    pub fn draw(&mut self) -> Card {
        let card = self
            .draw_pile
            .pop_front()
            .expect("draw pile never empties: every drawn card is returned or tracked as held");
        if !matches!(card.effect, CardEffect::GetOutOfJail) {
            self.draw_pile.push_back(card.clone());
        }
        card
    }

    /// Return a held Get Out of Jail Free card to the bottom of this deck.
    pub fn return_jail_card(&mut self) {
        let source = match self.kind {
            DeckKind::Chance => &CHANCE_CARDS,
            DeckKind::CommunityChest => &COMMUNITY_CHEST_CARDS,
        };
        let card = source
            .iter()
            .find(|c| matches!(c.effect, CardEffect::GetOutOfJail))
            .cloned()
            .expect("every deck has exactly one Get Out of Jail Free card");
        self.draw_pile.push_back(card);
        self.jail_card_held = false;
    }
}
