//! Chance and Community Chest cards (spec §3.1)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckKind {
    Chance,
    CommunityChest,
}

/// Tagged card effect variants, exactly the taxonomy spec §3.1 names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    AdvanceTo { position: u8 },
    AdvanceNearestRailroad { pay_double: bool },
    AdvanceNearestUtility,
    GoBack { spaces: u8 },
    Collect { amount: u32 },
    Pay { amount: u32 },
    PayEachPlayer { amount: u32 },
    CollectFromEach { amount: u32 },
    Repairs { per_house: u32, per_hotel: u32 },
    GoToJail,
    GetOutOfJail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub deck: DeckKind,
    pub text: &'static str,
    pub effect: CardEffect,
}

pub static CHANCE_CARDS: once_cell::sync::Lazy<Vec<Card>> = once_cell::sync::Lazy::new(|| {
    vec![
        Card { deck: DeckKind::Chance, text: "Advance to GO", effect: CardEffect::AdvanceTo { position: 0 } },
        Card { deck: DeckKind::Chance, text: "Advance to Tokyo", effect: CardEffect::AdvanceTo { position: 39 } },
        Card { deck: DeckKind::Chance, text: "Advance to Tel Aviv", effect: CardEffect::AdvanceTo { position: 6 } },
        Card { deck: DeckKind::Chance, text: "Advance to the nearest Railroad. If unowned, you may buy it; if owned, pay the owner twice the rent.", effect: CardEffect::AdvanceNearestRailroad { pay_double: true } },
        Card { deck: DeckKind::Chance, text: "Advance to the nearest Railroad", effect: CardEffect::AdvanceNearestRailroad { pay_double: false } },
        Card { deck: DeckKind::Chance, text: "Advance to the nearest Utility. If unowned, you may buy it; if owned, throw dice and pay owner ten times the amount thrown.", effect: CardEffect::AdvanceNearestUtility },
        Card { deck: DeckKind::Chance, text: "Bank pays you a dividend of $50", effect: CardEffect::Collect { amount: 50 } },
        Card { deck: DeckKind::Chance, text: "Get out of Jail Free", effect: CardEffect::GetOutOfJail },
        Card { deck: DeckKind::Chance, text: "Go back three spaces", effect: CardEffect::GoBack { spaces: 3 } },
        Card { deck: DeckKind::Chance, text: "Go to Jail", effect: CardEffect::GoToJail },
        Card { deck: DeckKind::Chance, text: "Make general repairs: $25 per house, $100 per hotel", effect: CardEffect::Repairs { per_house: 25, per_hotel: 100 } },
        Card { deck: DeckKind::Chance, text: "Pay poor tax of $15", effect: CardEffect::Pay { amount: 15 } },
        Card { deck: DeckKind::Chance, text: "Take a trip to the nearest Railroad", effect: CardEffect::AdvanceNearestRailroad { pay_double: false } },
        Card { deck: DeckKind::Chance, text: "You have been elected chairman: pay each player $50", effect: CardEffect::PayEachPlayer { amount: 50 } },
        Card { deck: DeckKind::Chance, text: "Your building loan matures: collect $150", effect: CardEffect::Collect { amount: 150 } },
        Card { deck: DeckKind::Chance, text: "You have won a crossword competition: collect $100", effect: CardEffect::Collect { amount: 100 } },
    ]
});

pub static COMMUNITY_CHEST_CARDS: once_cell::sync::Lazy<Vec<Card>> = once_cell::sync::Lazy::new(|| {
    vec![
        Card { deck: DeckKind::CommunityChest, text: "Advance to GO", effect: CardEffect::AdvanceTo { position: 0 } },
        Card { deck: DeckKind::CommunityChest, text: "Bank error in your favor: collect $200", effect: CardEffect::Collect { amount: 200 } },
        Card { deck: DeckKind::CommunityChest, text: "Doctor's fee: pay $50", effect: CardEffect::Pay { amount: 50 } },
        Card { deck: DeckKind::CommunityChest, text: "From sale of stock you get $50", effect: CardEffect::Collect { amount: 50 } },
        Card { deck: DeckKind::CommunityChest, text: "Get out of Jail Free", effect: CardEffect::GetOutOfJail },
        Card { deck: DeckKind::CommunityChest, text: "Go to Jail", effect: CardEffect::GoToJail },
        Card { deck: DeckKind::CommunityChest, text: "Holiday fund matures: receive $100", effect: CardEffect::Collect { amount: 100 } },
        Card { deck: DeckKind::CommunityChest, text: "Income tax refund: collect $20", effect: CardEffect::Collect { amount: 20 } },
        Card { deck: DeckKind::CommunityChest, text: "It is your birthday: collect $10 from every player", effect: CardEffect::CollectFromEach { amount: 10 } },
        Card { deck: DeckKind::CommunityChest, text: "Life insurance matures: collect $100", effect: CardEffect::Collect { amount: 100 } },
        Card { deck: DeckKind::CommunityChest, text: "Pay hospital fees of $100", effect: CardEffect::Pay { amount: 100 } },
        Card { deck: DeckKind::CommunityChest, text: "Pay school fees of $150", effect: CardEffect::Pay { amount: 150 } },
        Card { deck: DeckKind::CommunityChest, text: "Receive $25 consultancy fee", effect: CardEffect::Collect { amount: 25 } },
        Card { deck: DeckKind::CommunityChest, text: "You are assessed for street repairs: $40 per house, $115 per hotel", effect: CardEffect::Repairs { per_house: 40, per_hotel: 115 } },
        Card { deck: DeckKind::CommunityChest, text: "You have won second prize in a beauty contest: collect $10", effect: CardEffect::Collect { amount: 10 } },
        Card { deck: DeckKind::CommunityChest, text: "You inherit $100", effect: CardEffect::Collect { amount: 100 } },
    ]
});
