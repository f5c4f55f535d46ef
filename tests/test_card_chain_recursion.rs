//! A card-induced move must recursively resolve its landing space (spec
//! §4.2), including a second card draw when the card lands on another card
//! space. Position 36 (Chance) carries "Go back three spaces", landing
//! directly on position 33 (Community Chest).

mod common;

use monopoly_arena_core::board::{Card, CardEffect, DeckKind};
use monopoly_arena_core::engine::landing::LandingOutcome;
use monopoly_arena_core::events::EventKind;
use monopoly_arena_core::state::TurnPhase;

#[test]
fn go_back_card_chains_into_a_second_card_draw() {
    let mut game = common::new_game(2, 7);

    game.state.chance_deck.draw_pile.push_front(Card {
        deck: DeckKind::Chance,
        text: "Go back three spaces",
        effect: CardEffect::GoBack { spaces: 3 },
    });
    game.state.community_chest_deck.draw_pile.push_front(Card {
        deck: DeckKind::CommunityChest,
        text: "Bank error in your favor: collect $200",
        effect: CardEffect::Collect { amount: 200 },
    });

    game.state.current_player_index = 0;
    game.state.current_player_mut().position = 36;
    game.state.turn_phase = TurnPhase::Landed;

    let (events, outcome) = game.resolve_landing().expect("landing resolves");
    assert_eq!(outcome, LandingOutcome::Resolved);

    let card_draws: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, EventKind::CardDrawn { .. }))
        .collect();
    assert_eq!(card_draws.len(), 2, "the landed-on community chest space must also draw a card");
    assert!(matches!(card_draws[0], EventKind::CardDrawn { deck: DeckKind::Chance, .. }));
    assert!(matches!(card_draws[1], EventKind::CardDrawn { deck: DeckKind::CommunityChest, .. }));

    assert!(events
        .iter()
        .any(|e| matches!(e, EventKind::PlayerMoved { new_position: 33, .. })));

    let player = game.state.current_player();
    assert_eq!(player.position, 33);
    assert_eq!(player.cash, common::STARTING_CASH + 200);
}
