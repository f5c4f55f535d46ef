//! Jail mechanics beyond the three-doubles rule (spec §4.2, §4.3): using or
//! forfeiting a Get Out of Jail Free card returns it to its origin deck,
//! and escaping jail on doubles never grants the usual extra-roll turn.

mod common;

use monopoly_arena_core::board::DeckKind;
use monopoly_arena_core::events::{EventKind, JailExitMethod};
use monopoly_arena_core::state::TurnPhase;

#[test]
fn using_a_jail_card_returns_it_to_the_bottom_of_its_deck() {
    let mut game = common::new_game(2, 5);
    game.state.current_player_index = 0;
    let player = game.state.players[0].id;
    game.state.current_player_mut().in_jail = true;
    game.state.current_player_mut().jail_turns = 1;
    game.state.current_player_mut().grant_jail_card(DeckKind::Chance);
    game.state.chance_deck.jail_card_held = true;

    let cards_before = game.state.chance_deck.draw_pile.len();
    let event = game.use_jail_card().expect("holder may use the card");
    assert!(matches!(event, EventKind::PlayerFreed { method: JailExitMethod::UsedCard }));

    assert!(!game.state.get_player(player).unwrap().jail_card_chance);
    assert_eq!(game.state.get_player(player).unwrap().get_out_of_jail_cards, 0);
    assert!(!game.state.chance_deck.jail_card_held);
    assert_eq!(game.state.chance_deck.draw_pile.len(), cards_before + 1);
}

#[test]
fn bank_forfeited_jail_card_returns_to_its_deck() {
    let mut game = common::new_game(2, 5);
    let debtor = game.state.players[0].id;
    game.state.get_player_mut(debtor).unwrap().grant_jail_card(DeckKind::CommunityChest);
    game.state.community_chest_deck.jail_card_held = true;
    let cards_before = game.state.community_chest_deck.draw_pile.len();

    game.declare_bankrupt(debtor, None);

    assert!(!game.state.community_chest_deck.jail_card_held);
    assert_eq!(game.state.community_chest_deck.draw_pile.len(), cards_before + 1);
}

#[test]
fn escaping_jail_on_doubles_grants_no_extra_roll() {
    let mut game = common::new_game(2, 5);
    game.state.current_player_index = 0;
    game.state.current_player_mut().in_jail = true;

    // Seed 5's dice stream will eventually roll doubles while jailed.
    let mut observed = false;
    for _ in 0..200 {
        game.state.turn_phase = TurnPhase::PreRoll;
        game.state.current_player_mut().in_jail = true;
        game.state.current_player_mut().jail_turns = 0;

        let (events, _) = game.roll().expect("roll succeeds from PreRoll");
        let escaped = events
            .iter()
            .any(|e| matches!(e, EventKind::PlayerFreed { method: JailExitMethod::Doubles }));
        if !escaped {
            continue;
        }
        game.resolve_landing().expect("landing resolves");

        assert!(game.state.jail_escape_this_roll);
        assert!(
            !game.may_roll_again(),
            "a jail-escaping double must not grant the usual doubles re-roll"
        );
        observed = true;
        break;
    }

    assert!(observed, "expected at least one jail-escaping doubles roll within 200 attempts");
}
