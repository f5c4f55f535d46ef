//! Scenario 3 (spec §8.4): owning every property in a color group doubles
//! unimproved rent, even though neither property has a house on it.

mod common;

use monopoly_arena_core::events::EventKind;
use monopoly_arena_core::state::TurnPhase;

#[test]
fn full_brown_set_doubles_rent_on_salvador() {
    let mut game = common::new_game(2, 42);

    let owner = game.state.players[0].id;
    // Brown group: Salvador (1) and Rio (3), both price 60 / base rent 4.
    game.state.current_player_mut().properties.insert(1);
    game.state.current_player_mut().properties.insert(3);
    game.state.property_owners.insert(1, owner);
    game.state.property_owners.insert(3, owner);

    let payer = game.state.players[1].id;
    game.state.current_player_index = 1;
    game.state.current_player_mut().position = 1;
    game.state.turn_phase = TurnPhase::Landed;

    let (events, _) = game.resolve_landing().expect("landing resolves");
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        EventKind::RentPaid { payer: p, owner: o, position: 1, amount: 8 } if p == payer && o == owner
    ));

    assert_eq!(game.state.get_player(payer).unwrap().cash, common::STARTING_CASH - 8);
    assert_eq!(game.state.get_player(owner).unwrap().cash, common::STARTING_CASH + 8);
}
