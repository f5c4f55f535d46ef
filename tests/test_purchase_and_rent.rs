//! Scenario 2 (spec §8.4): buying an unowned property, then paying base
//! rent to its owner. Numbers follow this crate's actual board (position 1,
//! "Salvador", price 60, base rent 4) rather than the classic-board figures
//! the distilled spec borrowed from a different layout.

mod common;

use monopoly_arena_core::engine::landing::LandingOutcome;
use monopoly_arena_core::events::EventKind;
use monopoly_arena_core::state::TurnPhase;

#[test]
fn purchase_then_rent_moves_cash_correctly() {
    let mut game = common::new_game(2, 42);

    let buyer = game.state.players[0].id;
    game.state.current_player_index = 0;
    game.state.current_player_mut().position = 1;
    game.state.turn_phase = TurnPhase::Landed;

    let (events, outcome) = game.resolve_landing().expect("landing resolves");
    assert!(events.is_empty());
    assert_eq!(outcome, LandingOutcome::OfferPurchase { position: 1, price: 60 });

    let event = game.buy_current_property(1).expect("affordable purchase succeeds");
    assert!(matches!(event, EventKind::PropertyPurchased { position: 1, price: 60 }));
    assert_eq!(game.state.get_player(buyer).unwrap().cash, common::STARTING_CASH - 60);
    assert_eq!(game.state.owner_of(1), Some(buyer));

    let payer = game.state.players[1].id;
    game.state.current_player_index = 1;
    game.state.current_player_mut().position = 1;
    game.state.turn_phase = TurnPhase::Landed;

    let (events, outcome) = game.resolve_landing().expect("landing resolves");
    assert_eq!(outcome, LandingOutcome::Resolved);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        EventKind::RentPaid { payer: p, owner, position: 1, amount: 4 } if p == payer && owner == buyer
    ));

    assert_eq!(game.state.get_player(payer).unwrap().cash, common::STARTING_CASH - 4);
    assert_eq!(game.state.get_player(buyer).unwrap().cash, common::STARTING_CASH - 60 + 4);
}
