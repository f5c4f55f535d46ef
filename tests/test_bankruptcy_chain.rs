//! Scenario 5 (spec §8.4): a debtor with no sellable buildings and only
//! already-mortgaged properties cannot be made solvent; stage 4 transfers
//! everything to the named creditor and marks the debtor bankrupt.

mod common;

use monopoly_arena_core::engine::bankruptcy::{declare_bankrupt, is_insolvent, liquidate_assets};
use monopoly_arena_core::events::EventKind;

#[test]
fn insolvent_debtor_with_no_liquidatable_assets_transfers_to_creditor() {
    let mut game = common::new_game(2, 42);
    let debtor = game.state.players[0].id;
    let creditor = game.state.players[1].id;

    {
        let d = game.state.get_player_mut(debtor).unwrap();
        d.cash = 50;
        d.properties.insert(1);
        d.mortgaged.insert(1);
    }
    game.state.property_owners.insert(1, debtor);

    // Owes 200 rent to the creditor; cash goes negative.
    game.state.get_player_mut(debtor).unwrap().cash -= 200;
    assert_eq!(game.state.get_player(debtor).unwrap().cash, -150);

    let auto_events = liquidate_assets(&mut game.state, debtor);
    assert!(
        auto_events.is_empty(),
        "no sellable buildings and no unmortgaged property means nothing to liquidate"
    );
    assert!(is_insolvent(&game.state, debtor));

    let events = declare_bankrupt(&mut game.state, debtor, Some(creditor));
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], EventKind::PlayerBankrupt { creditor: Some(c) } if c == creditor));

    let debtor_player = game.state.get_player(debtor).unwrap();
    assert!(debtor_player.is_bankrupt);
    assert_eq!(debtor_player.cash, 0);
    assert!(debtor_player.properties.is_empty());

    assert_eq!(game.state.owner_of(1), Some(creditor));
    assert!(game.state.get_player(creditor).unwrap().properties.contains(&1));
    assert!(game.state.get_player(creditor).unwrap().mortgaged.contains(&1));
}
