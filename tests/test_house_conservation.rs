//! Total houses + hotels across players and the bank must stay constant
//! (spec §3.3, testable property §8.1.1): building a hotel returns the 4
//! displaced houses to the bank, and selling one either downgrades back to
//! 4 houses or, if the bank can't supply them, sells outright.

mod common;

use monopoly_arena_core::state::TurnPhase;

const BROWN_A: u8 = 1;
const BROWN_B: u8 = 3;

fn give_full_brown_set(game: &mut monopoly_arena_core::engine::game::Game, player: uuid::Uuid) {
    for &pos in &[BROWN_A, BROWN_B] {
        game.state.get_player_mut(player).unwrap().properties.insert(pos);
        game.state.property_owners.insert(pos, player);
    }
}

#[test]
fn building_a_hotel_returns_four_houses_to_the_bank() {
    let mut game = common::new_game(2, 11);
    let player = game.state.players[0].id;
    game.state.current_player_index = 0;
    game.state.turn_phase = TurnPhase::PostRoll;
    give_full_brown_set(&mut game, player);

    let houses_before = game.state.bank.houses_available;
    let hotels_before = game.state.bank.hotels_available;

    for _ in 0..4 {
        game.build_house(player, BROWN_A).expect("builds within even-build rule");
        game.build_house(player, BROWN_B).expect("builds within even-build rule");
    }
    assert_eq!(game.state.bank.houses_available, houses_before - 8);

    game.build_house(player, BROWN_A).expect("hotel build succeeds");
    assert_eq!(
        game.state.bank.houses_available,
        houses_before - 4,
        "the 4 houses forming the hotel return to the bank"
    );
    assert_eq!(game.state.bank.hotels_available, hotels_before - 1);
    assert_eq!(game.state.get_player(player).unwrap().house_count(BROWN_A), 5);

    let events = game.sell_house(player, BROWN_A).expect("sells back down to houses");
    assert_eq!(events.len(), 1);
    assert_eq!(game.state.bank.houses_available, houses_before - 8);
    assert_eq!(game.state.bank.hotels_available, hotels_before);
    assert_eq!(game.state.get_player(player).unwrap().house_count(BROWN_A), 4);
}

#[test]
fn hotel_sells_outright_when_bank_cannot_supply_four_houses() {
    let mut game = common::new_game(2, 11);
    let player = game.state.players[0].id;
    game.state.current_player_index = 0;
    game.state.turn_phase = TurnPhase::PostRoll;
    give_full_brown_set(&mut game, player);
    game.state.get_player_mut(player).unwrap().houses.insert(BROWN_A, 5);
    game.state.get_player_mut(player).unwrap().houses.insert(BROWN_B, 4);
    game.state.bank.hotels_available -= 1;

    // Starve the bank's house supply below the 4 a downgrade would need.
    game.state.bank.houses_available = 2;
    let cash_before = game.state.get_player(player).unwrap().cash;

    let events = game.sell_house(player, BROWN_A).expect("sells outright");
    assert_eq!(events.len(), 1);
    assert_eq!(
        game.state.get_player(player).unwrap().house_count(BROWN_A),
        0,
        "no partial downgrade happens without 4 spare houses"
    );
    assert_eq!(game.state.bank.houses_available, 2, "no houses change hands on an outright sale");
    assert_eq!(game.state.get_player(player).unwrap().cash, cash_before + 50 / 2 * 5);
}
