//! Scenario 1 (spec §8.4): a roll from GO moves the player forward by the
//! dice total and never credits salary, since no wraparound past position 0
//! is possible on a single roll.

mod common;

use monopoly_arena_core::events::EventKind;

#[test]
fn roll_from_go_moves_without_passing_go() {
    let mut game = common::new_game(2, 42);
    assert_eq!(game.state.current_player().position, 0);

    let (events, moved) = game.roll().expect("PreRoll accepts a roll");
    assert!(moved, "a fresh roll off GO always results in movement");

    let (d1, d2) = events
        .iter()
        .find_map(|e| match e {
            EventKind::DiceRolled { d1, d2, .. } => Some((*d1, *d2)),
            _ => None,
        })
        .expect("DiceRolled is always the first event of a roll");
    let total = (d1 + d2) as u8;

    let moved_event = events
        .iter()
        .find_map(|e| match e {
            EventKind::PlayerMoved { from, new_position, spaces_moved } => {
                Some((*from, *new_position, *spaces_moved))
            }
            _ => None,
        })
        .expect("a successful roll always emits PlayerMoved");
    assert_eq!(moved_event, (0, total, total));

    assert!(
        !events.iter().any(|e| matches!(e, EventKind::PassedGo { .. })),
        "moving forward from GO itself never passes GO"
    );
}
