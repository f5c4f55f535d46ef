//! Shared building-sale logic (spec §4.1 even-sell, §4.3 liquidation stage
//! 1), used by both a player's voluntary `sell_house` and the bankruptcy
//! liquidator so the house/hotel supply never drifts (spec §3.3, §8.1.1).

use uuid::Uuid;

use crate::events::EventKind;
use crate::rules::build::{can_downgrade_hotel, sell_refund, HOTEL, MAX_HOUSES};
use crate::state::GameState;

/// Sell one building increment off `position`: a hotel downgrades to 4
/// houses if the bank can supply them, otherwise it is sold outright for
/// the value of all 5 build increments and the bank recovers only the
/// hotel token (no houses ever changed hands). A plain house count
/// decrements by one. Callers must already have checked sellability.
pub fn sell_building(state: &mut GameState, player: Uuid, position: u8) -> Vec<EventKind> {
    let mut events = Vec::new();
    let Some(owner) = state.get_player(player) else { return events };
    let current = owner.house_count(position);

    if current == HOTEL {
        if can_downgrade_hotel(&state.bank) {
            for _ in 0..MAX_HOUSES {
                state.bank.take_house();
            }
            state.bank.return_hotel();
            let owner = state.get_player_mut(player).expect("player exists");
            owner.houses.insert(position, MAX_HOUSES);
            owner.cash += sell_refund(position) as i64;
            events.push(EventKind::BuildingSold {
                position,
                houses_remaining: MAX_HOUSES,
            });
        } else {
            state.bank.return_hotel();
            let owner = state.get_player_mut(player).expect("player exists");
            owner.houses.remove(&position);
            owner.cash += sell_refund(position) as i64 * 5;
            events.push(EventKind::BuildingSold {
                position,
                houses_remaining: 0,
            });
        }
    } else {
        state.bank.return_house();
        let owner = state.get_player_mut(player).expect("player exists");
        let remaining = current.saturating_sub(1);
        if remaining == 0 {
            owner.houses.remove(&position);
        } else {
            owner.houses.insert(position, remaining);
        }
        owner.cash += sell_refund(position) as i64;
        events.push(EventKind::BuildingSold {
            position,
            houses_remaining: remaining,
        });
    }

    events
}
