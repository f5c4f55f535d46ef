//! Even-build / even-sell predicates and cost calculators (spec §4.1),
//! grounded on the teacher's `GameEngine::build_house` validation chain but
//! generalized from "any full set" to the full even-build tie-break rule.

use uuid::Uuid;

use crate::board::{get_space, group_spaces, ColorGroup, SpaceKind};
use crate::rules::rent::player_has_full_set;
use crate::state::{Bank, GameState};

pub const MAX_HOUSES: u8 = 4;
pub const HOTEL: u8 = 5;

/// True if `player` may build one house (or the hotel, if already at 4) on
/// `position` right now.
pub fn can_build_house(state: &GameState, player: Uuid, position: u8) -> bool {
    let Some(space) = get_space(position) else { return false };
    if space.kind != SpaceKind::Property {
        return false;
    }
    let Some(group) = space.group else { return false };
    if !player_has_full_set(state, player, group) {
        return false;
    }
    let Some(owner) = state.get_player(player) else { return false };
    if group_spaces(group).iter().any(|s| owner.is_mortgaged(s.position)) {
        return false;
    }

    let current = owner.house_count(position);
    if current >= HOTEL {
        return false;
    }

    if current == MAX_HOUSES {
        let others_ready = group_spaces(group)
            .iter()
            .filter(|s| s.position != position)
            .all(|s| owner.house_count(s.position) >= MAX_HOUSES);
        if !others_ready {
            return false;
        }
        if state.bank.hotels_available == 0 {
            return false;
        }
    } else {
        let min_in_group = group_spaces(group)
            .iter()
            .map(|s| owner.house_count(s.position))
            .min()
            .unwrap_or(0);
        let min_position = group_spaces(group)
            .iter()
            .filter(|s| owner.house_count(s.position) == min_in_group)
            .map(|s| s.position)
            .min();
        if current != min_in_group || min_position != Some(position) {
            return false;
        }
        if state.bank.houses_available == 0 {
            return false;
        }
    }

    owner.cash >= space.house_cost as i64
}

/// True if `player` may sell one house (or the hotel) off `position`.
pub fn can_sell_house(state: &GameState, player: Uuid, position: u8) -> bool {
    let Some(space) = get_space(position) else { return false };
    let Some(group) = space.group else { return false };
    let Some(owner) = state.get_player(player) else { return false };
    if !owner.properties.contains(&position) {
        return false;
    }
    let current = owner.house_count(position);
    if current == 0 {
        return false;
    }
    let max_in_group = group_spaces(group)
        .iter()
        .map(|s| owner.house_count(s.position))
        .max()
        .unwrap_or(0);
    current == max_in_group
}

/// Cash paid to the bank for one additional house/hotel on `position`.
pub fn house_cost(position: u8) -> u32 {
    get_space(position).map(|s| s.house_cost).unwrap_or(0)
}

/// Cash refunded for selling one house/hotel off `position` — half the
/// group's build cost (spec §4.3 "sell buildings: half their purchase
/// price").
pub fn sell_refund(position: u8) -> u32 {
    house_cost(position) / 2
}

/// Whether downgrading a hotel on `position` to 4 houses is possible given
/// the bank's remaining house supply (spec §4.1 even-sell hotel case).
pub fn can_downgrade_hotel(bank: &Bank) -> bool {
    bank.houses_available >= MAX_HOUSES
}

pub fn group_of(position: u8) -> Option<ColorGroup> {
    get_space(position).and_then(|s| s.group)
}
