//! Mortgage / unmortgage eligibility and cost math (spec §4.1), grounded on
//! the teacher's `mortgage_property` / `unmortgage_property` handlers.

use uuid::Uuid;

use crate::board::get_space;
use crate::state::GameState;

pub fn can_mortgage(state: &GameState, player: Uuid, position: u8) -> bool {
    let Some(owner) = state.get_player(player) else { return false };
    if !owner.properties.contains(&position) {
        return false;
    }
    if owner.is_mortgaged(position) {
        return false;
    }
    let Some(group) = get_space(position).and_then(|s| s.group) else { return false };
    crate::board::group_spaces(group)
        .iter()
        .all(|s| owner.house_count(s.position) == 0)
}

pub fn can_unmortgage(state: &GameState, player: Uuid, position: u8) -> bool {
    let Some(owner) = state.get_player(player) else { return false };
    owner.properties.contains(&position)
        && owner.is_mortgaged(position)
        && owner.cash >= unmortgage_cost(position) as i64
}

/// Cash received when mortgaging `position`.
pub fn mortgage_payout(position: u8) -> u32 {
    get_space(position).map(|s| s.mortgage_value).unwrap_or(0)
}

/// `⌊mortgage_value × 1.10⌋` (spec §4.1).
pub fn unmortgage_cost(position: u8) -> u32 {
    let value = get_space(position).map(|s| s.mortgage_value).unwrap_or(0);
    (value as f64 * 1.10).floor() as u32
}

/// `⌊mortgage_value × 0.10⌋`, charged to whoever receives a mortgaged
/// property in a trade (spec §4.1).
pub fn transfer_fee(position: u8) -> u32 {
    let value = get_space(position).map(|s| s.mortgage_value).unwrap_or(0);
    (value as f64 * 0.10).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmortgage_cost_is_ten_percent_premium() {
        // position 1 has mortgage_value 30
        assert_eq!(unmortgage_cost(1), 33);
    }

    #[test]
    fn transfer_fee_is_ten_percent_of_mortgage_value() {
        assert_eq!(transfer_fee(1), 3);
    }
}
