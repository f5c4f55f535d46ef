//! Rent calculation (spec §4.1). Stateless: every function takes the
//! immutable board reference plus the current `GameState` and returns a
//! plain number, grounded on the teacher's `GameEngine::calculate_rent`.

use crate::board::{get_space, group_spaces, SpaceKind};
use crate::state::GameState;
use uuid::Uuid;

/// Rent owed on `position` if `payer` lands there right now. Returns 0 for
/// unowned, bank-owned, self-owned, or mortgaged tiles — callers skip the
/// transfer in that case rather than branching on zero specially.
pub fn rent_due(state: &GameState, position: u8, payer: Uuid, dice_total: u32) -> u32 {
    let Some(space) = get_space(position) else { return 0 };
    let Some(owner) = state.owner_of(position) else { return 0 };
    if owner == payer {
        return 0;
    }
    let Some(owner_player) = state.get_player(owner) else { return 0 };
    if owner_player.is_mortgaged(position) {
        return 0;
    }

    match space.kind {
        SpaceKind::Property => {
            let houses = owner_player.house_count(position);
            if houses > 0 {
                space.rent_schedule[houses as usize]
            } else if space.group.map(|g| player_has_full_set(state, owner, g)).unwrap_or(false) {
                space.rent_schedule[0] * 2
            } else {
                space.rent_schedule[0]
            }
        }
        SpaceKind::Railroad => {
            let count = owned_unmortgaged_count(state, owner, SpaceKind::Railroad);
            [25u32, 50, 100, 200]
                .get(count.saturating_sub(1))
                .copied()
                .unwrap_or(0)
        }
        SpaceKind::Utility => {
            let count = owned_unmortgaged_count(state, owner, SpaceKind::Utility);
            let multiplier = if count >= 2 { 10 } else { 4 };
            dice_total * multiplier
        }
        _ => 0,
    }
}

/// Railroad rent doubled by the "Advance to nearest Railroad" Chance card
/// (spec §4.1 special case), applied on top of the already-unmortgaged count.
pub fn nearest_railroad_rent(state: &GameState, position: u8, payer: Uuid, dice_total: u32) -> u32 {
    rent_due(state, position, payer, dice_total) * 2
}

pub fn player_has_full_set(state: &GameState, owner: Uuid, group: crate::board::ColorGroup) -> bool {
    group_spaces(group).iter().all(|space| {
        state
            .owner_of(space.position)
            .map(|o| o == owner)
            .unwrap_or(false)
    })
}

fn owned_unmortgaged_count(state: &GameState, owner: Uuid, kind: SpaceKind) -> usize {
    let Some(player) = state.get_player(owner) else { return 0 };
    player
        .properties
        .iter()
        .filter(|&&pos| {
            get_space(pos).map(|s| s.kind == kind).unwrap_or(false) && !player.is_mortgaged(pos)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Bank, Deck, Player};
    use crate::board::DeckKind;
    use crate::rng::GameRng;

    fn fresh_state(players: Vec<Player>) -> GameState {
        let mut rng = GameRng::from_seed(1);
        GameState::new(
            players,
            Bank::default(),
            Deck::new_shuffled(DeckKind::Chance, &mut rng),
            Deck::new_shuffled(DeckKind::CommunityChest, &mut rng),
        )
    }

    #[test]
    fn unowned_property_has_no_rent() {
        let payer = Uuid::new_v4();
        let state = fresh_state(vec![Player::new(payer, "A".into(), 1500)]);
        assert_eq!(rent_due(&state, 1, payer, 7), 0);
    }

    #[test]
    fn mortgaged_property_has_no_rent() {
        let owner = Uuid::new_v4();
        let payer = Uuid::new_v4();
        let mut owner_player = Player::new(owner, "Owner".into(), 1500);
        owner_player.properties.insert(1);
        owner_player.mortgaged.insert(1);
        let mut state = fresh_state(vec![owner_player, Player::new(payer, "Payer".into(), 1500)]);
        state.property_owners.insert(1, owner);
        assert_eq!(rent_due(&state, 1, payer, 7), 0);
    }

    #[test]
    fn full_color_set_doubles_unimproved_rent() {
        let owner = Uuid::new_v4();
        let payer = Uuid::new_v4();
        let group = get_space(1).unwrap().group.unwrap();
        let mut owner_player = Player::new(owner, "Owner".into(), 1500);
        let mut state = fresh_state(vec![Player::new(payer, "Payer".into(), 1500)]);
        for space in group_spaces(group) {
            owner_player.properties.insert(space.position);
            state.property_owners.insert(space.position, owner);
        }
        state.players.insert(0, owner_player);
        let base = get_space(1).unwrap().rent_schedule[0];
        assert_eq!(rent_due(&state, 1, payer, 7), base * 2);
    }
}
