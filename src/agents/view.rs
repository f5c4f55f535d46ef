//! `GameView`: the information-filtered projection of `GameState` an agent
//! is allowed to see (spec §4.5 "GameView filtering"). Own state is exposed
//! in full; opponents only get public facts. Deck contents are never
//! exposed, only remaining sizes.

use serde::Serialize;
use uuid::Uuid;

use crate::board::get_space;
use crate::state::GameState;

#[derive(Debug, Clone, Serialize)]
pub struct OwnView {
    pub id: Uuid,
    pub name: String,
    pub position: u8,
    pub cash: i64,
    pub properties: Vec<u8>,
    pub houses: Vec<(u8, u8)>,
    pub mortgaged: Vec<u8>,
    pub in_jail: bool,
    pub jail_turns: u8,
    pub get_out_of_jail_cards: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpponentView {
    pub id: Uuid,
    pub name: String,
    pub position: u8,
    pub cash: i64,
    pub properties: Vec<PropertyPublicView>,
    pub jail_cards: u8,
    pub in_jail: bool,
    pub is_bankrupt: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyPublicView {
    pub position: u8,
    pub houses: u8,
    pub mortgaged: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardSpaceView {
    pub position: u8,
    pub name: String,
    pub owner: Option<Uuid>,
    pub owner_name: Option<String>,
    pub houses: u8,
    pub mortgaged: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    pub turn_number: u32,
    pub current_player_position: u8,
    pub me: OwnView,
    pub opponents: Vec<OpponentView>,
    pub board: Vec<BoardSpaceView>,
    pub chance_cards_remaining: usize,
    pub community_chest_cards_remaining: usize,
}

pub fn build_view(state: &GameState, player_id: Uuid) -> GameView {
    let me_player = state.get_player(player_id).expect("viewer must exist");
    let me = OwnView {
        id: me_player.id,
        name: me_player.name.clone(),
        position: me_player.position,
        cash: me_player.cash,
        properties: me_player.properties.iter().copied().collect(),
        houses: me_player.houses.iter().map(|(&p, &c)| (p, c)).collect(),
        mortgaged: me_player.mortgaged.iter().copied().collect(),
        in_jail: me_player.in_jail,
        jail_turns: me_player.jail_turns,
        get_out_of_jail_cards: me_player.get_out_of_jail_cards,
    };

    let opponents = state
        .players
        .iter()
        .filter(|p| p.id != player_id)
        .map(|p| OpponentView {
            id: p.id,
            name: p.name.clone(),
            position: p.position,
            cash: p.cash,
            properties: p
                .properties
                .iter()
                .map(|&pos| PropertyPublicView {
                    position: pos,
                    houses: p.house_count(pos),
                    mortgaged: p.is_mortgaged(pos),
                })
                .collect(),
            jail_cards: p.get_out_of_jail_cards,
            in_jail: p.in_jail,
            is_bankrupt: p.is_bankrupt,
        })
        .collect();

    let board = (0u8..40)
        .filter_map(|pos| get_space(pos).map(|s| (pos, s)))
        .map(|(pos, space)| {
            let owner = state.owner_of(pos);
            BoardSpaceView {
                position: pos,
                name: space.name.clone(),
                owner,
                owner_name: owner.and_then(|id| state.get_player(id)).map(|p| p.name.clone()),
                houses: owner
                    .and_then(|id| state.get_player(id))
                    .map(|p| p.house_count(pos))
                    .unwrap_or(0),
                mortgaged: owner
                    .and_then(|id| state.get_player(id))
                    .map(|p| p.is_mortgaged(pos))
                    .unwrap_or(false),
            }
        })
        .collect();

    GameView {
        turn_number: state.turn_number,
        current_player_position: state.current_player().position,
        me,
        opponents,
        board,
        chance_cards_remaining: state.chance_deck.draw_pile.len(),
        community_chest_cards_remaining: state.community_chest_deck.draw_pile.len(),
    }
}
