//! Four-stage bankruptcy resolution (spec §4.3), grounded on the teacher's
//! `BankruptcyHandler::handle_bankruptcy`, extended from "reset on bank
//! debt" to the full sell-buildings / mortgage / trade-attempt / liquidate
//! pipeline the spec requires.

use uuid::Uuid;

use crate::board::DeckKind;
use crate::engine::build_ops::sell_building;
use crate::events::EventKind;
use crate::rules::build::{can_sell_house, house_cost};
use crate::rules::mortgage::{can_mortgage, mortgage_payout};
use crate::state::GameState;

/// A debtor is insolvent the instant cash goes negative; the engine must
/// then run this resolver before the turn can continue.
pub fn is_insolvent(state: &GameState, player: Uuid) -> bool {
    state.get_player(player).map(|p| p.cash < 0).unwrap_or(false)
}

/// Stage 1+2: sell every sellable building (even-sell order, highest count
/// first) then mortgage every unmortgaged property, stopping as soon as
/// cash is non-negative. Stage 3 (propose/accept trades) is an orchestrator
/// concern — it runs before this is called, if at all (spec §4.3 "at
/// orchestrator discretion"). Returns the events produced and whether the
/// debtor is still insolvent afterward (stage 4 required).
pub fn liquidate_assets(state: &mut GameState, debtor: Uuid) -> Vec<EventKind> {
    let mut events = Vec::new();

    loop {
        if !is_insolvent(state, debtor) {
            break;
        }
        let Some(position) = next_sellable_building(state, debtor) else { break };
        events.extend(sell_building(state, debtor, position));
    }

    loop {
        if !is_insolvent(state, debtor) {
            break;
        }
        let Some(position) = next_mortgageable(state, debtor) else { break };
        let payout = mortgage_payout(position);
        let player = state.get_player_mut(debtor).expect("debtor exists");
        player.mortgaged.insert(position);
        player.cash += payout as i64;
        events.push(EventKind::PropertyMortgaged { position });
    }

    events
}

fn next_sellable_building(state: &GameState, debtor: Uuid) -> Option<u8> {
    let player = state.get_player(debtor)?;
    player
        .houses
        .keys()
        .copied()
        .filter(|&pos| can_sell_house(state, debtor, pos))
        .max_by_key(|&pos| (player.house_count(pos), std::cmp::Reverse(house_cost(pos))))
}

fn next_mortgageable(state: &GameState, debtor: Uuid) -> Option<u8> {
    let player = state.get_player(debtor)?;
    player
        .properties
        .iter()
        .copied()
        .find(|&pos| can_mortgage(state, debtor, pos))
}

/// Stage 4: the debtor cannot be made solvent. Transfer (or liquidate)
/// everything, mark bankrupt, hand control back to the orchestrator.
pub fn declare_bankrupt(
    state: &mut GameState,
    debtor: Uuid,
    creditor: Option<Uuid>,
) -> Vec<EventKind> {
    let mut events = Vec::new();

    let (properties, jail_decks, mortgaged): (Vec<u8>, Vec<DeckKind>, std::collections::HashSet<u8>) = {
        let player = state.get_player(debtor).expect("debtor exists");
        let mut jail_decks = Vec::new();
        if player.jail_card_chance {
            jail_decks.push(DeckKind::Chance);
        }
        if player.jail_card_community_chest {
            jail_decks.push(DeckKind::CommunityChest);
        }
        (
            player.properties.iter().copied().collect(),
            jail_decks,
            player.mortgaged.clone(),
        )
    };

    match creditor {
        Some(creditor_id) => {
            for &pos in &properties {
                state.property_owners.insert(pos, creditor_id);
            }
            if let Some(creditor_player) = state.get_player_mut(creditor_id) {
                for &pos in &properties {
                    creditor_player.properties.insert(pos);
                    if mortgaged.contains(&pos) {
                        creditor_player.mortgaged.insert(pos);
                    }
                }
                for &deck in &jail_decks {
                    creditor_player.grant_jail_card(deck);
                }
            }
        }
        None => {
            for &pos in &properties {
                state.property_owners.remove(&pos);
            }
            // No creditor to hand cards to: forfeited cards go back to the
            // bottom of their origin deck (spec §4.3).
            for &deck in &jail_decks {
                state.deck_mut(deck).return_jail_card();
            }
        }
    }

    if let Some(debtor_player) = state.get_player_mut(debtor) {
        debtor_player.properties.clear();
        debtor_player.houses.clear();
        debtor_player.mortgaged.clear();
        debtor_player.get_out_of_jail_cards = 0;
        debtor_player.jail_card_chance = false;
        debtor_player.jail_card_community_chest = false;
        debtor_player.cash = 0;
        debtor_player.is_bankrupt = true;
    }

    events.push(EventKind::PlayerBankrupt { creditor });
    events
}
