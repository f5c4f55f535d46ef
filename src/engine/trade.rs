//! Atomic trade execution (spec §4.1, §4.2 "Trade Executor" 3% row).
//! Validation lives in `rules::trade_validation`; this module performs the
//! transfer once a proposal has been accepted by both sides.

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::events::EventKind;
use crate::rules::mortgage::{transfer_fee, unmortgage_cost};
use crate::rules::trade_validation::{validate_trade, TradeProposal};
use crate::state::GameState;

pub fn propose(proposal: &TradeProposal) -> EventKind {
    EventKind::TradeProposed {
        trade_id: Uuid::new_v4(),
        proposer: proposal.proposer,
        receiver: proposal.receiver,
    }
}

/// Execute an accepted trade: move properties, cash, and jail cards both
/// ways, charging the mortgaged-transfer fee (and optional immediate
/// unmortgage) the proposal pre-committed (spec §4.1).
pub fn execute(state: &mut GameState, proposal: &TradeProposal, trade_id: Uuid) -> EngineResult<EventKind> {
    validate_trade(state, proposal).map_err(EngineError::IllegalAction)?;

    transfer_side(
        state,
        proposal.proposer,
        proposal.receiver,
        &proposal.proposer_gives.properties,
        proposal.proposer_gives.cash,
        proposal.proposer_gives.jail_cards,
        &proposal.unmortgage_on_receipt,
    )?;
    transfer_side(
        state,
        proposal.receiver,
        proposal.proposer,
        &proposal.receiver_gives.properties,
        proposal.receiver_gives.cash,
        proposal.receiver_gives.jail_cards,
        &proposal.unmortgage_on_receipt,
    )?;

    Ok(EventKind::TradeAccepted { trade_id })
}

pub fn reject(trade_id: Uuid) -> EventKind {
    EventKind::TradeRejected { trade_id }
}

#[allow(clippy::too_many_arguments)]
fn transfer_side(
    state: &mut GameState,
    from: Uuid,
    to: Uuid,
    properties: &[u8],
    cash: i64,
    jail_cards: u8,
    unmortgage_on_receipt: &[u8],
) -> EngineResult<()> {
    for &pos in properties {
        let was_mortgaged = state
            .get_player(from)
            .map(|p| p.is_mortgaged(pos))
            .unwrap_or(false);

        if let Some(giver) = state.get_player_mut(from) {
            giver.properties.remove(&pos);
            giver.mortgaged.remove(&pos);
            giver.houses.remove(&pos);
        }

        let fee = if was_mortgaged { transfer_fee(pos) } else { 0 };
        let will_unmortgage = was_mortgaged && unmortgage_on_receipt.contains(&pos);
        let receiver = state
            .get_player_mut(to)
            .ok_or(EngineError::PlayerNotFound(to))?;
        receiver.properties.insert(pos);
        receiver.cash -= fee as i64;
        if was_mortgaged && !will_unmortgage {
            receiver.mortgaged.insert(pos);
        } else if will_unmortgage {
            receiver.cash -= unmortgage_cost(pos) as i64;
        }
        state.property_owners.insert(pos, to);
    }

    let giver = state.get_player_mut(from).ok_or(EngineError::PlayerNotFound(from))?;
    giver.cash -= cash;
    let mut taken_decks = Vec::with_capacity(jail_cards as usize);
    for _ in 0..jail_cards {
        match giver.take_jail_card() {
            Some(deck) => taken_decks.push(deck),
            None => break,
        }
    }

    let receiver = state.get_player_mut(to).ok_or(EngineError::PlayerNotFound(to))?;
    receiver.cash += cash;
    for deck in taken_decks {
        receiver.grant_jail_card(deck);
    }

    Ok(())
}
