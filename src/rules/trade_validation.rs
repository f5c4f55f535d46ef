//! Trade proposal validation (spec §4.1), grounded on the teacher's trade
//! handling but generalized to arbitrary asset bundles instead of a single
//! property-for-property swap.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::GameState;

/// One side of a proposed trade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeOffer {
    pub properties: Vec<u8>,
    pub cash: i64,
    pub jail_cards: u8,
}

impl TradeOffer {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.cash == 0 && self.jail_cards == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeProposal {
    pub proposer: Uuid,
    pub receiver: Uuid,
    pub proposer_gives: TradeOffer,
    pub receiver_gives: TradeOffer,
    /// Per mortgaged property being transferred, whether the receiver will
    /// pay to fully unmortgage it immediately (pre-committed per spec §4.1:
    /// "the trade proposal must pre-commit this choice").
    pub unmortgage_on_receipt: Vec<u8>,
}

pub fn validate_trade(state: &GameState, proposal: &TradeProposal) -> Result<(), String> {
    if proposal.proposer == proposal.receiver {
        return Err("cannot trade with self".into());
    }
    if proposal.proposer_gives.is_empty() && proposal.receiver_gives.is_empty() {
        return Err("trade has no content".into());
    }

    let proposer = state
        .get_player(proposal.proposer)
        .ok_or("proposer not found")?;
    let receiver = state
        .get_player(proposal.receiver)
        .ok_or("receiver not found")?;

    check_side(state, proposer, &proposal.proposer_gives)?;
    check_side(state, receiver, &proposal.receiver_gives)?;

    Ok(())
}

fn check_side(
    state: &GameState,
    owner: &crate::state::Player,
    offer: &TradeOffer,
) -> Result<(), String> {
    for &pos in &offer.properties {
        if !owner.properties.contains(&pos) {
            return Err(format!("{} does not own position {pos}", owner.name));
        }
        let no_buildings = crate::board::get_space(pos)
            .and_then(|s| s.group)
            .map(|g| {
                crate::board::group_spaces(g)
                    .iter()
                    .all(|s| owner.house_count(s.position) == 0)
            })
            .unwrap_or(owner.house_count(pos) == 0);
        if !no_buildings {
            return Err(format!("position {pos} has buildings, cannot trade"));
        }
    }
    if owner.cash < offer.cash {
        return Err(format!("{} cannot cover {} cash", owner.name, offer.cash));
    }
    if owner.get_out_of_jail_cards < offer.jail_cards {
        return Err(format!("{} does not have enough jail cards", owner.name));
    }
    let _ = state;
    Ok(())
}
