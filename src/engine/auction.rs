//! Sequential ascending auctions (spec §4.4), grounded on the teacher's
//! `start_auction` / `place_bid` / `pass_bid` / `end_auction`.

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::events::EventKind;
use crate::state::GameState;

#[derive(Debug, Clone)]
pub struct AuctionState {
    pub position: u8,
    pub current_bid: u32,
    pub highest_bidder: Option<Uuid>,
    pub passed: Vec<Uuid>,
    /// Fixed bidding order, established at auction start (spec §4.4: all
    /// active bidders are queried each round in a stable order).
    pub order: Vec<Uuid>,
}

impl AuctionState {
    pub fn new(position: u8, order: Vec<Uuid>) -> Self {
        Self {
            position,
            current_bid: 0,
            highest_bidder: None,
            passed: Vec::new(),
            order,
        }
    }

    pub fn active_bidders(&self) -> Vec<Uuid> {
        self.order
            .iter()
            .copied()
            .filter(|id| !self.passed.contains(id))
            .collect()
    }

    pub fn is_over(&self) -> bool {
        self.active_bidders().len() <= 1
    }
}

pub fn bid(state: &GameState, auction: &mut AuctionState, bidder: Uuid, amount: u32) -> EngineResult<EventKind> {
    if auction.passed.contains(&bidder) {
        return Err(EngineError::IllegalAction("bidder already passed".into()));
    }
    if amount <= auction.current_bid {
        return Err(EngineError::IllegalAction("bid must exceed current bid".into()));
    }
    let player = state
        .get_player(bidder)
        .ok_or(EngineError::PlayerNotFound(bidder))?;
    if player.cash < amount as i64 {
        return Err(EngineError::IllegalAction("bid exceeds cash on hand".into()));
    }
    auction.current_bid = amount;
    auction.highest_bidder = Some(bidder);
    Ok(EventKind::AuctionBid { bidder, amount })
}

pub fn withdraw(auction: &mut AuctionState, bidder: Uuid) -> EventKind {
    if !auction.passed.contains(&bidder) {
        auction.passed.push(bidder);
    }
    EventKind::AuctionWithdrawn { bidder }
}

/// Resolve the auction: transfer cash and ownership to the winner, or leave
/// the tile unowned if everyone passed without a bid.
pub fn resolve(state: &mut GameState, auction: AuctionState) -> EventKind {
    let AuctionState {
        position,
        current_bid,
        highest_bidder,
        ..
    } = auction;

    if let Some(winner) = highest_bidder {
        if let Some(player) = state.get_player_mut(winner) {
            player.cash -= current_bid as i64;
            player.properties.insert(position);
        }
        state.property_owners.insert(position, winner);
    }

    EventKind::AuctionWon {
        winner: highest_bidder,
        position,
        bid: current_bid,
    }
}
