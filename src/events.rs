//! Event taxonomy (spec §6.1) and the per-game monotonic sequence.
//!
//! Every engine mutation produces exactly one `Event`. Events are append-only
//! and are never mutated once emitted (spec §3.3 invariant, §8.1 property 5).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    GameStarted {
        seed: u64,
        player_ids: Vec<Uuid>,
    },
    TurnStarted,
    DiceRolled {
        d1: u8,
        d2: u8,
        is_doubles: bool,
    },
    PlayerMoved {
        from: u8,
        new_position: u8,
        spaces_moved: u8,
    },
    PassedGo {
        salary: u32,
    },
    PropertyPurchased {
        position: u8,
        price: u32,
    },
    AuctionStarted {
        position: u8,
    },
    AuctionBid {
        bidder: Uuid,
        amount: u32,
    },
    AuctionWithdrawn {
        bidder: Uuid,
    },
    AuctionWon {
        winner: Option<Uuid>,
        position: u8,
        bid: u32,
    },
    RentPaid {
        payer: Uuid,
        owner: Uuid,
        position: u8,
        amount: u32,
    },
    CardDrawn {
        deck: crate::board::DeckKind,
        text: String,
    },
    TaxPaid {
        position: u8,
        amount: u32,
    },
    HouseBuilt {
        position: u8,
        houses: u8,
    },
    HotelBuilt {
        position: u8,
    },
    BuildingSold {
        position: u8,
        houses_remaining: u8,
    },
    PropertyMortgaged {
        position: u8,
    },
    PropertyUnmortgaged {
        position: u8,
    },
    TradeProposed {
        trade_id: Uuid,
        proposer: Uuid,
        receiver: Uuid,
    },
    TradeAccepted {
        trade_id: Uuid,
    },
    TradeRejected {
        trade_id: Uuid,
    },
    PlayerJailed {
        reason: JailReason,
    },
    PlayerFreed {
        method: JailExitMethod,
    },
    PlayerBankrupt {
        creditor: Option<Uuid>,
    },
    AgentSpoke {
        text: String,
        fallback: bool,
    },
    AgentThought {
        text: String,
    },
    Diagnostic {
        message: String,
    },
    GameOver {
        reason: GameOverReason,
        winner: Option<Uuid>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailReason {
    ThreeDoubles,
    GoToJailSpace,
    Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailExitMethod {
    Doubles,
    PaidFine,
    UsedCard,
    ForcedFine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    LastPlayerStanding,
    MaxTurnsReached,
    Cancelled,
    EngineError,
}

/// One emitted event envelope (spec §6.1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub sequence: u64,
    pub turn_number: u32,
    pub player_id: Option<Uuid>,
    pub data: EventKind,
}
