//! Typed decision contracts returned by the agent interface (spec §4.5).
//! Every variant here is also the shape validated as an agent's structured
//! JSON output before the engine is allowed to apply it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rules::trade_validation::TradeProposal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailAction {
    PayFine,
    UseCard,
    RollDoubles,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildAction {
    pub position: u8,
    pub sell: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageAction {
    pub position: u8,
    pub unmortgage: bool,
}

/// The bundle an agent returns at PRE_ROLL and POST_ROLL (spec §4.5: "bundle
/// of (trades, builds, mortgages, unmortgages)"). Builds and mortgages are
/// merged into one list since each item already states its direction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionBundle {
    pub propose_trade: Option<TradeProposal>,
    pub builds: Vec<BuildAction>,
    pub mortgages: Vec<MortgageAction>,
}

/// Plan an agent returns from `resolve_debt` (spec §9 "explicit multi-stage
/// resolver returning a plan"). The orchestrator applies stages in order and
/// re-checks solvency after each.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebtPlan {
    pub sell_buildings: Vec<u8>,
    pub mortgage: Vec<u8>,
    pub propose_trade: Option<TradeProposal>,
    pub declare_bankruptcy: bool,
}

/// Dual-channel output attached to every agent decision (spec §4.5: speech
/// ≤ 30 words, thought 2-3 sentences, both may be empty).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentUtterance {
    pub public_speech: String,
    pub private_thought: String,
}

/// A decision plus its utterance, and whether it was produced by the
/// deterministic fallback rather than the backing model (spec §6.1
/// `AGENT_SPOKE{fallback}`).
#[derive(Debug, Clone)]
pub struct Decision<T> {
    pub value: T,
    pub utterance: AgentUtterance,
    pub fallback: bool,
}

impl<T> Decision<T> {
    pub fn new(value: T, utterance: AgentUtterance) -> Self {
        Self {
            value,
            utterance,
            fallback: false,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            utterance: AgentUtterance::default(),
            fallback: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeResponse {
    pub trade_id: Uuid,
    pub accept: bool,
}
