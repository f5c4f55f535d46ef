//! Agent Decision Layer (spec §4.5): one async operation per decision
//! point, each wrapped with retry + deterministic fallback by the
//! orchestrator rather than by the trait implementers themselves.

pub mod adapters;
pub mod decision;
pub mod fallback;
pub mod prompt;
pub mod view;

use async_trait::async_trait;
use uuid::Uuid;

use crate::agents::decision::{
    ActionBundle, AgentUtterance, DebtPlan, JailAction, TradeResponse,
};
use crate::agents::view::GameView;
use crate::context::ContextManager;
use crate::error::AppError;
use crate::personality::PersonalityId;
use crate::rules::trade_validation::TradeProposal;

/// One configured seat at the table. Carries everything a prompt needs
/// about *who* is deciding, independent of which backend answers for them.
#[derive(Debug, Clone)]
pub struct AgentIdentity {
    pub id: Uuid,
    pub name: String,
    pub model_identifier: String,
    pub temperature: f32,
    pub personality: PersonalityId,
}

/// A backend capable of answering every decision point in spec §4.5. Each
/// method receives the filtered `GameView`, the game's shared
/// `ContextManager` (spec §4.6 — one instance per game, read by every
/// agent), and whatever extra context the decision needs, and returns the
/// raw (unvalidated) value plus its utterance. The orchestrator is
/// responsible for schema/engine validation, the 30s timeout, the one
/// retry, and the fallback substitution — this trait's implementors should
/// simply answer or return an `AppError`.
#[async_trait]
pub trait Agent: Send + Sync {
    fn identity(&self) -> &AgentIdentity;

    async fn decide_pre_roll(
        &self,
        view: &GameView,
        context: &ContextManager,
    ) -> Result<(ActionBundle, AgentUtterance), AppError>;

    async fn decide_jail_action(
        &self,
        view: &GameView,
        context: &ContextManager,
    ) -> Result<(JailAction, AgentUtterance), AppError>;

    async fn decide_buy_or_auction(
        &self,
        view: &GameView,
        context: &ContextManager,
        position: u8,
        price: u32,
    ) -> Result<(bool, AgentUtterance), AppError>;

    async fn decide_auction_bid(
        &self,
        view: &GameView,
        context: &ContextManager,
        position: u8,
        current_bid: u32,
    ) -> Result<(u32, AgentUtterance), AppError>;

    async fn respond_to_trade(
        &self,
        view: &GameView,
        context: &ContextManager,
        trade_id: Uuid,
        proposal: &TradeProposal,
    ) -> Result<(TradeResponse, AgentUtterance), AppError>;

    async fn decide_post_roll(
        &self,
        view: &GameView,
        context: &ContextManager,
    ) -> Result<(ActionBundle, AgentUtterance), AppError>;

    async fn resolve_debt(
        &self,
        view: &GameView,
        context: &ContextManager,
        amount: u32,
        creditor_id: Option<Uuid>,
    ) -> Result<(DebtPlan, AgentUtterance), AppError>;
}
