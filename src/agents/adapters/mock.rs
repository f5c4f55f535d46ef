//! Deterministic stub agent (spec §8.4 "deterministic stub decisions"):
//! buy if affordable, never trade, never build, pay fine if in jail. Built
//! directly on the same fallback policy the orchestrator substitutes on
//! agent failure, since both describe the same conservative, rule-legal
//! play (spec §4.5's fallback policy is a strict subset of this stub's
//! behavior).

use async_trait::async_trait;
use uuid::Uuid;

use crate::agents::decision::{
    ActionBundle, AgentUtterance, DebtPlan, JailAction, TradeResponse,
};
use crate::agents::view::GameView;
use crate::agents::{fallback, Agent, AgentIdentity};
use crate::context::ContextManager;
use crate::error::AppError;
use crate::personality::PersonalityId;
use crate::rules::trade_validation::TradeProposal;

pub struct MockAgent {
    identity: AgentIdentity,
}

impl MockAgent {
    pub fn new(id: Uuid, name: impl Into<String>, personality: PersonalityId) -> Self {
        Self {
            identity: AgentIdentity {
                id,
                name: name.into(),
                model_identifier: "mock-stub".into(),
                temperature: 0.0,
                personality,
            },
        }
    }
}

#[async_trait]
impl Agent for MockAgent {
    fn identity(&self) -> &AgentIdentity {
        &self.identity
    }

    async fn decide_pre_roll(
        &self,
        _view: &GameView,
        _context: &ContextManager,
    ) -> Result<(ActionBundle, AgentUtterance), AppError> {
        Ok((fallback::empty_bundle(), AgentUtterance::default()))
    }

    async fn decide_jail_action(
        &self,
        view: &GameView,
        _context: &ContextManager,
    ) -> Result<(JailAction, AgentUtterance), AppError> {
        let player = crate::state::Player {
            id: view.me.id,
            name: view.me.name.clone(),
            position: view.me.position,
            cash: view.me.cash,
            properties: view.me.properties.iter().copied().collect(),
            houses: view.me.houses.iter().copied().collect(),
            mortgaged: view.me.mortgaged.iter().copied().collect(),
            in_jail: view.me.in_jail,
            jail_turns: view.me.jail_turns,
            get_out_of_jail_cards: view.me.get_out_of_jail_cards,
            is_bankrupt: false,
            consecutive_doubles: 0,
        };
        Ok((fallback::jail_action(&player), AgentUtterance::default()))
    }

    async fn decide_buy_or_auction(
        &self,
        view: &GameView,
        _context: &ContextManager,
        _position: u8,
        price: u32,
    ) -> Result<(bool, AgentUtterance), AppError> {
        Ok((view.me.cash >= price as i64, AgentUtterance::default()))
    }

    async fn decide_auction_bid(
        &self,
        _view: &GameView,
        _context: &ContextManager,
        _position: u8,
        _current_bid: u32,
    ) -> Result<(u32, AgentUtterance), AppError> {
        Ok((0, AgentUtterance::default()))
    }

    async fn respond_to_trade(
        &self,
        _view: &GameView,
        _context: &ContextManager,
        trade_id: Uuid,
        _proposal: &TradeProposal,
    ) -> Result<(TradeResponse, AgentUtterance), AppError> {
        Ok((
            TradeResponse {
                trade_id,
                accept: fallback::respond_to_trade(),
            },
            AgentUtterance::default(),
        ))
    }

    async fn decide_post_roll(
        &self,
        _view: &GameView,
        _context: &ContextManager,
    ) -> Result<(ActionBundle, AgentUtterance), AppError> {
        Ok((fallback::empty_bundle(), AgentUtterance::default()))
    }

    async fn resolve_debt(
        &self,
        _view: &GameView,
        _context: &ContextManager,
        _amount: u32,
        _creditor_id: Option<Uuid>,
    ) -> Result<(DebtPlan, AgentUtterance), AppError> {
        Ok((
            DebtPlan {
                declare_bankruptcy: true,
                ..Default::default()
            },
            AgentUtterance::default(),
        ))
    }
}
