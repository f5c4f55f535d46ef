//! Function-calling / schema-constrained backend adapter. Encodes each
//! decision point as a single tool call whose JSON schema mirrors the
//! decision type, so the backend is forced to emit a parseable structure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::agents::adapters::http::HttpClient;
use crate::agents::decision::{
    ActionBundle, AgentUtterance, DebtPlan, JailAction, TradeResponse,
};
use crate::agents::prompt::{self, PromptSections};
use crate::agents::view::GameView;
use crate::agents::{Agent, AgentIdentity};
use crate::context::ContextManager;
use crate::error::AppError;
use crate::rules::trade_validation::TradeProposal;

#[derive(Serialize)]
struct ToolCallRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [Message; 1],
    tool_schema: Value,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: PromptSections,
}

#[derive(Deserialize)]
struct ToolCallResponse<T> {
    arguments: T,
    public_speech: String,
    private_thought: String,
}

pub struct ProviderAAgent {
    identity: AgentIdentity,
    http: HttpClient,
}

impl ProviderAAgent {
    pub fn new(identity: AgentIdentity, http: HttpClient) -> Self {
        Self { identity, http }
    }

    async fn call<T: for<'de> Deserialize<'de>>(
        &self,
        sections: PromptSections,
        schema: Value,
    ) -> Result<(T, AgentUtterance), AppError> {
        let request = ToolCallRequest {
            model: &self.identity.model_identifier,
            temperature: self.identity.temperature,
            messages: [Message {
                role: "user",
                content: sections,
            }],
            tool_schema: schema,
        };
        let response: ToolCallResponse<T> = self.http.post_json(&request).await?;
        Ok((
            response.arguments,
            AgentUtterance {
                public_speech: response.public_speech,
                private_thought: response.private_thought,
            },
        ))
    }
}

#[async_trait]
impl Agent for ProviderAAgent {
    fn identity(&self) -> &AgentIdentity {
        &self.identity
    }

    async fn decide_pre_roll(
        &self,
        view: &GameView,
        context: &ContextManager,
    ) -> Result<(ActionBundle, AgentUtterance), AppError> {
        let sections = prompt::build(
            &self.identity,
            view,
            context,
            view.turn_number,
            "PRE_ROLL",
            "decide_pre_roll",
            vec!["propose_trade".into(), "build".into(), "mortgage".into(), "pass".into()],
        );
        self.call(sections, schema_action_bundle()).await
    }

    async fn decide_jail_action(
        &self,
        view: &GameView,
        context: &ContextManager,
    ) -> Result<(JailAction, AgentUtterance), AppError> {
        let sections = prompt::build(
            &self.identity,
            view,
            context,
            view.turn_number,
            "JAIL",
            "decide_jail_action",
            vec!["pay_fine".into(), "use_card".into(), "roll_doubles".into()],
        );
        self.call(sections, schema_enum(&["PayFine", "UseCard", "RollDoubles"])).await
    }

    async fn decide_buy_or_auction(
        &self,
        view: &GameView,
        context: &ContextManager,
        position: u8,
        price: u32,
    ) -> Result<(bool, AgentUtterance), AppError> {
        let sections = prompt::build(
            &self.identity,
            view,
            context,
            view.turn_number,
            "LANDED",
            "decide_buy_or_auction",
            vec![format!("buy position {position} for {price}"), "decline".into()],
        );
        self.call(sections, schema_bool()).await
    }

    async fn decide_auction_bid(
        &self,
        view: &GameView,
        context: &ContextManager,
        position: u8,
        current_bid: u32,
    ) -> Result<(u32, AgentUtterance), AppError> {
        let sections = prompt::build(
            &self.identity,
            view,
            context,
            view.turn_number,
            "AUCTION",
            "decide_auction_bid",
            vec![format!("bid above {current_bid} for position {position}, 0 to withdraw")],
        );
        self.call(sections, schema_u32()).await
    }

    async fn respond_to_trade(
        &self,
        view: &GameView,
        context: &ContextManager,
        trade_id: Uuid,
        _proposal: &TradeProposal,
    ) -> Result<(TradeResponse, AgentUtterance), AppError> {
        let sections = prompt::build(
            &self.identity,
            view,
            context,
            view.turn_number,
            "TRADE_RESPONSE",
            "respond_to_trade",
            vec!["accept".into(), "reject".into()],
        );
        let (accept, utterance): (bool, AgentUtterance) = self.call(sections, schema_bool()).await?;
        Ok((TradeResponse { trade_id, accept }, utterance))
    }

    async fn decide_post_roll(
        &self,
        view: &GameView,
        context: &ContextManager,
    ) -> Result<(ActionBundle, AgentUtterance), AppError> {
        self.decide_pre_roll(view, context).await
    }

    async fn resolve_debt(
        &self,
        view: &GameView,
        context: &ContextManager,
        amount: u32,
        creditor_id: Option<Uuid>,
    ) -> Result<(DebtPlan, AgentUtterance), AppError> {
        let sections = prompt::build(
            &self.identity,
            view,
            context,
            view.turn_number,
            "DEBT",
            "resolve_debt",
            vec![format!("raise {amount} owed to {creditor_id:?} or declare bankruptcy")],
        );
        self.call(sections, schema_debt_plan()).await
    }
}

fn schema_action_bundle() -> Value {
    serde_json::json!({"type": "object"})
}
fn schema_enum(variants: &[&str]) -> Value {
    serde_json::json!({"type": "string", "enum": variants})
}
fn schema_bool() -> Value {
    serde_json::json!({"type": "boolean"})
}
fn schema_u32() -> Value {
    serde_json::json!({"type": "integer", "minimum": 0})
}
fn schema_debt_plan() -> Value {
    serde_json::json!({"type": "object"})
}
