//! Plain JSON completion backend adapter. Unlike `provider_a`, the backend
//! has no native tool-call mode: the prompt instructs it to answer with a
//! raw JSON object matching the described shape, and this adapter parses
//! that text itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
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
struct CompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    prompt: PromptSections,
    instructions: &'static str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    text: String,
}

#[derive(Deserialize)]
struct ParsedAnswer<T> {
    answer: T,
    public_speech: String,
    private_thought: String,
}

pub struct ProviderBAgent {
    identity: AgentIdentity,
    http: HttpClient,
}

impl ProviderBAgent {
    pub fn new(identity: AgentIdentity, http: HttpClient) -> Self {
        Self { identity, http }
    }

    async fn call<T: for<'de> Deserialize<'de>>(
        &self,
        sections: PromptSections,
        instructions: &'static str,
    ) -> Result<(T, AgentUtterance), AppError> {
        let request = CompletionRequest {
            model: &self.identity.model_identifier,
            temperature: self.identity.temperature,
            prompt: sections,
            instructions,
        };
        let response: CompletionResponse = self.http.post_json(&request).await?;
        let parsed: ParsedAnswer<T> = serde_json::from_str(response.text.trim())
            .map_err(|e| AppError::Agent(format!("response was not valid JSON: {e}")))?;
        Ok((
            parsed.answer,
            AgentUtterance {
                public_speech: parsed.public_speech,
                private_thought: parsed.private_thought,
            },
        ))
    }
}

const BUNDLE_INSTRUCTIONS: &str =
    "Respond with raw JSON: {\"answer\": <action bundle>, \"public_speech\": <string, \
    <=30 words>, \"private_thought\": <string, 2-3 sentences>}. No prose outside the JSON.";

#[async_trait]
impl Agent for ProviderBAgent {
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
        self.call(sections, BUNDLE_INSTRUCTIONS).await
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
        self.call(
            sections,
            "Respond with raw JSON: {\"answer\": \"PayFine\"|\"UseCard\"|\"RollDoubles\", \
            \"public_speech\": <string>, \"private_thought\": <string>}.",
        )
        .await
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
        self.call(
            sections,
            "Respond with raw JSON: {\"answer\": true|false, \"public_speech\": <string>, \
            \"private_thought\": <string>}.",
        )
        .await
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
        self.call(
            sections,
            "Respond with raw JSON: {\"answer\": <non-negative integer>, \"public_speech\": \
            <string>, \"private_thought\": <string>}.",
        )
        .await
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
        let (accept, utterance): (bool, AgentUtterance) = self
            .call(
                sections,
                "Respond with raw JSON: {\"answer\": true|false, \"public_speech\": <string>, \
                \"private_thought\": <string>}.",
            )
            .await?;
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
        self.call(
            sections,
            "Respond with raw JSON: {\"answer\": <debt plan object>, \"public_speech\": <string>, \
            \"private_thought\": <string>}.",
        )
        .await
    }
}
