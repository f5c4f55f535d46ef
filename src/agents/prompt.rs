//! Prompt assembly (spec §4.5 "Structured output contract"): the ten
//! ordered sections every decision call is built from. This module only
//! renders text; retry/timeout/fallback policy lives in the orchestrator,
//! and the JSON schema itself is attached by each adapter per its
//! backend's calling convention.

use serde::Serialize;
use uuid::Uuid;

use crate::agents::view::GameView;
use crate::agents::AgentIdentity;
use crate::context::ContextManager;
use crate::personality::PersonalityId;

#[derive(Debug, Clone, Serialize)]
pub struct PromptMetadata {
    pub turn_number: u32,
    pub phase: String,
    pub decision: String,
    pub agent_name: String,
}

/// The fully assembled set of sections (spec §4.5, items 1-9); the schema
/// itself, item 10, is attached by the calling adapter since its shape is
/// backend-specific.
#[derive(Debug, Clone, Serialize)]
pub struct PromptSections {
    pub metadata: PromptMetadata,
    pub personality_block: &'static str,
    pub rules_summary: &'static str,
    pub board: Vec<crate::agents::view::BoardSpaceView>,
    pub me: crate::agents::view::OwnView,
    pub opponents: Vec<crate::agents::view::OpponentView>,
    pub public_log: Vec<crate::context::LogEntry>,
    pub public_summary: Option<String>,
    pub private_log: Vec<crate::context::LogEntry>,
    pub available_actions: Vec<String>,
}

pub const RULES_SUMMARY: &str = "\
Standard Monopoly rules: roll two dice and move that many spaces; buy unowned \
property you land on or let it go to auction; pay rent on owned property at the \
printed rate, doubled for a full unimproved color set, scaled by railroad/utility \
count; build houses evenly across a fully-owned group up to four, then a hotel; \
mortgaging pays half value and stops rent until unmortgaged at 110% of that value; \
three consecutive doubles sends you to jail; jail ends by paying $50, playing a \
Get Out of Jail Free card, or rolling doubles (forced payment on the third failed \
attempt); a player who cannot cover a debt liquidates buildings and mortgages \
property before declaring bankruptcy.";

#[allow(clippy::too_many_arguments)]
pub fn build(
    identity: &AgentIdentity,
    view: &GameView,
    context: &ContextManager,
    turn_number: u32,
    phase: &str,
    decision: &str,
    available_actions: Vec<String>,
) -> PromptSections {
    PromptSections {
        metadata: PromptMetadata {
            turn_number,
            phase: phase.to_string(),
            decision: decision.to_string(),
            agent_name: identity.name.clone(),
        },
        personality_block: identity.personality.profile().prompt_block,
        rules_summary: RULES_SUMMARY,
        board: view.board.clone(),
        me: view.me.clone(),
        opponents: view.opponents.clone(),
        public_log: context.public_window(turn_number),
        public_summary: context.public_summary(turn_number),
        private_log: context.private_tail(identity.id),
        available_actions,
    }
}

pub fn personality_label(id: PersonalityId) -> &'static str {
    id.profile().display_name
}

pub fn agent_label(id: Uuid, view: &GameView) -> String {
    if view.me.id == id {
        view.me.name.clone()
    } else {
        view.opponents
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
