//! Turn orchestrator (spec.md §4.7), direct descendant of the teacher's
//! `GameEngine::roll_dice` / `handle_tile_landing` / `end_turn` /
//! `process_bot_turn` quartet, generalized from "mutate Redis-backed state
//! then broadcast" to "mutate an in-memory `Game`, invoke async `Agent`
//! calls at each decision point, broadcast via `EventBus`". The teacher's
//! own worry about async recursion is what the explicit phase loop below
//! avoids by construction: one `loop`, no re-entrant calls.

pub mod pacing;
pub mod registry;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::agents::decision::{ActionBundle, AgentUtterance, DebtPlan, JailAction, TradeResponse};
use crate::agents::view::{build_view, GameView};
use crate::agents::Agent;
use crate::context::{ContextManager, Summarizer};
use crate::engine::game::Game;
use crate::engine::landing::LandingOutcome;
use crate::events::{EventKind, GameOverReason};
use crate::orchestrator::pacing::PacingGate;
use crate::rules::trade_validation::TradeProposal;

pub use registry::{GameHandle, Registry};

const AGENT_TIMEOUT: Duration = Duration::from_secs(30);
const RETRY_BACKOFF: Duration = Duration::from_secs(2);

/// Re-issues `$call` (a fresh future expression, evaluated once per
/// attempt) under a 30s timeout, with one retry after a 2s backoff on
/// timeout or error (spec.md §4.5 "Failure handling"). Expands to an
/// `Option<(T, AgentUtterance)>` — `None` means the caller substitutes the
/// deterministic fallback.
macro_rules! retry_agent_call {
    ($game_id:expr, $call:expr) => {{
        let mut outcome = None;
        for attempt in 0..2u8 {
            match tokio::time::timeout(AGENT_TIMEOUT, $call).await {
                Ok(Ok(result)) => {
                    outcome = Some(result);
                    break;
                }
                Ok(Err(e)) => {
                    tracing::warn!(game = %$game_id, attempt, error = %e, "agent call failed")
                }
                Err(_) => tracing::warn!(game = %$game_id, attempt, "agent call timed out"),
            }
            if attempt == 0 {
                tokio::time::sleep(RETRY_BACKOFF).await;
            }
        }
        outcome
    }};
}

pub struct GameRunner {
    game_id: Uuid,
    game: Arc<parking_lot::RwLock<Game>>,
    bus: Arc<crate::bus::EventBus>,
    agents: HashMap<Uuid, Arc<dyn Agent>>,
    context: ContextManager,
    summarizer: Arc<dyn Summarizer>,
    pacing: Arc<PacingGate>,
    max_turns: u32,
}

impl GameRunner {
    pub fn new(
        game_id: Uuid,
        game: Arc<parking_lot::RwLock<Game>>,
        bus: Arc<crate::bus::EventBus>,
        agents: HashMap<Uuid, Arc<dyn Agent>>,
        summarizer: Arc<dyn Summarizer>,
        pacing: Arc<PacingGate>,
        max_turns: u32,
    ) -> Self {
        Self {
            game_id,
            game,
            bus,
            agents,
            context: ContextManager::new(),
            summarizer,
            pacing,
            max_turns,
        }
    }

    fn emit(&self, turn_number: u32, player_id: Option<Uuid>, kind: EventKind) {
        self.bus.emit(turn_number, player_id, kind);
    }

    fn view_of(&self, player_id: Uuid) -> GameView {
        build_view(&self.game.read().state, player_id)
    }

    fn agent(&self, player_id: Uuid) -> Arc<dyn Agent> {
        self.agents
            .get(&player_id)
            .cloned()
            .unwrap_or_else(|| panic!("no agent configured for player {player_id}"))
    }

    fn player_name(&self, player_id: Uuid) -> String {
        self.game
            .read()
            .state
            .get_player(player_id)
            .map(|p| p.name.clone())
            .unwrap_or_default()
    }

    fn is_insolvent(&self, player_id: Uuid) -> bool {
        crate::engine::bankruptcy::is_insolvent(&self.game.read().state, player_id)
    }

    fn space_price(&self, position: u8) -> u32 {
        crate::board::get_space(position).map(|s| s.price).unwrap_or(0)
    }

    /// Record an utterance into the shared context and emit its events
    /// (spec.md §4.6: "whenever any agent produces public_speech, the
    /// orchestrator calls record_public once").
    fn record_utterance(&mut self, turn: u32, player_id: Uuid, utterance: &AgentUtterance, fallback: bool) {
        let name = self.player_name(player_id);
        if !utterance.public_speech.is_empty() {
            self.context
                .record_public(turn, player_id, name.clone(), utterance.public_speech.clone());
            self.emit(
                turn,
                Some(player_id),
                EventKind::AgentSpoke { text: utterance.public_speech.clone(), fallback },
            );
        }
        if !utterance.private_thought.is_empty() {
            self.context.record_private(turn, player_id, name, utterance.private_thought.clone());
            self.emit(turn, Some(player_id), EventKind::AgentThought { text: utterance.private_thought.clone() });
        }
    }

    pub async fn run_to_completion(mut self) {
        let (seed, player_ids) = {
            let g = self.game.read();
            (g.seed, g.player_ids())
        };
        self.emit(0, None, EventKind::GameStarted { seed, player_ids });

        loop {
            if self.pacing.is_cancelled() {
                let turn_number = self.game.read().state.turn_number;
                self.emit(turn_number, None, EventKind::GameOver { reason: GameOverReason::Cancelled, winner: None });
                return;
            }

            let (is_over, turn_number) = {
                let g = self.game.read();
                (g.is_over(), g.state.turn_number)
            };
            if is_over || turn_number >= self.max_turns {
                let (winner, reason) = {
                    let g = self.game.read();
                    (
                        g.winner(),
                        if is_over { GameOverReason::LastPlayerStanding } else { GameOverReason::MaxTurnsReached },
                    )
                };
                self.emit(turn_number, None, EventKind::GameOver { reason, winner });
                return;
            }

            self.run_one_turn().await;

            self.pacing.tick().await;
            self.pacing.wait_if_paused().await;

            self.context.refresh_summary(self.game.read().state.turn_number, self.summarizer.as_ref()).await;
        }
    }

    async fn run_one_turn(&mut self) {
        let (current_id, turn_number, is_bankrupt) = {
            let g = self.game.read();
            (g.state.current_player().id, g.state.turn_number, g.state.current_player().is_bankrupt)
        };

        if is_bankrupt {
            self.game.write().end_turn();
            return;
        }

        self.emit(turn_number, Some(current_id), EventKind::TurnStarted);

        let in_jail = self.game.read().state.current_player().in_jail;
        if in_jail {
            self.resolve_jail_action(current_id, turn_number).await;
        }

        let still_in_jail = self.game.read().state.current_player().in_jail;
        if !still_in_jail {
            self.run_bundle_decision(current_id, turn_number, false).await;
        }

        let (roll_events, moved) = match self.game.write().roll() {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(game = %self.game_id, error = %e, "roll failed");
                self.game.write().end_turn();
                return;
            }
        };
        for event in roll_events {
            self.emit(turn_number, Some(current_id), event);
        }

        if !moved {
            self.game.write().end_turn();
            return;
        }

        self.resolve_landing_and_consequences(current_id, turn_number).await;

        self.run_bundle_decision(current_id, turn_number, true).await;

        let roll_again = self.game.read().may_roll_again();
        let mut g = self.game.write();
        if roll_again {
            g.state.turn_phase = crate::state::TurnPhase::PreRoll;
        } else {
            g.end_turn();
        }
    }

    async fn resolve_jail_action(&mut self, player_id: Uuid, turn_number: u32) {
        let view = self.view_of(player_id);
        let agent = self.agent(player_id);

        let outcome = retry_agent_call!(self.game_id, agent.decide_jail_action(&view, &self.context));

        let action = match outcome {
            Some((action, utterance)) => {
                self.record_utterance(turn_number, player_id, &utterance, false);
                action
            }
            None => {
                let player = self.game.read().state.get_player(player_id).cloned();
                player.map(|p| crate::agents::fallback::jail_action(&p)).unwrap_or(JailAction::RollDoubles)
            }
        };

        let result = match action {
            JailAction::PayFine => self.game.write().pay_jail_fine(),
            JailAction::UseCard => self.game.write().use_jail_card(),
            JailAction::RollDoubles => return,
        };
        match result {
            Ok(event) => self.emit(turn_number, Some(player_id), event),
            Err(e) => self.emit(turn_number, Some(player_id), EventKind::Diagnostic { message: format!("{e}") }),
        }
    }

    async fn run_bundle_decision(&mut self, player_id: Uuid, turn_number: u32, post_roll: bool) {
        let view = self.view_of(player_id);
        let agent = self.agent(player_id);

        let outcome = if post_roll {
            retry_agent_call!(self.game_id, agent.decide_post_roll(&view, &self.context))
        } else {
            retry_agent_call!(self.game_id, agent.decide_pre_roll(&view, &self.context))
        };

        let bundle: ActionBundle = match outcome {
            Some((bundle, utterance)) => {
                self.record_utterance(turn_number, player_id, &utterance, false);
                bundle
            }
            None => crate::agents::fallback::empty_bundle(),
        };

        self.apply_bundle(player_id, turn_number, bundle).await;
    }

    async fn apply_bundle(&mut self, player_id: Uuid, turn_number: u32, bundle: ActionBundle) {
        for build_action in bundle.builds {
            if build_action.sell {
                match self.game.write().sell_house(player_id, build_action.position) {
                    Ok(events) => {
                        for event in events {
                            self.emit(turn_number, Some(player_id), event);
                        }
                    }
                    Err(e) => self.emit(turn_number, Some(player_id), EventKind::Diagnostic { message: format!("{e}") }),
                }
            } else {
                match self.game.write().build_house(player_id, build_action.position) {
                    Ok(event) => self.emit(turn_number, Some(player_id), event),
                    Err(e) => self.emit(turn_number, Some(player_id), EventKind::Diagnostic { message: format!("{e}") }),
                }
            }
        }

        for mortgage_action in bundle.mortgages {
            let result = if mortgage_action.unmortgage {
                self.game.write().unmortgage(player_id, mortgage_action.position)
            } else {
                self.game.write().mortgage(player_id, mortgage_action.position)
            };
            match result {
                Ok(event) => self.emit(turn_number, Some(player_id), event),
                Err(e) => self.emit(turn_number, Some(player_id), EventKind::Diagnostic { message: format!("{e}") }),
            }
        }

        if let Some(proposal) = bundle.propose_trade {
            self.run_trade(turn_number, proposal).await;
        }

        self.check_and_resolve_debts(turn_number, None).await;
    }

    /// Propose a trade and get the receiving agent's answer (spec.md §5:
    /// the "other agent response" may run concurrently with nothing else in
    /// flight; engine mutation only happens once the answer is back).
    async fn run_trade(&mut self, turn_number: u32, proposal: TradeProposal) {
        let trade_id = Uuid::new_v4();
        self.emit(
            turn_number,
            Some(proposal.proposer),
            EventKind::TradeProposed { trade_id, proposer: proposal.proposer, receiver: proposal.receiver },
        );

        let view = self.view_of(proposal.receiver);
        let agent = self.agent(proposal.receiver);

        let outcome = retry_agent_call!(
            self.game_id,
            agent.respond_to_trade(&view, &self.context, trade_id, &proposal)
        );

        let response: TradeResponse = match outcome {
            Some((response, utterance)) => {
                self.record_utterance(turn_number, proposal.receiver, &utterance, false);
                response
            }
            None => TradeResponse { trade_id, accept: crate::agents::fallback::respond_to_trade() },
        };

        if !response.accept {
            self.emit(turn_number, Some(proposal.receiver), EventKind::TradeRejected { trade_id });
            return;
        }

        let result = {
            let mut g = self.game.write();
            crate::engine::trade::execute(&mut g.state, &proposal, trade_id)
        };
        match result {
            Ok(event) => self.emit(turn_number, Some(proposal.proposer), event),
            Err(e) => {
                self.emit(turn_number, Some(proposal.proposer), EventKind::Diagnostic { message: format!("{e}") })
            }
        }
    }

    async fn resolve_landing_and_consequences(&mut self, player_id: Uuid, turn_number: u32) {
        let outcome = self.game.write().resolve_landing();
        let (events, landing_outcome) = match outcome {
            Ok(result) => result,
            Err(e) => {
                self.emit(turn_number, Some(player_id), EventKind::Diagnostic { message: format!("{e}") });
                return;
            }
        };
        let creditor = events.iter().find_map(|e| match e {
            EventKind::RentPaid { owner, .. } => Some(*owner),
            _ => None,
        });
        for event in events {
            self.emit(turn_number, Some(player_id), event);
        }

        if let LandingOutcome::OfferPurchase { position, price } = landing_outcome {
            self.offer_purchase(player_id, turn_number, position, price).await;
        }

        self.check_and_resolve_debts(turn_number, creditor).await;
    }

    async fn offer_purchase(&mut self, player_id: Uuid, turn_number: u32, position: u8, price: u32) {
        let view = self.view_of(player_id);
        let agent = self.agent(player_id);

        let outcome = retry_agent_call!(self.game_id, agent.decide_buy_or_auction(&view, &self.context, position, price));

        let wants_to_buy = match outcome {
            Some((decision, utterance)) => {
                self.record_utterance(turn_number, player_id, &utterance, false);
                decision
            }
            None => {
                let player = self.game.read().state.get_player(player_id).cloned();
                player.map(|p| crate::agents::fallback::should_buy(&p, price)).unwrap_or(false)
            }
        };

        if wants_to_buy {
            let bought = self.game.write().buy_current_property(position);
            if let Ok(event) = bought {
                self.emit(turn_number, Some(player_id), event);
                return;
            }
        }

        self.run_auction(player_id, turn_number, position).await;
    }

    /// Sequential ascending auction (spec.md §4.4). Each round queries every
    /// still-active bidder in the fixed bidding order (spec.md §5 permits
    /// these independently, since no engine mutation happens until a bid is
    /// actually applied); a bid that is stale by the time it is applied
    /// (another bidder in this round already raised past it) is simply
    /// skipped rather than erroring.
    async fn run_auction(&mut self, decliner: Uuid, turn_number: u32, position: u8) {
        let start_event = self.game.write().start_auction(position);
        self.emit(turn_number, Some(decliner), start_event);

        loop {
            let active: Vec<Uuid> = {
                let g = self.game.read();
                g.auction.as_ref().map(|a| a.active_bidders()).unwrap_or_default()
            };
            if active.len() <= 1 {
                break;
            }
            let current_bid = self.game.read().auction.as_ref().map(|a| a.current_bid).unwrap_or(0);
            let price = self.space_price(position);

            for bidder in active {
                let view = self.view_of(bidder);
                let agent = self.agent(bidder);

                let outcome =
                    retry_agent_call!(self.game_id, agent.decide_auction_bid(&view, &self.context, position, current_bid));

                let amount = match outcome {
                    Some((amount, utterance)) => {
                        self.record_utterance(turn_number, bidder, &utterance, false);
                        amount
                    }
                    None => {
                        let player = self.game.read().state.get_player(bidder).cloned();
                        let profile = self.agents.get(&bidder).map(|a| a.identity().personality.profile());
                        match (player, profile) {
                            (Some(p), Some(profile)) => {
                                crate::agents::fallback::auction_bid(&p, price, current_bid, &profile)
                            }
                            _ => 0,
                        }
                    }
                };

                if amount == 0 {
                    if let Ok(event) = self.game.write().withdraw_bid(bidder) {
                        self.emit(turn_number, Some(bidder), event);
                    }
                } else if let Ok(event) = self.game.write().bid(bidder, amount) {
                    self.emit(turn_number, Some(bidder), event);
                }
            }

            if self.game.read().auction_is_over() {
                break;
            }
        }

        if let Ok(event) = self.game.write().resolve_auction() {
            self.emit(turn_number, None, event);
        }
    }

    /// Walk every active player for insolvency and run the four-stage
    /// resolver (spec.md §4.3) on each. `creditor` attributes the debt when
    /// it is known to be owed to exactly one other player (e.g. rent); for
    /// diffuse or bank-owed debt it is `None`.
    async fn check_and_resolve_debts(&mut self, turn_number: u32, creditor: Option<Uuid>) {
        let insolvent: Vec<Uuid> = {
            let g = self.game.read();
            g.state.players.iter().filter(|p| !p.is_bankrupt && p.cash < 0).map(|p| p.id).collect()
        };
        for debtor in insolvent {
            self.resolve_debt_for(turn_number, debtor, creditor).await;
        }
    }

    async fn resolve_debt_for(&mut self, turn_number: u32, debtor: Uuid, creditor: Option<Uuid>) {
        let auto_events = self.game.write().liquidate_for_debt(debtor);
        for event in auto_events {
            self.emit(turn_number, Some(debtor), event);
        }
        if !self.is_insolvent(debtor) {
            return;
        }

        let deficit = (-self.game.read().state.get_player(debtor).map(|p| p.cash).unwrap_or(0)) as u32;
        let view = self.view_of(debtor);
        let agent = self.agent(debtor);

        let outcome = retry_agent_call!(self.game_id, agent.resolve_debt(&view, &self.context, deficit, creditor));

        let plan: DebtPlan = match outcome {
            Some((plan, utterance)) => {
                self.record_utterance(turn_number, debtor, &utterance, false);
                plan
            }
            None => {
                let state_snapshot = self.game.read().state.clone();
                crate::agents::fallback::debt_plan(&state_snapshot, debtor)
            }
        };

        for position in &plan.mortgage {
            if let Ok(event) = self.game.write().mortgage(debtor, *position) {
                self.emit(turn_number, Some(debtor), event);
            }
            if !self.is_insolvent(debtor) {
                break;
            }
        }

        if self.is_insolvent(debtor) {
            for position in &plan.sell_buildings {
                if let Ok(events) = self.game.write().sell_house(debtor, *position) {
                    for event in events {
                        self.emit(turn_number, Some(debtor), event);
                    }
                }
                if !self.is_insolvent(debtor) {
                    break;
                }
            }
        }

        if self.is_insolvent(debtor) {
            if let Some(proposal) = plan.propose_trade {
                self.run_trade(turn_number, proposal).await;
            }
        }

        if self.is_insolvent(debtor) || plan.declare_bankruptcy {
            let events = self.game.write().declare_bankrupt(debtor, creditor);
            for event in events {
                self.emit(turn_number, Some(debtor), event);
            }
        }
    }
}
