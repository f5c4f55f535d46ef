//! Process-wide game registry (spec.md §6.2 control surface), keyed by
//! `game_id`. Replaces the teacher's Redis-backed `GameEngine::get_game` /
//! `save_game` pair with an in-memory `DashMap` of live handles — spec.md
//! §6.3 explicitly drops persistence from the core.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::agents::adapters::http::{HttpAgentConfig, HttpClient};
use crate::agents::adapters::mock::MockAgent;
use crate::agents::adapters::provider_a::ProviderAAgent;
use crate::agents::adapters::provider_b::ProviderBAgent;
use crate::agents::{Agent, AgentIdentity};
use crate::bus::EventBus;
use crate::config::{AgentConfig, GameConfig};
use crate::context::TruncatingSummarizer;
use crate::engine::game::Game;
use crate::error::{AppError, AppResult};
use crate::events::Event;
use crate::orchestrator::pacing::PacingGate;
use crate::orchestrator::GameRunner;

/// Everything the control surface needs to talk to a running game, without
/// reaching into the orchestrator task itself.
pub struct GameHandle {
    pub game: Arc<parking_lot::RwLock<Game>>,
    pub bus: Arc<EventBus>,
    pub pacing: Arc<PacingGate>,
}

impl GameHandle {
    pub fn get_state(&self) -> Game {
        self.game.read().clone()
    }

    pub fn get_events(&self, since_sequence: u64) -> Vec<Event> {
        self.bus.events_since(since_sequence)
    }

    pub fn pause(&self) {
        self.pacing.pause();
    }

    pub fn resume(&self) {
        self.pacing.resume();
    }

    pub fn set_speed(&self, multiplier: f32) {
        self.pacing.set_speed(multiplier);
    }

    pub fn subscribe(&self) -> (Uuid, tokio::sync::mpsc::Receiver<Event>) {
        self.bus.subscribe()
    }
}

#[derive(Default)]
pub struct Registry {
    games: DashMap<Uuid, Arc<GameHandle>>,
    http_config: Option<HttpAgentConfig>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry whose HTTP-backed agents (model_identifier prefixed
    /// `provider_a:` / `provider_b:`) call out through `http_config` rather
    /// than falling back to `MockAgent`.
    pub fn with_http_config(http_config: HttpAgentConfig) -> Self {
        Self {
            games: DashMap::new(),
            http_config: Some(http_config),
        }
    }

    fn build_agent(&self, id: Uuid, agent_config: &AgentConfig) -> Arc<dyn Agent> {
        let identity = AgentIdentity {
            id,
            name: agent_config.name.clone(),
            model_identifier: agent_config.model_identifier.clone(),
            temperature: agent_config.temperature,
            personality: agent_config.personality_id,
        };

        let Some(http_config) = self.http_config.clone() else {
            return Arc::new(MockAgent::new(id, agent_config.name.clone(), agent_config.personality_id));
        };

        if let Some(model) = agent_config.model_identifier.strip_prefix("provider_a:") {
            let mut identity = identity;
            identity.model_identifier = model.to_string();
            Arc::new(ProviderAAgent::new(identity, HttpClient::new(http_config)))
        } else if let Some(model) = agent_config.model_identifier.strip_prefix("provider_b:") {
            let mut identity = identity;
            identity.model_identifier = model.to_string();
            Arc::new(ProviderBAgent::new(identity, HttpClient::new(http_config)))
        } else {
            Arc::new(MockAgent::new(id, agent_config.name.clone(), agent_config.personality_id))
        }
    }

    /// Build a fresh `Game`, wire up each configured agent to its backend
    /// (`build_agent`), and spawn its orchestrator task.
    pub fn start_game(&self, config: GameConfig) -> AppResult<Uuid> {
        if config.agents.is_empty() {
            return Err(AppError::BadRequest("at least one agent is required".into()));
        }

        let player_specs: Vec<(Uuid, String)> = config
            .agents
            .iter()
            .map(|a| (Uuid::new_v4(), a.name.clone()))
            .collect();

        let mut agents: HashMap<Uuid, Arc<dyn Agent>> = HashMap::new();
        for ((id, _), agent_config) in player_specs.iter().zip(config.agents.iter()) {
            agents.insert(*id, self.build_agent(*id, agent_config));
        }

        let game = Game::new(player_specs, config.seed, 1500);
        let game_id = Uuid::new_v4();
        let game = Arc::new(parking_lot::RwLock::new(game));
        let bus = Arc::new(EventBus::new());
        let pacing = Arc::new(PacingGate::new(GameConfig::clamp_speed(config.speed_multiplier)));

        let handle = Arc::new(GameHandle {
            game: game.clone(),
            bus: bus.clone(),
            pacing: pacing.clone(),
        });
        self.games.insert(game_id, handle);

        let runner = GameRunner::new(
            game_id,
            game,
            bus,
            agents,
            Arc::new(TruncatingSummarizer::default()),
            pacing,
            config.max_turns,
        );
        tokio::spawn(runner.run_to_completion());

        Ok(game_id)
    }

    pub fn get(&self, game_id: Uuid) -> AppResult<Arc<GameHandle>> {
        self.games
            .get(&game_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound(format!("no such game: {game_id}")))
    }

    pub fn cancel(&self, game_id: Uuid) -> AppResult<()> {
        let handle = self.get(game_id)?;
        handle.pacing.cancel();
        Ok(())
    }
}
