//! Application and per-game configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::personality::PersonalityId;

/// Server-level configuration, loaded from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Shared outbound endpoint/key for HTTP-backed agents (spec §4.5). An
    /// `AgentConfig` whose `model_identifier` is prefixed `provider_a:` or
    /// `provider_b:` picks the matching adapter; everything else, or a
    /// missing endpoint, falls back to the deterministic `MockAgent`.
    pub llm_endpoint: Option<String>,
    pub llm_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".into())
                .parse()?,
            llm_endpoint: std::env::var("LLM_ENDPOINT").ok(),
            llm_api_key: std::env::var("LLM_API_KEY").ok(),
        })
    }
}

/// Per-agent configuration (spec §6.4).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub model_identifier: String,
    pub temperature: f32,
    pub personality_id: PersonalityId,
}

/// Per-game configuration (spec §6.4).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Omitted (`None`) means a system-generated seed.
    pub seed: Option<u64>,
    pub max_turns: u32,
    pub num_players: u8,
    pub speed_multiplier: f32,
    pub agents: Vec<AgentConfig>,
}

impl GameConfig {
    /// Clamp `speed_multiplier` into the contractual [0.25, 5.0] range.
    pub fn clamp_speed(multiplier: f32) -> f32 {
        multiplier.clamp(0.25, 5.0)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_turns: 1000,
            num_players: 4,
            speed_multiplier: 1.0,
            agents: Vec::new(),
        }
    }
}
