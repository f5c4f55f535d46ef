//! Shared Context Manager (spec §4.6) — "the single most important
//! correction to a naive design". One instance per game, shared by every
//! agent, owning the public broadcast log, each agent's private log, and a
//! cached prefix summary of the public log re-extended in batches of 10
//! turns.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

pub const VERBATIM_WINDOW: u32 = 10;
pub const PRIVATE_TAIL: usize = 5;
pub const SUMMARY_BATCH: u32 = 10;

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub turn: u32,
    pub agent_id: Uuid,
    pub agent_name: String,
    pub text: String,
}

/// Produces a cheap, deterministic-temperature summary of a prefix of the
/// public log. Implementors must be infallible in the sense that a failure
/// degrades to truncation rather than propagating (spec §4.6).
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, entries: &[LogEntry]) -> Option<String>;
}

/// Summarizer that truncates instead of calling a model — the fallback path
/// itself, and the only summarizer used in tests.
pub struct TruncatingSummarizer {
    pub max_chars: usize,
}

impl Default for TruncatingSummarizer {
    fn default() -> Self {
        Self { max_chars: 800 }
    }
}

#[async_trait]
impl Summarizer for TruncatingSummarizer {
    async fn summarize(&self, entries: &[LogEntry]) -> Option<String> {
        if entries.is_empty() {
            return None;
        }
        let mut joined = entries
            .iter()
            .map(|e| format!("[T{} {}] {}", e.turn, e.agent_name, e.text))
            .collect::<Vec<_>>()
            .join(" ");
        joined.truncate(self.max_chars);
        Some(joined)
    }
}

struct CachedSummary {
    /// Summary covers turns strictly before this.
    covers_up_to_turn: u32,
    text: String,
}

pub struct ContextManager {
    public_log: Vec<LogEntry>,
    private_logs: HashMap<Uuid, Vec<LogEntry>>,
    summary: parking_lot::RwLock<Option<CachedSummary>>,
}

impl ContextManager {
    pub fn new() -> Self {
        Self {
            public_log: Vec::new(),
            private_logs: HashMap::new(),
            summary: parking_lot::RwLock::new(None),
        }
    }

    pub fn record_public(&mut self, turn: u32, agent_id: Uuid, agent_name: String, text: String) {
        if text.is_empty() {
            return;
        }
        self.public_log.push(LogEntry {
            turn,
            agent_id,
            agent_name,
            text,
        });
    }

    pub fn record_private(&mut self, turn: u32, agent_id: Uuid, agent_name: String, text: String) {
        if text.is_empty() {
            return;
        }
        self.private_logs
            .entry(agent_id)
            .or_default()
            .push(LogEntry {
                turn,
                agent_id,
                agent_name,
                text,
            });
    }

    /// Verbatim entries within the sliding window (spec §4.6: `turn >=
    /// current_turn - 10`).
    pub fn public_window(&self, current_turn: u32) -> Vec<LogEntry> {
        let floor = current_turn.saturating_sub(VERBATIM_WINDOW);
        self.public_log
            .iter()
            .filter(|e| e.turn >= floor)
            .cloned()
            .collect()
    }

    /// The cached prefix summary, if one has been produced for this window.
    pub fn public_summary(&self, current_turn: u32) -> Option<String> {
        let floor = current_turn.saturating_sub(VERBATIM_WINDOW);
        let guard = self.summary.read();
        guard
            .as_ref()
            .filter(|c| c.covers_up_to_turn >= floor.saturating_sub(1) || floor == 0)
            .map(|c| c.text.clone())
    }

    pub fn private_tail(&self, agent_id: Uuid) -> Vec<LogEntry> {
        self.private_logs
            .get(&agent_id)
            .map(|log| {
                let start = log.len().saturating_sub(PRIVATE_TAIL);
                log[start..].to_vec()
            })
            .unwrap_or_default()
    }

    /// Re-extend the cached summary to cover everything older than the
    /// current sliding window, in batches of `SUMMARY_BATCH` turns, calling
    /// `summarizer` only when a full new batch has accumulated since the
    /// last summary.
    pub async fn refresh_summary(&mut self, current_turn: u32, summarizer: &dyn Summarizer) {
        let floor = current_turn.saturating_sub(VERBATIM_WINDOW);
        let already_covers = self.summary.read().as_ref().map(|c| c.covers_up_to_turn).unwrap_or(0);
        if floor < already_covers + SUMMARY_BATCH {
            return;
        }
        let prefix: Vec<LogEntry> = self
            .public_log
            .iter()
            .filter(|e| e.turn < floor)
            .cloned()
            .collect();
        if let Some(text) = summarizer.summarize(&prefix).await {
            *self.summary.write() = Some(CachedSummary {
                covers_up_to_turn: floor,
                text,
            });
        }
    }
}

impl Default for ContextManager {
    fn default() -> Self {
        Self::new()
    }
}
