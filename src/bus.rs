//! Per-game event bus: sequence numbering + fan-out to subscribers
//!
//! One bus per game, mutated only by the orchestrator task (spec §5). The
//! bounded per-subscriber channel gives backpressure: a subscriber that
//! falls behind is dropped rather than stalling the game (spec §5
//! "Backpressure").

use dashmap::DashMap;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::events::{Event, EventKind};

/// Bounded buffer size per subscriber before it is considered slow and
/// dropped (spec §5).
pub const SUBSCRIBER_BUFFER: usize = 256;

pub struct EventBus {
    next_sequence: std::sync::atomic::AtomicU64,
    log: parking_lot::RwLock<Vec<Event>>,
    subscribers: DashMap<Uuid, mpsc::Sender<Event>>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            next_sequence: std::sync::atomic::AtomicU64::new(0),
            log: parking_lot::RwLock::new(Vec::new()),
            subscribers: DashMap::new(),
        }
    }

    /// Append an event (assigning the next sequence number) and fan it out.
    /// This is the only way an `Event` comes into existence — callers never
    /// construct sequence numbers themselves.
    pub fn emit(&self, turn_number: u32, player_id: Option<Uuid>, data: EventKind) -> Event {
        let sequence = self
            .next_sequence
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let event = Event {
            sequence,
            turn_number,
            player_id,
            data,
        };

        self.log.write().push(event.clone());

        let mut dead = Vec::new();
        for entry in self.subscribers.iter() {
            if entry.value().try_send(event.clone()).is_err() {
                dead.push(*entry.key());
            }
        }
        for id in dead {
            tracing::warn!(subscriber = %id, "dropping slow event subscriber");
            self.subscribers.remove(&id);
        }

        event
    }

    pub fn subscribe(&self) -> (Uuid, mpsc::Receiver<Event>) {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::channel(SUBSCRIBER_BUFFER);
        self.subscribers.insert(id, tx);
        (id, rx)
    }

    pub fn unsubscribe(&self, id: Uuid) {
        self.subscribers.remove(&id);
    }

    /// Events with sequence number `>= since`, in order.
    pub fn events_since(&self, since: u64) -> Vec<Event> {
        self.log
            .read()
            .iter()
            .filter(|e| e.sequence >= since)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.log.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_strictly_increases() {
        let bus = EventBus::new();
        let e1 = bus.emit(0, None, EventKind::TurnStarted);
        let e2 = bus.emit(0, None, EventKind::TurnStarted);
        assert!(e2.sequence > e1.sequence);
    }

    #[tokio::test]
    async fn subscriber_receives_events_in_order() {
        let bus = EventBus::new();
        let (_id, mut rx) = bus.subscribe();
        bus.emit(0, None, EventKind::TurnStarted);
        bus.emit(0, None, EventKind::DiceRolled { d1: 1, d2: 2, is_doubles: false });

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert!(second.sequence > first.sequence);
    }

    #[test]
    fn events_since_filters_correctly() {
        let bus = EventBus::new();
        for _ in 0..5 {
            bus.emit(0, None, EventKind::TurnStarted);
        }
        let since_2 = bus.events_since(2);
        assert_eq!(since_2.len(), 3);
        assert!(since_2.iter().all(|e| e.sequence >= 2));
    }
}
