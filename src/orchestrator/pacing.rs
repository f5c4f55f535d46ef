//! Pacing gate: the pause/resume/speed contract of spec.md §6.2, realized as
//! a small piece of shared, atomically-updated state the turn loop consults
//! between phases (spec §5 "Pause/resume... a gate the orchestrator must
//! pass between phases").

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use tokio::sync::Notify;

/// Base per-phase delay at `speed_multiplier == 1.0`. Scaled down as the
/// multiplier increases, per spec.md §4.7 "pacing delay scaled by a base
/// delay".
const BASE_DELAY: Duration = Duration::from_millis(400);

pub struct PacingGate {
    speed_bits: AtomicU32,
    paused: AtomicBool,
    resumed: Notify,
    cancelled: AtomicBool,
}

impl PacingGate {
    pub fn new(speed_multiplier: f32) -> Self {
        Self {
            speed_bits: AtomicU32::new(speed_multiplier.to_bits()),
            paused: AtomicBool::new(false),
            resumed: Notify::new(),
            cancelled: AtomicBool::new(false),
        }
    }

    pub fn speed_multiplier(&self) -> f32 {
        f32::from_bits(self.speed_bits.load(Ordering::Relaxed))
    }

    /// Clamps into the contractual [0.25, 5.0] range (spec.md §6.2).
    pub fn set_speed(&self, multiplier: f32) {
        let clamped = crate::config::GameConfig::clamp_speed(multiplier);
        self.speed_bits.store(clamped.to_bits(), Ordering::Relaxed);
    }

    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
        self.resumed.notify_waiters();
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.resumed.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Block until resumed (or cancelled). In-flight agent calls are never
    /// interrupted by this — callers only invoke it between phases.
    pub async fn wait_if_paused(&self) {
        while self.is_paused() && !self.is_cancelled() {
            self.resumed.notified().await;
        }
    }

    /// The delay to apply once per END_TURN, scaled by `1 / speed_multiplier`.
    pub async fn tick(&self) {
        let multiplier = self.speed_multiplier().max(0.01);
        let scaled = BASE_DELAY.div_f32(multiplier);
        tokio::time::sleep(scaled).await;
    }
}
