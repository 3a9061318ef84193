//! Observer sinks for arena events
//!
//! The arena calls [`ArenaObserver::on_event`] synchronously and ignores
//! whatever happens inside; sinks must not block.

use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tracing::{debug, info};

use super::types::ArenaEvent;

/// Channel capacity for broadcast
const CHANNEL_CAPACITY: usize = 256;

/// Receives arena lifecycle events
pub trait ArenaObserver: Send + Sync {
    fn on_event(&self, event: &ArenaEvent);
}

/// Shared reference to an observer
pub type SharedObserver = Arc<dyn ArenaObserver>;

/// Logs every event through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ArenaObserver for TracingObserver {
    fn on_event(&self, event: &ArenaEvent) {
        match event {
            ArenaEvent::ArenaStarted {
                total_findings,
                selected_findings,
                rounds_planned,
                ..
            } => info!(
                total_findings,
                selected_findings, rounds_planned, "Debate arena started"
            ),
            ArenaEvent::RoundStarted {
                round, finding_ids, ..
            } => info!(round, findings = finding_ids.len(), "Round started"),
            ArenaEvent::DebateStarted {
                round,
                finding_id,
                severity,
                ..
            } => debug!(round, finding_id = %finding_id, %severity, "Debate started"),
            ArenaEvent::ArgumentPresented {
                finding_id, side, ..
            } => debug!(finding_id = %finding_id, %side, "Argument presented"),
            ArenaEvent::VerdictIssued {
                finding_id,
                original_severity,
                adjusted_severity,
                priority,
                ..
            } => info!(
                finding_id = %finding_id,
                original = %original_severity,
                adjusted = %adjusted_severity,
                priority,
                "Verdict issued"
            ),
            ArenaEvent::RoundCompleted {
                round, outcomes, ..
            } => info!(round, outcomes, "Round completed"),
            ArenaEvent::ArenaCompleted {
                rounds,
                outcomes,
                overall_risk,
                ..
            } => info!(rounds, outcomes, overall_risk = %overall_risk, "Debate arena completed"),
        }
    }
}

/// Fans events out over a Tokio broadcast channel
pub struct BroadcastObserver {
    sender: broadcast::Sender<ArenaEvent>,
}

impl BroadcastObserver {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribe to receive events
    pub fn subscribe(&self) -> broadcast::Receiver<ArenaEvent> {
        self.sender.subscribe()
    }

    /// Get the number of current subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ArenaObserver for BroadcastObserver {
    fn on_event(&self, event: &ArenaEvent) {
        // No receivers is fine
        if self.sender.send(event.clone()).is_err() {
            debug!(event_type = event.event_type(), "Event dropped (no receivers)");
        }
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Debug, Default)]
pub struct MemoryObserver {
    events: Mutex<Vec<ArenaEvent>>,
}

impl MemoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<ArenaEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Recorded event types, in order
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events().iter().map(ArenaEvent::event_type).collect()
    }
}

impl ArenaObserver for MemoryObserver {
    fn on_event(&self, event: &ArenaEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
