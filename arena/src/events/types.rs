//! Lifecycle events published by the arena
//!
//! Purely informational; observers cannot influence the run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::advocate::Side;
use crate::model::Severity;

/// All arena lifecycle events, in the order a run emits them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArenaEvent {
    /// The arena accepted its input and planned the rounds
    ArenaStarted {
        total_findings: usize,
        selected_findings: usize,
        rounds_planned: u32,
        timestamp: DateTime<Utc>,
    },

    /// A round began
    RoundStarted {
        round: u32,
        finding_ids: Vec<String>,
        timestamp: DateTime<Utc>,
    },

    /// Debate on one finding began
    DebateStarted {
        round: u32,
        finding_id: String,
        title: String,
        severity: Severity,
        timestamp: DateTime<Utc>,
    },

    /// An advocate produced its argument
    ArgumentPresented {
        round: u32,
        finding_id: String,
        side: Side,
        position: String,
        timestamp: DateTime<Utc>,
    },

    /// The arbiter ruled on a finding
    VerdictIssued {
        round: u32,
        finding_id: String,
        original_severity: Severity,
        adjusted_severity: Severity,
        priority: u32,
        timestamp: DateTime<Utc>,
    },

    /// A round closed
    RoundCompleted {
        round: u32,
        outcomes: usize,
        timestamp: DateTime<Utc>,
    },

    /// The run finished
    ArenaCompleted {
        rounds: usize,
        outcomes: usize,
        overall_risk: Severity,
        timestamp: DateTime<Utc>,
    },
}

impl ArenaEvent {
    /// Get the event type as a string
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ArenaStarted { .. } => "arena_started",
            Self::RoundStarted { .. } => "round_started",
            Self::DebateStarted { .. } => "debate_started",
            Self::ArgumentPresented { .. } => "argument_presented",
            Self::VerdictIssued { .. } => "verdict_issued",
            Self::RoundCompleted { .. } => "round_completed",
            Self::ArenaCompleted { .. } => "arena_completed",
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::ArenaStarted { timestamp, .. }
            | Self::RoundStarted { timestamp, .. }
            | Self::DebateStarted { timestamp, .. }
            | Self::ArgumentPresented { timestamp, .. }
            | Self::VerdictIssued { timestamp, .. }
            | Self::RoundCompleted { timestamp, .. }
            | Self::ArenaCompleted { timestamp, .. } => *timestamp,
        }
    }

    /// Get the round number if applicable
    pub fn round(&self) -> Option<u32> {
        match self {
            Self::RoundStarted { round, .. }
            | Self::DebateStarted { round, .. }
            | Self::ArgumentPresented { round, .. }
            | Self::VerdictIssued { round, .. }
            | Self::RoundCompleted { round, .. } => Some(*round),
            Self::ArenaStarted { .. } | Self::ArenaCompleted { .. } => None,
        }
    }

    /// Get the finding ID if applicable
    pub fn finding_id(&self) -> Option<&str> {
        match self {
            Self::DebateStarted { finding_id, .. }
            | Self::ArgumentPresented { finding_id, .. }
            | Self::VerdictIssued { finding_id, .. } => Some(finding_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = ArenaEvent::VerdictIssued {
            round: 1,
            finding_id: "F-1".to_string(),
            original_severity: Severity::High,
            adjusted_severity: Severity::Critical,
            priority: 1,
            timestamp: Utc::now(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"verdict_issued\""));
        assert!(json.contains("\"adjusted_severity\":\"critical\""));

        let parsed: ArenaEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_event_accessors() {
        let event = ArenaEvent::ArgumentPresented {
            round: 2,
            finding_id: "F-7".to_string(),
            side: Side::Angel,
            position: "manageable".to_string(),
            timestamp: Utc::now(),
        };
        assert_eq!(event.event_type(), "argument_presented");
        assert_eq!(event.round(), Some(2));
        assert_eq!(event.finding_id(), Some("F-7"));

        let event = ArenaEvent::ArenaCompleted {
            rounds: 0,
            outcomes: 0,
            overall_risk: Severity::Low,
            timestamp: Utc::now(),
        };
        assert_eq!(event.round(), None);
        assert_eq!(event.finding_id(), None);
    }
}
