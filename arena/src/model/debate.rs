//! Debate records: arguments, verdicts, outcomes and rounds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::finding::{Finding, Severity};

/// One advocate's position on a finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub position: String,
    pub reasoning: String,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counterpoints: Vec<String>,
}

impl Argument {
    /// Position, reasoning and counterpoints joined into one scoring surface.
    pub fn full_text(&self) -> String {
        let mut text = format!("{}\n{}", self.position, self.reasoning);
        for point in &self.counterpoints {
            text.push('\n');
            text.push_str(point);
        }
        text
    }
}

/// The arbiter's ruling on a single finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub adjusted_severity: Severity,
    pub rationale: String,
    pub action_required: bool,
    /// 1 is most urgent.
    pub priority: u32,
    pub negotiation_guidance: String,
}

/// Complete record of one finding's debate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateOutcome {
    pub id: String,
    /// Round that produced this outcome; 0 for quick-path rulings.
    pub round: u32,
    pub finding: Finding,
    pub devil_argument: Argument,
    pub angel_argument: Argument,
    pub verdict: Verdict,
    pub completed_at: DateTime<Utc>,
}

/// Direction of the arbiter's severity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityShift {
    Upgraded,
    Downgraded,
    Unchanged,
}

impl DebateOutcome {
    pub fn original_severity(&self) -> Severity {
        self.finding.severity
    }

    pub fn adjusted_severity(&self) -> Severity {
        self.verdict.adjusted_severity
    }

    /// Whether the verdict moved severity, and which way.
    pub fn shift(&self) -> SeverityShift {
        use std::cmp::Ordering;
        match self.adjusted_severity().cmp(&self.original_severity()) {
            Ordering::Greater => SeverityShift::Upgraded,
            Ordering::Less => SeverityShift::Downgraded,
            Ordering::Equal => SeverityShift::Unchanged,
        }
    }

    /// Compact summary line.
    pub fn summary_line(&self) -> String {
        format!(
            "[{}] {} {} → {} (priority {})",
            self.finding.id,
            self.finding.title,
            self.original_severity(),
            self.adjusted_severity(),
            self.verdict.priority
        )
    }
}

/// An ordered batch of findings debated together.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateRound {
    /// Round number (1-indexed).
    pub round: u32,
    pub findings: Vec<Finding>,
    pub outcomes: Vec<DebateOutcome>,
    pub completed: bool,
}

impl DebateRound {
    pub fn new(round: u32, findings: Vec<Finding>) -> Self {
        Self {
            round,
            findings,
            outcomes: Vec::new(),
            completed: false,
        }
    }
}
