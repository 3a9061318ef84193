//! Cross-outcome synthesis: overall risk and approval recommendation.

use serde::{Deserialize, Serialize};

use crate::model::{DebateOutcome, Severity};

/// Maximum key actions surfaced in a synthesis.
const MAX_KEY_ACTIONS: usize = 5;

/// Whether the contract can be signed as reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalRecommendation {
    Approve,
    ApproveWithConditions,
    Reject,
}

impl std::fmt::Display for ApprovalRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approve => write!(f, "approve"),
            Self::ApproveWithConditions => write!(f, "approve_with_conditions"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// Tally of adjusted severities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }

    /// Highest level with a non-zero count; low when empty.
    pub fn highest(&self) -> Severity {
        if self.critical > 0 {
            Severity::Critical
        } else if self.high > 0 {
            Severity::High
        } else if self.medium > 0 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    /// Deterministic approval table.
    pub fn recommendation(&self) -> ApprovalRecommendation {
        if self.critical > 0 {
            ApprovalRecommendation::Reject
        } else if self.high > 0 || self.medium > 0 {
            ApprovalRecommendation::ApproveWithConditions
        } else {
            ApprovalRecommendation::Approve
        }
    }
}

/// Aggregate view over every adjudicated finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synthesis {
    pub overall_risk: Severity,
    pub approval_recommendation: ApprovalRecommendation,
    pub key_actions: Vec<String>,
    pub summary: String,
    pub severity_counts: SeverityCounts,
}

/// Aggregate all outcomes into one recommendation.
pub fn synthesize_verdicts(outcomes: &[DebateOutcome]) -> Synthesis {
    let mut counts = SeverityCounts::default();
    for outcome in outcomes {
        counts.record(outcome.adjusted_severity());
    }

    let overall_risk = counts.highest();
    let approval_recommendation = counts.recommendation();

    let key_actions: Vec<String> = outcomes
        .iter()
        .filter(|o| o.verdict.action_required)
        .take(MAX_KEY_ACTIONS)
        .filter_map(|o| o.verdict.negotiation_guidance.lines().next())
        .map(str::to_string)
        .collect();

    let summary = render_summary(&counts, overall_risk, approval_recommendation);

    Synthesis {
        overall_risk,
        approval_recommendation,
        key_actions,
        summary,
        severity_counts: counts,
    }
}

fn render_summary(
    counts: &SeverityCounts,
    overall: Severity,
    recommendation: ApprovalRecommendation,
) -> String {
    if counts.total() == 0 {
        return format!(
            "No findings were debated. Overall risk: {}. Recommendation: {}.",
            overall, recommendation
        );
    }
    format!(
        "{} findings debated: {} critical, {} high, {} medium, {} low. Overall risk: {}. Recommendation: {}.",
        counts.total(),
        counts.critical,
        counts.high,
        counts.medium,
        counts.low,
        overall,
        recommendation
    )
}
