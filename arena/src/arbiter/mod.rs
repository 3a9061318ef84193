//! Arbiter, the neutral judge of each debate.
//!
//! Scores both arguments on four weighted criteria, moves the finding's
//! severity at most one step toward the stronger side, and emits a verdict
//! with rationale and negotiation guidance. Deliberation is deterministic:
//! the same finding and arguments always yield the same verdict.

pub mod scoring;
pub mod synthesis;
pub mod verdict;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::model::{Argument, DebateOutcome, Finding, Verdict};

pub use scoring::ArgumentScore;
pub use synthesis::{synthesize_verdicts, ApprovalRecommendation, SeverityCounts, Synthesis};

/// Verdict together with the scores that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliberation {
    pub devil_score: ArgumentScore,
    pub angel_score: ArgumentScore,
    pub verdict: Verdict,
}

impl Deliberation {
    /// Devil total minus angel total.
    pub fn score_diff(&self) -> f64 {
        self.devil_score.total - self.angel_score.total
    }
}

/// Neutral judge of a single finding's debate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arbiter;

impl Arbiter {
    pub fn new() -> Self {
        Self
    }

    /// Score both sides and derive the verdict.
    pub fn deliberate(&self, finding: &Finding, devil: &Argument, angel: &Argument) -> Deliberation {
        let devil_score = ArgumentScore::of(devil);
        let angel_score = ArgumentScore::of(angel);
        let verdict = verdict::assemble(finding, angel, devil_score.total, angel_score.total);

        debug!(
            finding_id = %finding.id,
            devil = devil_score.total,
            angel = angel_score.total,
            original = %finding.severity,
            adjusted = %verdict.adjusted_severity,
            "Deliberation complete"
        );

        Deliberation {
            devil_score,
            angel_score,
            verdict,
        }
    }

    /// Deliberate and bind the result into an outcome record.
    pub fn judge(
        &self,
        finding: &Finding,
        devil: Argument,
        angel: Argument,
        round: u32,
    ) -> DebateOutcome {
        let deliberation = self.deliberate(finding, &devil, &angel);
        DebateOutcome {
            id: Uuid::new_v4().to_string(),
            round,
            finding: finding.clone(),
            devil_argument: devil,
            angel_argument: angel,
            verdict: deliberation.verdict,
            completed_at: Utc::now(),
        }
    }
}
