//! Debate statistics, computed once over the full outcome set.

use serde::{Deserialize, Serialize};

use crate::model::{DebateOutcome, SeverityShift};

/// Aggregate counts and per-side averages for one arena run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateStatistics {
    pub total_findings: usize,
    pub debated_findings: usize,
    /// Severity upgrades.
    pub devil_wins: usize,
    /// Severity downgrades.
    pub angel_wins: usize,
    pub ties: usize,
    /// Mean of `adjusted weight / 4` over outcomes.
    pub avg_devil_score: f64,
    /// Mean of `(4 - adjusted weight) / 4` over outcomes.
    pub avg_angel_score: f64,
}

impl DebateStatistics {
    /// Compute statistics for `outcomes` out of `total_findings` supplied.
    ///
    /// The per-side averages are derived from the adjusted severity weight,
    /// not from the arbiter's argument scores.
    pub fn compute(outcomes: &[DebateOutcome], total_findings: usize) -> Self {
        let mut stats = Self {
            total_findings,
            debated_findings: outcomes.len(),
            ..Self::default()
        };

        let mut devil_sum = 0.0;
        let mut angel_sum = 0.0;
        for outcome in outcomes {
            match outcome.shift() {
                SeverityShift::Upgraded => stats.devil_wins += 1,
                SeverityShift::Downgraded => stats.angel_wins += 1,
                SeverityShift::Unchanged => stats.ties += 1,
            }
            let weight = f64::from(outcome.adjusted_severity().weight());
            devil_sum += weight / 4.0;
            angel_sum += (4.0 - weight) / 4.0;
        }

        if !outcomes.is_empty() {
            let n = outcomes.len() as f64;
            stats.avg_devil_score = devil_sum / n;
            stats.avg_angel_score = angel_sum / n;
        }
        stats
    }

    /// Compact status line.
    pub fn summary_line(&self) -> String {
        format!(
            "{}/{} debated | devil {} | angel {} | ties {}",
            self.debated_findings, self.total_findings, self.devil_wins, self.angel_wins, self.ties
        )
    }
}
