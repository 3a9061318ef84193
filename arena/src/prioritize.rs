//! Finding prioritization, selection and round batching.

use serde::{Deserialize, Serialize};

use crate::model::Finding;

/// Sort key used to decide which findings are debated first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrioritizeBy {
    /// Severity weight only.
    #[default]
    Severity,
    /// Fixed category priority table.
    Category,
    /// `severity weight * 10 + category priority`.
    Mixed,
}

impl PrioritizeBy {
    /// Priority key for a finding (higher is debated first).
    pub fn key(self, finding: &Finding) -> u32 {
        let severity = u32::from(finding.severity.weight());
        let category = finding.category.priority();
        match self {
            Self::Severity => severity,
            Self::Category => category,
            Self::Mixed => severity * 10 + category,
        }
    }
}

impl std::fmt::Display for PrioritizeBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Severity => write!(f, "severity"),
            Self::Category => write!(f, "category"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

impl std::str::FromStr for PrioritizeBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "severity" => Ok(Self::Severity),
            "category" => Ok(Self::Category),
            "mixed" => Ok(Self::Mixed),
            other => Err(format!("unknown prioritization: {}", other)),
        }
    }
}

/// Sort descending by key. Equal keys keep input order.
pub fn prioritize(findings: &[Finding], by: PrioritizeBy) -> Vec<Finding> {
    let mut sorted = findings.to_vec();
    // sort_by_key is stable
    sorted.sort_by_key(|f| std::cmp::Reverse(by.key(f)));
    sorted
}

/// Split prioritized findings into the debated head and the untouched tail.
pub fn select(prioritized: Vec<Finding>, capacity: usize) -> (Vec<Finding>, Vec<Finding>) {
    let mut selected = prioritized;
    let rest = if selected.len() > capacity {
        selected.split_off(capacity)
    } else {
        Vec::new()
    };
    (selected, rest)
}

/// Batch selected findings into at most `max_rounds` rounds of
/// `per_round` findings each; trailing empty batches are dropped.
pub fn batch(selected: &[Finding], max_rounds: u32, per_round: usize) -> Vec<Vec<Finding>> {
    if per_round == 0 {
        return Vec::new();
    }
    selected
        .chunks(per_round)
        .take(max_rounds as usize)
        .map(|chunk| chunk.to_vec())
        .collect()
}
