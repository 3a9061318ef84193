//! Input records supplied by the document analyzers.
//!
//! Findings are immutable once created; severity adjustments made by the
//! arbiter live on the verdict, never on the finding itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ArenaResult;

/// Four-level ordinal severity lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All levels, lowest first.
    pub const ALL: [Severity; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Numeric weight: 1 (low) through 4 (critical).
    pub fn weight(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// One step up the lattice, capped at critical.
    pub fn step_up(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High | Self::Critical => Self::Critical,
        }
    }

    /// One step down the lattice, floored at low.
    pub fn step_down(self) -> Self {
        match self {
            Self::Low | Self::Medium => Self::Low,
            Self::High => Self::Medium,
            Self::Critical => Self::High,
        }
    }

    /// Whether a finding at this level needs action before signing.
    pub fn requires_action(self) -> bool {
        self != Self::Low
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

/// Fixed set of risk categories emitted by the analyzers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    LegalRisk,
    ComplianceRisk,
    FinancialRisk,
    OperationalRisk,
    TechnicalRisk,
    BusinessRisk,
}

impl RiskCategory {
    /// Priority used when ordering findings by category (higher first).
    pub fn priority(self) -> u32 {
        match self {
            Self::LegalRisk => 6,
            Self::ComplianceRisk => 5,
            Self::FinancialRisk => 4,
            Self::OperationalRisk => 3,
            Self::TechnicalRisk => 2,
            Self::BusinessRisk => 1,
        }
    }

    /// Boost applied to verdict priority, in half-steps (0, 1 or 2 → 0, 0.5, 1.0).
    pub fn boost_half_steps(self) -> u32 {
        match self {
            Self::LegalRisk | Self::ComplianceRisk => 2,
            Self::FinancialRisk => 1,
            Self::OperationalRisk | Self::TechnicalRisk | Self::BusinessRisk => 0,
        }
    }

    /// Boost applied to verdict priority.
    pub fn boost(self) -> f64 {
        f64::from(self.boost_half_steps()) / 2.0
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LegalRisk => write!(f, "legal_risk"),
            Self::ComplianceRisk => write!(f, "compliance_risk"),
            Self::FinancialRisk => write!(f, "financial_risk"),
            Self::OperationalRisk => write!(f, "operational_risk"),
            Self::TechnicalRisk => write!(f, "technical_risk"),
            Self::BusinessRisk => write!(f, "business_risk"),
        }
    }
}

/// A single clause-level risk observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: String,
    /// Analyzer that produced the finding.
    pub persona: String,
    pub clause_ref: String,
    pub category: RiskCategory,
    pub severity: Severity,
    pub title: String,
    pub issue: String,
    pub impact: String,
    pub recommendation: String,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_findings: Option<Vec<String>>,
}

/// One analyzer's complete pass over a contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaAnalysis {
    pub persona: String,
    pub timestamp: DateTime<Utc>,
    pub findings: Vec<Finding>,
    pub summary: String,
    pub overall_risk: Severity,
    pub confidence: f64,
}

/// Flatten analyzer passes into one finding list, preserving order.
pub fn flatten_analyses(analyses: &[PersonaAnalysis]) -> Vec<Finding> {
    analyses
        .iter()
        .flat_map(|a| a.findings.iter().cloned())
        .collect()
}

/// Either shape the analyzers may hand over.
#[derive(Deserialize)]
#[serde(untagged)]
enum FindingsInput {
    Analyses(Vec<PersonaAnalysis>),
    Findings(Vec<Finding>),
}

/// Parse a JSON array of findings, or of analyzer passes whose findings are
/// flattened in order.
pub fn parse_findings(json: &str) -> ArenaResult<Vec<Finding>> {
    Ok(match serde_json::from_str(json)? {
        FindingsInput::Analyses(analyses) => flatten_analyses(&analyses),
        FindingsInput::Findings(findings) => findings,
    })
}

/// A party to the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    pub role: String,
}

/// A parsed clause with its analyzer tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    pub id: String,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Contract document passed through as debate context; never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub parties: Vec<Party>,
    #[serde(default)]
    pub clauses: Vec<Clause>,
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Contract {
    /// Placeholder document for runs that only have findings.
    pub fn untitled() -> Self {
        Self {
            id: "contract".to_string(),
            title: "Untitled contract".to_string(),
            parties: Vec::new(),
            clauses: Vec::new(),
            raw_text: String::new(),
            metadata: HashMap::new(),
        }
    }

    /// Parse a contract document from JSON.
    pub fn from_json(json: &str) -> ArenaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a clause by id.
    pub fn clause(&self, clause_ref: &str) -> Option<&Clause> {
        self.clauses.iter().find(|c| c.id == clause_ref)
    }
}
