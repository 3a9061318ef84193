//! Advocates: the two opposing roles in every debate.
//!
//! Both sides implement [`Advocate`]. The arena treats them symmetrically:
//! the devil argues first, the angel reads the devil's argument from the
//! context and answers it.
//!
//! ```text
//! DebateContext ──▶ RiskAdvocate (devil) ──▶ Argument
//!       │                                       │
//!       └──── with_opposing(&Argument) ◀────────┘
//!                      │
//!                      ▼
//!          MitigationAdvocate (angel) ──▶ Argument
//! ```

pub mod mitigation;
pub mod risk;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ArenaResult;
use crate::model::{Argument, Contract, Finding};

pub use mitigation::MitigationAdvocate;
pub use risk::RiskAdvocate;

/// Which side of the debate an advocate argues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Risk-maximizing advocate.
    Devil,
    /// Risk-mitigating advocate.
    Angel,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Devil => write!(f, "devil"),
            Self::Angel => write!(f, "angel"),
        }
    }
}

/// Everything an advocate may read when building its argument.
#[derive(Debug, Clone, Copy)]
pub struct DebateContext<'a> {
    pub contract: &'a Contract,
    pub finding: &'a Finding,
    /// Round number (1-indexed; 0 for quick-path rulings).
    pub round: u32,
    /// The other side's argument, when it has already been made.
    pub opposing: Option<&'a Argument>,
}

impl<'a> DebateContext<'a> {
    pub fn new(contract: &'a Contract, finding: &'a Finding, round: u32) -> Self {
        Self {
            contract,
            finding,
            round,
            opposing: None,
        }
    }

    /// Same context, carrying the opposing argument.
    pub fn with_opposing(self, opposing: &'a Argument) -> Self {
        Self {
            opposing: Some(opposing),
            ..self
        }
    }
}

/// A role that argues one side of a finding.
///
/// Implementations must be pure functions of the context: no shared mutable
/// state between calls, safe to call for different findings independently.
#[async_trait]
pub trait Advocate: Send + Sync {
    /// Side this advocate argues.
    fn side(&self) -> Side;

    /// Build an argument for the finding in `ctx`.
    async fn argue(&self, ctx: &DebateContext<'_>) -> ArenaResult<Argument>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{Contract, Finding, RiskCategory, Severity};

    pub fn finding(id: &str, severity: Severity, category: RiskCategory) -> Finding {
        Finding {
            id: id.to_string(),
            persona: "legal".to_string(),
            clause_ref: "4.1".to_string(),
            category,
            severity,
            title: "Unlimited liability".to_string(),
            issue: "The supplier liability is uncapped".to_string(),
            impact: "Exposure to unbounded damages".to_string(),
            recommendation: "Cap liability at the annual contract value".to_string(),
            evidence: vec!["Clause 4.1 sets no ceiling".to_string()],
            related_findings: None,
        }
    }

    pub fn contract() -> Contract {
        Contract::untitled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Devil.to_string(), "devil");
        assert_eq!(Side::Angel.to_string(), "angel");
    }

    #[test]
    fn test_context_with_opposing() {
        let contract = test_support::contract();
        let finding = test_support::finding(
            "F-1",
            crate::model::Severity::High,
            crate::model::RiskCategory::LegalRisk,
        );
        let arg = Argument {
            position: "p".to_string(),
            reasoning: "r".to_string(),
            evidence: vec![],
            counterpoints: vec![],
        };
        let ctx = DebateContext::new(&contract, &finding, 2);
        assert!(ctx.opposing.is_none());
        let ctx = ctx.with_opposing(&arg);
        assert_eq!(ctx.round, 2);
        assert_eq!(ctx.opposing.map(|a| a.position.as_str()), Some("p"));
    }
}
