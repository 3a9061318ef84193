//! Risk-maximizing advocate ("devil").
//!
//! Treats the finding's stated impact as the probable outcome and argues
//! that the severity should stand or rise.

use async_trait::async_trait;

use super::{Advocate, DebateContext, Side};
use crate::error::ArenaResult;
use crate::model::{Argument, Severity};

/// Argues that a finding's risk is real and likely.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskAdvocate;

impl RiskAdvocate {
    pub fn new() -> Self {
        Self
    }

    /// Build the argument synchronously; `argue` wraps this.
    pub fn build(&self, ctx: &DebateContext<'_>) -> Argument {
        let finding = ctx.finding;
        let clause = match ctx.contract.clause(&finding.clause_ref) {
            Some(c) => format!("Clause {} ({})", c.id, c.title),
            None => format!("Clause {}", finding.clause_ref),
        };

        let mut reasoning = format!(
            "1. Issue: {}\n2. Probable impact: {}\n3. {} leaves this exposure open as written, therefore the finding should stand at {} or higher.",
            finding.issue, finding.impact, clause, finding.severity
        );
        if finding.severity >= Severity::High {
            reasoning.push_str(
                "\nAlthough a softer reading of the clause is possible, it is nevertheless not guaranteed by the drafting.",
            );
        }
        reasoning.push_str(&format!(
            "\n4. The wording deviates from standard practice for {} terms.",
            finding.category
        ));

        Argument {
            position: format!(
                "Treat \"{}\" as a probable loss: {}",
                finding.title, finding.impact
            ),
            reasoning,
            evidence: finding.evidence.clone(),
            counterpoints: Vec::new(),
        }
    }
}

#[async_trait]
impl Advocate for RiskAdvocate {
    fn side(&self) -> Side {
        Side::Devil
    }

    async fn argue(&self, ctx: &DebateContext<'_>) -> ArenaResult<Argument> {
        Ok(self.build(ctx))
    }
}
