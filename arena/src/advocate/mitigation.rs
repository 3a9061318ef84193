//! Risk-mitigating advocate ("angel").
//!
//! Frames the finding as manageable and, when it can read the devil's
//! argument, answers it with concrete negotiation counterpoints.

use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

use super::{Advocate, DebateContext, Side};
use crate::error::ArenaResult;
use crate::model::{Argument, Severity};

/// Maximum counterpoints raised against one argument.
const MAX_COUNTERPOINTS: usize = 3;

/// Keyword families and the mitigation each one suggests, in raise order.
static MITIGATION_TABLE: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    let rule = |pattern: &str, mitigation: &'static str| {
        (
            Regex::new(pattern).expect("mitigation pattern should compile"),
            mitigation,
        )
    };
    vec![
        rule(
            r"(?i)\b(liabilit(y|ies)|liable)\b",
            "Negotiate a mutual liability cap tied to fees paid under the contract",
        ),
        rule(
            r"(?i)\bterminat\w*",
            "Add a cure period before either party may terminate for breach",
        ),
        rule(
            r"(?i)\bindemn\w*",
            "Limit indemnification to third-party claims caused by the indemnifying party",
        ),
        rule(
            r"(?i)\b(payments?|fees?|penalt(y|ies)|late charges?)\b",
            "Propose capped late charges and a clear invoice dispute window",
        ),
        rule(
            r"(?i)\b(confidential\w*|data|personal information)\b",
            "Request mutual confidentiality obligations with defined carve-outs",
        ),
        rule(
            r"(?i)\b(intellectual property|ip|ownership)\b",
            "Clarify that pre-existing intellectual property stays with its owner",
        ),
        rule(
            r"(?i)\brenew\w*",
            "Require written notice before any automatic renewal takes effect",
        ),
        rule(
            r"(?i)\bwarrant\w*",
            "Revise warranties to a defined period with repair-or-replace remedies",
        ),
    ]
});

/// Mitigations suggested by the opposing argument's text.
///
/// At most [`MAX_COUNTERPOINTS`], in table order, without duplicates.
pub fn counterpoints_for(opposing: &Argument) -> Vec<String> {
    let mut text = opposing.full_text();
    for item in &opposing.evidence {
        text.push('\n');
        text.push_str(item);
    }

    let mut out: Vec<String> = Vec::new();
    for (pattern, mitigation) in MITIGATION_TABLE.iter() {
        if out.len() >= MAX_COUNTERPOINTS {
            break;
        }
        if pattern.is_match(&text) && !out.iter().any(|m| m == mitigation) {
            out.push((*mitigation).to_string());
        }
    }
    out
}

/// Argues that a finding's risk can be contained.
#[derive(Debug, Clone, Copy, Default)]
pub struct MitigationAdvocate;

impl MitigationAdvocate {
    pub fn new() -> Self {
        Self
    }

    /// Build the argument synchronously; `argue` wraps this.
    pub fn build(&self, ctx: &DebateContext<'_>) -> Argument {
        let finding = ctx.finding;
        let counterpoints = ctx.opposing.map(counterpoints_for).unwrap_or_default();

        let mut reasoning = String::new();
        if let Some(opposing) = ctx.opposing {
            reasoning.push_str(&format!(
                "Admittedly, the opposing view is: {}\n",
                opposing.position
            ));
        }
        reasoning.push_str(&format!(
            "However, the exposure can be reduced because the recommended change is within normal negotiating range: {}",
            finding.recommendation
        ));
        if !counterpoints.is_empty() {
            reasoning.push_str(
                "\nEach counterpoint below is achievable and reflects standard practice.",
            );
        }
        if finding.severity <= Severity::Medium {
            reasoning.push_str("\nSimilar contracts routinely settle this point in drafting.");
        }

        Argument {
            position: format!(
                "The risk in \"{}\" can be contained through negotiation",
                finding.title
            ),
            reasoning,
            evidence: counterpoints.clone(),
            counterpoints,
        }
    }
}

#[async_trait]
impl Advocate for MitigationAdvocate {
    fn side(&self) -> Side {
        Side::Angel
    }

    async fn argue(&self, ctx: &DebateContext<'_>) -> ArenaResult<Argument> {
        Ok(self.build(ctx))
    }
}
