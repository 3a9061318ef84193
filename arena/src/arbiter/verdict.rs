//! Verdict assembly: severity transition, rationale, priority and guidance.

use crate::model::{Argument, Finding, Severity, Verdict};

/// Score difference beyond which severity moves one step.
pub const ADJUSTMENT_THRESHOLD: f64 = 0.3;
/// Score difference beyond which a win is "slight" rather than "marginal".
pub const SLIGHT_MARGIN: f64 = 0.1;

/// Move severity at most one step in the direction of `score_diff`
/// (devil score minus angel score).
pub fn adjust_severity(original: Severity, score_diff: f64) -> Severity {
    if score_diff > ADJUSTMENT_THRESHOLD {
        original.step_up()
    } else if score_diff < -ADJUSTMENT_THRESHOLD {
        original.step_down()
    } else {
        original
    }
}

/// Qualitative size of the winning margin.
pub fn margin_label(score_diff: f64) -> &'static str {
    let margin = score_diff.abs();
    if margin > ADJUSTMENT_THRESHOLD {
        "clear"
    } else if margin > SLIGHT_MARGIN {
        "slight"
    } else {
        "marginal"
    }
}

/// `max(1, 11 - (severity weight + category boost) * 2)`, in integer steps.
pub fn priority(finding: &Finding, adjusted: Severity) -> u32 {
    let doubled = 2 * u32::from(adjusted.weight()) + finding.category.boost_half_steps();
    11u32.saturating_sub(doubled).max(1)
}

pub fn rationale(original: Severity, adjusted: Severity, devil: f64, angel: f64) -> String {
    let diff = devil - angel;
    let mut text = if diff > 0.0 {
        format!(
            "The risk-maximizing argument prevailed by a {} margin (devil {:.2} vs angel {:.2}).",
            margin_label(diff),
            devil,
            angel
        )
    } else if diff < 0.0 {
        format!(
            "The risk-mitigating argument prevailed by a {} margin (angel {:.2} vs devil {:.2}).",
            margin_label(diff),
            angel,
            devil
        )
    } else {
        format!(
            "Both arguments scored evenly (devil {:.2} vs angel {:.2}).",
            devil, angel
        )
    };

    if adjusted != original {
        text.push_str(&format!(
            " Severity adjusted from {} to {}.",
            original, adjusted
        ));
    } else {
        text.push_str(&format!(" Severity remains {}.", original));
    }
    text
}

/// Negotiation guidance for the adjusted severity; the first line is the
/// headline action.
pub fn negotiation_guidance(finding: &Finding, adjusted: Severity, angel: &Argument) -> String {
    let recommendation = &finding.recommendation;
    let mut guidance = match adjusted {
        Severity::Critical => format!(
            "Must negotiate before signing: {}\nDo not sign until clause {} is revised.",
            recommendation, finding.clause_ref
        ),
        Severity::High => format!(
            "Strongly recommended to negotiate: {}\nRaise clause {} in the first negotiation round.",
            recommendation, finding.clause_ref
        ),
        Severity::Medium => format!(
            "Consider negotiating: {}\nAcceptable as written if the counterparty refuses.",
            recommendation
        ),
        Severity::Low => format!("Optional improvement: {}", recommendation),
    };

    if let Some(alternative) = angel.counterpoints.first() {
        guidance.push_str(&format!("\nAlternative: {}", alternative));
    }
    guidance
}

/// Assemble the verdict from both sides' total scores.
pub fn assemble(finding: &Finding, angel: &Argument, devil_score: f64, angel_score: f64) -> Verdict {
    let adjusted = adjust_severity(finding.severity, devil_score - angel_score);
    Verdict {
        adjusted_severity: adjusted,
        rationale: rationale(finding.severity, adjusted, devil_score, angel_score),
        action_required: adjusted.requires_action(),
        priority: priority(finding, adjusted),
        negotiation_guidance: negotiation_guidance(finding, adjusted, angel),
    }
}
