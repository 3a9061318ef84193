//! Weighted multi-criterion argument scoring.
//!
//! Each criterion is normalized to [0, 1]; the total is the weighted sum.
//!
//! | Criterion          | Weight |
//! |--------------------|--------|
//! | Evidence           | 0.35   |
//! | Logical coherence  | 0.25   |
//! | Feasibility        | 0.25   |
//! | Industry norms     | 0.15   |

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::model::Argument;

pub const EVIDENCE_WEIGHT: f64 = 0.35;
pub const COHERENCE_WEIGHT: f64 = 0.25;
pub const FEASIBILITY_WEIGHT: f64 = 0.25;
pub const INDUSTRY_NORM_WEIGHT: f64 = 0.15;

static PERCENTAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(\.\d+)?\s*(%|percent\b)").expect("PERCENTAGE regex should compile")
});
static CURRENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([$€£¥₩]\s?\d)|(\d[\d,.]*\s?(usd|eur|gbp|krw|dollars?|euros?|won)\b)")
        .expect("CURRENCY regex should compile")
});
static COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+\s*(days?|weeks?|months?|years?|hours?|times|occurrences?|instances?|clauses?)\b")
        .expect("COUNT regex should compile")
});
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("YEAR regex should compile"));

static STRUCTURED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)(^\s*(\d+[.)]|[-*•])\s+)|\b(first(ly)?|second(ly)?|finally)\b,")
        .expect("STRUCTURED regex should compile")
});
static CAUSAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(because|therefore|thus|hence|consequently|as a result|due to|leads? to)\b")
        .expect("CAUSAL regex should compile")
});
static CONCESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(although|admittedly|granted|while it is true|even if|it is true that)\b")
        .expect("CONCESSION regex should compile")
});
static REBUTTAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(however|nevertheless|nonetheless|but|yet|on the other hand)\b")
        .expect("REBUTTAL regex should compile")
});

static MITIGATION_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(negotiat\w*|amend\w*|cap|caps|capped|limit\w*|insert|add|revise|request|propose|clarify|remove|delete|require)\b")
        .expect("MITIGATION_ACTION regex should compile")
});
static FEASIBILITY_CLAIM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(feasible|feasibility|achievable|realistic|workable|attainable)\b")
        .expect("FEASIBILITY_CLAIM regex should compile")
});

static STANDARD_PRACTICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(standard practice|industry standard|market standard|market practice|typical(ly)?|customary|common practice|usual practice)\b")
        .expect("STANDARD_PRACTICE regex should compile")
});
static COMPARABLE_CASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(comparable|similar (contracts?|agreements?|deals?|cases?)|precedents?|benchmark\w*)\b")
        .expect("COMPARABLE_CASE regex should compile")
});

/// Whether the text carries a percentage, currency amount, count or year.
pub fn has_quantitative_token(text: &str) -> bool {
    PERCENTAGE.is_match(text)
        || CURRENCY.is_match(text)
        || COUNT.is_match(text)
        || YEAR.is_match(text)
}

/// Evidence strength: volume plus a bonus for quantitative support.
pub fn evidence_score(evidence: &[String]) -> f64 {
    if evidence.is_empty() {
        return 0.2;
    }
    let volume = (evidence.len() as f64 / 3.0).min(1.0) * 0.5;
    let quantitative = if evidence.iter().any(|e| has_quantitative_token(e)) {
        0.5
    } else {
        0.3
    };
    volume + quantitative
}

/// Logical coherence of the reasoning narrative.
pub fn coherence_score(reasoning: &str) -> f64 {
    let mut score: f64 = 0.5;
    if STRUCTURED.is_match(reasoning) {
        score += 0.2;
    }
    if CAUSAL.is_match(reasoning) {
        score += 0.15;
    }
    // concede-and-rebut needs both halves
    if CONCESSION.is_match(reasoning) && REBUTTAL.is_match(reasoning) {
        score += 0.15;
    }
    score.min(1.0)
}

/// Practical feasibility: a concrete action plus a claim it can be done.
pub fn feasibility_score(text: &str) -> f64 {
    let mut score: f64 = 0.5;
    if MITIGATION_ACTION.is_match(text) {
        score += 0.25;
    }
    if FEASIBILITY_CLAIM.is_match(text) {
        score += 0.25;
    }
    score.min(1.0)
}

/// Alignment with industry norms and comparable cases.
pub fn industry_norm_score(text: &str) -> f64 {
    let mut score: f64 = 0.4;
    if STANDARD_PRACTICE.is_match(text) {
        score += 0.3;
    }
    if COMPARABLE_CASE.is_match(text) {
        score += 0.3;
    }
    score.min(1.0)
}

/// Per-criterion breakdown of one argument's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentScore {
    pub evidence: f64,
    pub coherence: f64,
    pub feasibility: f64,
    pub industry_norm: f64,
    pub total: f64,
}

impl ArgumentScore {
    /// Score an argument against all four criteria.
    pub fn of(argument: &Argument) -> Self {
        let text = argument.full_text();
        let evidence = evidence_score(&argument.evidence);
        let coherence = coherence_score(&argument.reasoning);
        let feasibility = feasibility_score(&text);
        let industry_norm = industry_norm_score(&text);
        let total = evidence * EVIDENCE_WEIGHT
            + coherence * COHERENCE_WEIGHT
            + feasibility * FEASIBILITY_WEIGHT
            + industry_norm * INDUSTRY_NORM_WEIGHT;
        Self {
            evidence,
            coherence,
            feasibility,
            industry_norm,
            total,
        }
    }
}
