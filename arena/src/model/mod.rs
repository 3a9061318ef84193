//! Shared data model for the debate arena.

pub mod debate;
pub mod finding;

pub use debate::{Argument, DebateOutcome, DebateRound, SeverityShift, Verdict};
pub use finding::{
    flatten_analyses, parse_findings, Clause, Contract, Finding, Party, PersonaAnalysis,
    RiskCategory, Severity,
};
