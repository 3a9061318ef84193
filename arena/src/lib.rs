//! Debate Arena Library
//!
//! Arbitrates conflicting risk findings about a contract through a bounded
//! adversarial debate, then condenses the verdicts into one recommendation.
//!
//! # Flow
//!
//! ```text
//! findings ──▶ prioritize ──▶ select ──▶ batch into rounds
//!                                            │
//!              ┌─────────────────────────────┘
//!              ▼  (per finding, sequential)
//!        RiskAdvocate ──▶ MitigationAdvocate ──▶ Arbiter ──▶ DebateOutcome
//!                                                               │
//!                            synthesize_verdicts + statistics ◀─┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use debate_arena::{ArenaConfig, Contract, DebateArena};
//!
//! let arena = DebateArena::new(ArenaConfig::from_env());
//! let output = arena.run(&findings, &Contract::untitled()).await?;
//! println!("{}", output.synthesis.summary);
//! ```

#![allow(clippy::uninlined_format_args)]

pub mod advocate;
pub mod arbiter;
pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod orchestrator;
pub mod prioritize;
pub mod stats;

// Re-export model types
pub use model::{
    flatten_analyses, parse_findings, Argument, Clause, Contract, DebateOutcome, DebateRound,
    Finding, Party, PersonaAnalysis, RiskCategory, Severity, SeverityShift, Verdict,
};

// Re-export advocate types
pub use advocate::{Advocate, DebateContext, MitigationAdvocate, RiskAdvocate, Side};

// Re-export arbiter types
pub use arbiter::{
    synthesize_verdicts, ApprovalRecommendation, Arbiter, ArgumentScore, Deliberation,
    SeverityCounts, Synthesis,
};

// Re-export arena types
pub use config::ArenaConfig;
pub use error::{ArenaError, ArenaResult};
pub use events::{
    ArenaEvent, ArenaObserver, BroadcastObserver, MemoryObserver, SharedObserver,
    TracingObserver,
};
pub use orchestrator::{ArenaOutput, DebateArena};
pub use prioritize::PrioritizeBy;
pub use stats::DebateStatistics;
