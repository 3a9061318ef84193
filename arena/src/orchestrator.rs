//! Debate arena: drives prioritization, rounds and the per-finding
//! devil → angel → arbiter sequence.
//!
//! Findings are processed strictly one after another so that progressive
//! lookups against earlier outcomes (including those from the same round)
//! are deterministic. Any advocate fault
//! aborts the run and is returned unchanged; a finding whose debate failed
//! never gets an outcome.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::advocate::{Advocate, DebateContext, MitigationAdvocate, RiskAdvocate, Side};
use crate::arbiter::{synthesize_verdicts, Arbiter, Synthesis};
use crate::config::ArenaConfig;
use crate::error::ArenaResult;
use crate::events::{ArenaEvent, SharedObserver};
use crate::model::{Argument, Contract, DebateOutcome, DebateRound, Finding};
use crate::prioritize::{batch, prioritize, select};
use crate::stats::DebateStatistics;

/// Everything a completed arena run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaOutput {
    pub rounds: Vec<DebateRound>,
    pub all_outcomes: Vec<DebateOutcome>,
    pub synthesis: Synthesis,
    pub statistics: DebateStatistics,
    /// Findings that were not selected, in priority order, untouched.
    pub undebated_findings: Vec<Finding>,
}

impl ArenaOutput {
    /// Outcomes ordered by verdict priority (most urgent first); ties keep
    /// debate order.
    pub fn outcomes_by_priority(&self) -> Vec<&DebateOutcome> {
        let mut sorted: Vec<&DebateOutcome> = self.all_outcomes.iter().collect();
        sorted.sort_by_key(|o| o.verdict.priority);
        sorted
    }
}

/// Build the two scripted arguments used by the quick path.
pub fn quick_arguments(finding: &Finding) -> (Argument, Argument) {
    let devil = Argument {
        position: format!("Risk identified: {}", finding.title),
        reasoning: finding.issue.clone(),
        evidence: finding.evidence.clone(),
        counterpoints: Vec::new(),
    };
    let angel = Argument {
        position: format!("Mitigation available: {}", finding.recommendation),
        reasoning: finding.recommendation.clone(),
        evidence: Vec::new(),
        counterpoints: Vec::new(),
    };
    (devil, angel)
}

/// Find an earlier outcome on the same clause, else the same category.
pub fn find_related<'a>(finding: &Finding, prior: &'a [DebateOutcome]) -> Option<&'a DebateOutcome> {
    prior
        .iter()
        .find(|o| o.finding.clause_ref == finding.clause_ref)
        .or_else(|| prior.iter().find(|o| o.finding.category == finding.category))
}

/// Evidence line cross-referencing an earlier outcome.
pub fn cross_reference(related: &DebateOutcome) -> String {
    format!(
        "Related finding from round {}: {} ({}) was rated {}",
        related.round, related.finding.id, related.finding.title, related.verdict.adjusted_severity
    )
}

/// Orchestrates the adversarial debate over a set of findings.
pub struct DebateArena {
    config: ArenaConfig,
    devil: Arc<dyn Advocate>,
    angel: Arc<dyn Advocate>,
    arbiter: Arbiter,
    observer: Option<SharedObserver>,
}

impl DebateArena {
    /// Arena with the built-in advocates and no observer.
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            config,
            devil: Arc::new(RiskAdvocate::new()),
            angel: Arc::new(MitigationAdvocate::new()),
            arbiter: Arbiter::new(),
            observer: None,
        }
    }

    /// Replace both advocates (e.g. with remotely backed ones).
    pub fn with_advocates(mut self, devil: Arc<dyn Advocate>, angel: Arc<dyn Advocate>) -> Self {
        self.devil = devil;
        self.angel = angel;
        self
    }

    /// Register an observer for lifecycle events.
    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    fn emit(&self, event: ArenaEvent) {
        if let Some(observer) = &self.observer {
            observer.on_event(&event);
        }
    }

    /// Run the full arena over `findings`.
    pub async fn run(&self, findings: &[Finding], contract: &Contract) -> ArenaResult<ArenaOutput> {
        self.config.validate()?;

        let prioritized = prioritize(findings, self.config.prioritize_by);
        let (selected, undebated_findings) = select(prioritized, self.config.capacity());
        let batches = batch(
            &selected,
            self.config.max_rounds,
            self.config.findings_per_round,
        );

        info!(
            contract_id = %contract.id,
            total = findings.len(),
            selected = selected.len(),
            rounds = batches.len(),
            prioritize_by = %self.config.prioritize_by,
            "Starting debate arena"
        );
        self.emit(ArenaEvent::ArenaStarted {
            total_findings: findings.len(),
            selected_findings: selected.len(),
            rounds_planned: batches.len() as u32,
            timestamp: Utc::now(),
        });

        let mut rounds: Vec<DebateRound> = Vec::new();
        let mut all_outcomes: Vec<DebateOutcome> = Vec::new();

        for (index, batch) in batches.into_iter().enumerate() {
            if batch.is_empty() {
                break;
            }
            let round_number = index as u32 + 1;
            let round = self
                .run_round(round_number, batch, contract, &mut all_outcomes)
                .await?;
            rounds.push(round);
        }

        let synthesis = synthesize_verdicts(&all_outcomes);
        let statistics = DebateStatistics::compute(&all_outcomes, findings.len());

        info!(
            outcomes = all_outcomes.len(),
            overall_risk = %synthesis.overall_risk,
            recommendation = %synthesis.approval_recommendation,
            stats = %statistics.summary_line(),
            "Debate arena completed"
        );
        self.emit(ArenaEvent::ArenaCompleted {
            rounds: rounds.len(),
            outcomes: all_outcomes.len(),
            overall_risk: synthesis.overall_risk,
            timestamp: Utc::now(),
        });

        Ok(ArenaOutput {
            rounds,
            all_outcomes,
            synthesis,
            statistics,
            undebated_findings,
        })
    }

    async fn run_round(
        &self,
        round_number: u32,
        findings: Vec<Finding>,
        contract: &Contract,
        all_outcomes: &mut Vec<DebateOutcome>,
    ) -> ArenaResult<DebateRound> {
        self.emit(ArenaEvent::RoundStarted {
            round: round_number,
            finding_ids: findings.iter().map(|f| f.id.clone()).collect(),
            timestamp: Utc::now(),
        });

        let mut round = DebateRound::new(round_number, findings);
        for finding in &round.findings {
            let outcome = self
                .debate_finding(finding, contract, round_number, all_outcomes)
                .await?;
            all_outcomes.push(outcome.clone());
            round.outcomes.push(outcome);
        }
        round.completed = true;

        self.emit(ArenaEvent::RoundCompleted {
            round: round_number,
            outcomes: round.outcomes.len(),
            timestamp: Utc::now(),
        });
        Ok(round)
    }

    /// Debate one finding: devil, then angel (reading the devil), then the
    /// arbiter. `prior` holds every outcome produced so far in the run.
    pub async fn debate_finding(
        &self,
        finding: &Finding,
        contract: &Contract,
        round: u32,
        prior: &[DebateOutcome],
    ) -> ArenaResult<DebateOutcome> {
        debug!(finding_id = %finding.id, round, "Debating finding");
        self.emit(ArenaEvent::DebateStarted {
            round,
            finding_id: finding.id.clone(),
            title: finding.title.clone(),
            severity: finding.severity,
            timestamp: Utc::now(),
        });

        let ctx = DebateContext::new(contract, finding, round);
        let mut devil = self.devil.argue(&ctx).await?;
        self.emit_argument(round, finding, Side::Devil, &devil);

        let angel = self.angel.argue(&ctx.with_opposing(&devil)).await?;
        self.emit_argument(round, finding, Side::Angel, &angel);

        if self.config.enable_progressive_debate {
            if let Some(related) = find_related(finding, prior) {
                debug!(
                    finding_id = %finding.id,
                    related_id = %related.finding.id,
                    "Cross-referencing earlier outcome"
                );
                devil.evidence.push(cross_reference(related));
            }
        }

        let outcome = self.arbiter.judge(finding, devil, angel, round);
        self.emit_verdict(&outcome);
        Ok(outcome)
    }

    /// Rule on a finding without a full debate, using scripted arguments.
    pub fn quick_debate(&self, finding: &Finding) -> DebateOutcome {
        let (devil, angel) = quick_arguments(finding);
        let outcome = self.arbiter.judge(finding, devil, angel, 0);
        debug!(
            finding_id = %finding.id,
            adjusted = %outcome.verdict.adjusted_severity,
            "Quick ruling"
        );
        self.emit_verdict(&outcome);
        outcome
    }

    fn emit_argument(&self, round: u32, finding: &Finding, side: Side, argument: &Argument) {
        self.emit(ArenaEvent::ArgumentPresented {
            round,
            finding_id: finding.id.clone(),
            side,
            position: argument.position.clone(),
            timestamp: Utc::now(),
        });
    }

    fn emit_verdict(&self, outcome: &DebateOutcome) {
        self.emit(ArenaEvent::VerdictIssued {
            round: outcome.round,
            finding_id: outcome.finding.id.clone(),
            original_severity: outcome.finding.severity,
            adjusted_severity: outcome.verdict.adjusted_severity,
            priority: outcome.verdict.priority,
            timestamp: Utc::now(),
        });
    }
}

impl Default for DebateArena {
    fn default() -> Self {
        Self::new(ArenaConfig::default())
    }
}
