//! Golden fixtures: analyzer JSON in, arena JSON out.
//!
//! Each fixture feeds a fixed analyzer payload through the arena and pins
//! the verdicts and the serialized output shape, so that scoring or wire
//! changes show up as regressions.

use debate_arena::{
    flatten_analyses, ArenaOutput, Contract, DebateArena, PersonaAnalysis, Severity,
    SeverityShift,
};

const ANALYSES: &str = r#"[
  {
    "persona": "operations",
    "timestamp": "2026-01-05T09:00:00Z",
    "summary": "Delivery chain has one point of failure",
    "overallRisk": "high",
    "confidence": 0.8,
    "findings": [
      {
        "id": "OPS-1",
        "persona": "operations",
        "clauseRef": "5.4",
        "category": "operational_risk",
        "severity": "high",
        "title": "Single-source dependency",
        "issue": "All deliveries depend on one subcontractor",
        "impact": "A subcontractor failure halts production for 6 weeks",
        "recommendation": "Negotiate a second-source clause",
        "evidence": [
          "The subcontractor failed 3 times in 2022",
          "Recovery takes 6 weeks",
          "No backup supplier is named"
        ]
      }
    ]
  },
  {
    "persona": "finance",
    "timestamp": "2026-01-05T09:05:00Z",
    "summary": "Interest terms are one-sided",
    "overallRisk": "medium",
    "confidence": 0.7,
    "findings": [
      {
        "id": "FIN-1",
        "persona": "finance",
        "clauseRef": "8.1",
        "category": "financial_risk",
        "severity": "medium",
        "title": "Late payment interest",
        "issue": "Late payment interest accrues on disputed invoices",
        "impact": "Fees and liability for interest may grow while an invoice is disputed",
        "recommendation": "Exclude disputed amounts from interest"
      }
    ]
  }
]"#;

const CONTRACT: &str = r#"{
  "id": "msa-2026-014",
  "title": "Master supply agreement",
  "parties": [
    { "name": "Acme Components", "role": "supplier" },
    { "name": "Northwind Assembly", "role": "customer" }
  ],
  "clauses": [
    { "id": "5.4", "title": "Subcontracting", "text": "Supplier may use one named subcontractor." },
    { "id": "8.1", "title": "Interest", "text": "Interest accrues on all late amounts.", "tags": ["payment"] }
  ]
}"#;

fn load() -> (Vec<debate_arena::Finding>, Contract) {
    let analyses: Vec<PersonaAnalysis> = serde_json::from_str(ANALYSES).unwrap();
    let contract: Contract = serde_json::from_str(CONTRACT).unwrap();
    (flatten_analyses(&analyses), contract)
}

async fn run_fixture() -> ArenaOutput {
    let (findings, contract) = load();
    DebateArena::default().run(&findings, &contract).await.unwrap()
}

// ── Fixture: input parsing ─────────────────────────────────────────

#[test]
fn fixture_analyses_flatten_in_order() {
    let (findings, contract) = load();
    let ids: Vec<&str> = findings.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["OPS-1", "FIN-1"]);
    assert!(findings[1].evidence.is_empty());
    assert!(findings[1].related_findings.is_none());

    assert_eq!(contract.parties.len(), 2);
    assert!(contract.raw_text.is_empty());
    assert_eq!(contract.clause("8.1").unwrap().tags, vec!["payment"]);
    assert!(contract.clause("9.9").is_none());
}

// ── Fixture: verdicts ──────────────────────────────────────────────

#[tokio::test]
async fn fixture_upgrade_and_downgrade() {
    let output = run_fixture().await;

    let shifts: Vec<(&str, Severity, SeverityShift)> = output
        .all_outcomes
        .iter()
        .map(|o| (o.finding.id.as_str(), o.adjusted_severity(), o.shift()))
        .collect();
    assert_eq!(
        shifts,
        vec![
            ("OPS-1", Severity::Critical, SeverityShift::Upgraded),
            ("FIN-1", Severity::Low, SeverityShift::Downgraded),
        ]
    );
    assert!(output.all_outcomes[0]
        .verdict
        .rationale
        .starts_with("The risk-maximizing argument prevailed by a clear margin"));
    assert!(output.all_outcomes[1]
        .verdict
        .rationale
        .starts_with("The risk-mitigating argument prevailed by a clear margin"));
}

#[tokio::test]
async fn fixture_critical_saturates() {
    let (mut findings, contract) = load();
    findings.truncate(1);
    findings[0].severity = Severity::Critical;

    let output = DebateArena::default().run(&findings, &contract).await.unwrap();
    let outcome = &output.all_outcomes[0];
    assert_eq!(outcome.adjusted_severity(), Severity::Critical);
    assert_eq!(outcome.shift(), SeverityShift::Unchanged);
    assert!(outcome.verdict.rationale.ends_with("Severity remains critical."));
    assert_eq!(output.statistics.ties, 1);
}

#[tokio::test]
async fn fixture_deterministic_replay() {
    let first = run_fixture().await;
    let second = run_fixture().await;

    for (a, b) in first.all_outcomes.iter().zip(&second.all_outcomes) {
        assert_eq!(a.devil_argument, b.devil_argument);
        assert_eq!(a.angel_argument, b.angel_argument);
        assert_eq!(a.verdict, b.verdict);
        // ids are fresh per outcome
        assert_ne!(a.id, b.id);
    }
    assert_eq!(first.synthesis, second.synthesis);
    assert_eq!(first.statistics, second.statistics);
}

// ── Fixture: output wire shape ─────────────────────────────────────

#[tokio::test]
async fn fixture_output_json_shape() {
    let output = run_fixture().await;
    let value = serde_json::to_value(&output).unwrap();

    assert_eq!(value["rounds"][0]["round"], 1);
    assert_eq!(value["rounds"][0]["completed"], true);
    assert_eq!(value["allOutcomes"][0]["verdict"]["adjustedSeverity"], "critical");
    assert_eq!(value["allOutcomes"][0]["verdict"]["actionRequired"], true);
    assert_eq!(value["allOutcomes"][0]["finding"]["clauseRef"], "5.4");
    // the devil never carries counterpoints, so the field is omitted
    assert!(value["allOutcomes"][0]["devilArgument"]
        .get("counterpoints")
        .is_none());
    assert_eq!(
        value["allOutcomes"][1]["angelArgument"]["counterpoints"]
            .as_array()
            .map(Vec::len),
        Some(2)
    );
    assert_eq!(value["synthesis"]["overallRisk"], "critical");
    assert_eq!(value["synthesis"]["approvalRecommendation"], "reject");
    assert_eq!(value["synthesis"]["severityCounts"]["low"], 1);
    assert_eq!(value["statistics"]["devilWins"], 1);
    assert_eq!(value["statistics"]["angelWins"], 1);
    assert_eq!(value["undebatedFindings"], serde_json::json!([]));
}

#[tokio::test]
async fn fixture_output_round_trips() {
    let output = run_fixture().await;
    let json = serde_json::to_string(&output).unwrap();
    let restored: ArenaOutput = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.all_outcomes.len(), output.all_outcomes.len());
    assert_eq!(restored.synthesis, output.synthesis);
    assert_eq!(restored.statistics, output.statistics);
    assert_eq!(
        restored.all_outcomes[1].verdict,
        output.all_outcomes[1].verdict
    );
}
