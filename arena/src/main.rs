//! Debate arena runner
//!
//! Reads analyzer findings as JSON, runs the debate arena and prints the
//! verdict set as JSON on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Findings only
//! debate-arena --findings findings.json
//!
//! # Analyzer passes, a contract and a config file
//! debate-arena --findings analyses.json --contract contract.json --config arena.toml
//!
//! # Environment overrides
//! ARENA_MAX_ROUNDS=3 RUST_LOG=debug debate-arena --findings findings.json --pretty
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use debate_arena::{
    parse_findings, ArenaConfig, Contract, DebateArena, Finding, PrioritizeBy, TracingObserver,
};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON array of findings, or of analyzer passes containing findings
    #[arg(long)]
    findings: PathBuf,

    /// JSON contract document passed to the advocates as context
    #[arg(long)]
    contract: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum debate rounds (overrides ARENA_MAX_ROUNDS)
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Findings per round (overrides ARENA_FINDINGS_PER_ROUND)
    #[arg(long)]
    findings_per_round: Option<usize>,

    /// Prioritization: severity, category or mixed (overrides ARENA_PRIORITIZE_BY)
    #[arg(long)]
    prioritize_by: Option<PrioritizeBy>,

    /// Disable cross-referencing earlier outcomes
    #[arg(long, default_value_t = false)]
    no_progressive: bool,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn load_findings(path: &Path) -> Result<Vec<Finding>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading findings from {}", path.display()))?;
    parse_findings(&content).with_context(|| format!("parsing findings in {}", path.display()))
}

fn load_contract(path: Option<&Path>) -> Result<Contract> {
    let Some(path) = path else {
        return Ok(Contract::untitled());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading contract from {}", path.display()))?;
    Contract::from_json(&content)
        .with_context(|| format!("parsing contract in {}", path.display()))
}

fn build_config(args: &Args) -> Result<ArenaConfig> {
    let mut config = match &args.config {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };
    config.apply_env_overrides();

    if let Some(n) = args.max_rounds {
        config.max_rounds = n;
    }
    if let Some(n) = args.findings_per_round {
        config.findings_per_round = n;
    }
    if let Some(by) = args.prioritize_by {
        config.prioritize_by = by;
    }
    if args.no_progressive {
        config.enable_progressive_debate = false;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("debate_arena=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&args)?;
    let findings = load_findings(&args.findings)?;
    let contract = load_contract(args.contract.as_deref())?;

    let arena = DebateArena::new(config).with_observer(Arc::new(TracingObserver));
    let output = arena.run(&findings, &contract).await?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);
    Ok(())
}
