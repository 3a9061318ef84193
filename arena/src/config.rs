//! Arena configuration.
//!
//! Precedence, lowest first: defaults, TOML file, `ARENA_*` environment
//! variables, then per-run overrides supplied by the caller.
//!
//! ```toml
//! max_rounds = 3
//! findings_per_round = 4
//! prioritize_by = "mixed"
//! enable_progressive_debate = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{ArenaError, ArenaResult};
use crate::prioritize::PrioritizeBy;

/// Options recognized by the debate arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Maximum number of rounds.
    pub max_rounds: u32,
    /// Findings debated per round.
    pub findings_per_round: usize,
    /// Sort key used to select findings.
    pub prioritize_by: PrioritizeBy,
    /// Cross-reference related prior outcomes in the devil's evidence.
    pub enable_progressive_debate: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            max_rounds: 2,
            findings_per_round: 5,
            prioritize_by: PrioritizeBy::Severity,
            enable_progressive_debate: true,
        }
    }
}

impl ArenaConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Parse a TOML document; missing keys take defaults.
    pub fn from_toml_str(content: &str) -> ArenaResult<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ArenaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "Loaded arena config");
        Ok(config)
    }

    /// Apply `ARENA_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup. Unparseable values are ignored
    /// with a warning.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("ARENA_MAX_ROUNDS") {
            match val.trim().parse() {
                Ok(n) => self.max_rounds = n,
                Err(_) => warn!(value = %val, "Ignoring invalid ARENA_MAX_ROUNDS"),
            }
        }
        if let Some(val) = lookup("ARENA_FINDINGS_PER_ROUND") {
            match val.trim().parse() {
                Ok(n) => self.findings_per_round = n,
                Err(_) => warn!(value = %val, "Ignoring invalid ARENA_FINDINGS_PER_ROUND"),
            }
        }
        if let Some(val) = lookup("ARENA_PRIORITIZE_BY") {
            match val.parse() {
                Ok(by) => self.prioritize_by = by,
                Err(e) => warn!(value = %val, "Ignoring ARENA_PRIORITIZE_BY: {}", e),
            }
        }
        if let Some(val) = lookup("ARENA_PROGRESSIVE_DEBATE") {
            match parse_bool(&val) {
                Some(enabled) => self.enable_progressive_debate = enabled,
                None => warn!(value = %val, "Ignoring invalid ARENA_PROGRESSIVE_DEBATE"),
            }
        }
    }

    /// Reject settings the arena cannot run with.
    pub fn validate(&self) -> ArenaResult<()> {
        if self.findings_per_round == 0 {
            return Err(ArenaError::InvalidConfig(
                "findings_per_round must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Most findings a single run will debate.
    pub fn capacity(&self) -> usize {
        (self.max_rounds as usize).saturating_mul(self.findings_per_round)
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ArenaConfig::default();
        assert_eq!(config.max_rounds, 2);
        assert_eq!(config.findings_per_round, 5);
        assert_eq!(config.prioritize_by, PrioritizeBy::Severity);
        assert!(config.enable_progressive_debate);
        assert_eq!(config.capacity(), 10);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ArenaConfig::from_toml_str("prioritize_by = \"mixed\"\nmax_rounds = 3\n").unwrap();
        assert_eq!(config.prioritize_by, PrioritizeBy::Mixed);
        assert_eq!(config.max_rounds, 3);
        assert_eq!(config.findings_per_round, 5);
        assert!(config.enable_progressive_debate);
    }

    #[test]
    fn test_bad_toml_is_error() {
        let err = ArenaConfig::from_toml_str("prioritize_by = \"loudest\"").unwrap_err();
        assert!(matches!(err, ArenaError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "findings_per_round = 2").unwrap();
        writeln!(file, "enable_progressive_debate = false").unwrap();

        let config = ArenaConfig::load(file.path()).unwrap();
        assert_eq!(config.findings_per_round, 2);
        assert!(!config.enable_progressive_debate);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ArenaConfig::load("/nonexistent/arena.toml").unwrap_err();
        assert!(matches!(err, ArenaError::Io { .. }));
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = ArenaConfig::default();
        config.apply_overrides_from(lookup(&[
            ("ARENA_MAX_ROUNDS", "4"),
            ("ARENA_FINDINGS_PER_ROUND", "3"),
            ("ARENA_PRIORITIZE_BY", "category"),
            ("ARENA_PROGRESSIVE_DEBATE", "no"),
        ]));
        assert_eq!(config.max_rounds, 4);
        assert_eq!(config.findings_per_round, 3);
        assert_eq!(config.prioritize_by, PrioritizeBy::Category);
        assert!(!config.enable_progressive_debate);
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = ArenaConfig::default();
        config.apply_overrides_from(lookup(&[
            ("ARENA_MAX_ROUNDS", "many"),
            ("ARENA_PRIORITIZE_BY", "loudest"),
            ("ARENA_PROGRESSIVE_DEBATE", "maybe"),
        ]));
        assert_eq!(config, ArenaConfig::default());
    }

    #[test]
    fn test_validate_rejects_empty_rounds() {
        let config = ArenaConfig {
            findings_per_round: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ArenaError::InvalidConfig(_))));
        assert!(ArenaConfig::default().validate().is_ok());
    }
}
