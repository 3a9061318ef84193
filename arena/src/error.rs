//! Arena error types
//!
//! The Arena performs no local recovery: advocate faults are wrapped once
//! with the side and finding that raised them, then returned to the caller.

use std::path::PathBuf;
use thiserror::Error;

use crate::advocate::Side;

/// Result type alias for arena operations
pub type ArenaResult<T> = Result<T, ArenaError>;

/// Errors raised while configuring or running the debate arena
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("{side} advocate failed on finding {finding_id}: {reason}")]
    AdvocateFailed {
        side: Side,
        finding_id: String,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to parse input: {0}")]
    InputParse(#[from] serde_json::Error),
}

impl ArenaError {
    /// Build an advocate failure for the given side and finding
    pub fn advocate(side: Side, finding_id: &str, reason: impl Into<String>) -> Self {
        Self::AdvocateFailed {
            side,
            finding_id: finding_id.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the error came from argument generation
    pub fn is_advocate_failure(&self) -> bool {
        matches!(self, Self::AdvocateFailed { .. })
    }
}
