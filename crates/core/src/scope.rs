//! Scope tag - team-wide vs. personal metrics.

use serde::{Deserialize, Serialize};

/// Whether derived metrics represent the whole team or a single individual.
///
/// Purely a partitioning tag: it selects which section of the snapshot is
/// read, and the formulas do not fork on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Metrics over the whole team's data
    Team,
    /// Metrics over one member's data
    Personal,
}

impl Scope {
    /// String form used in snapshots and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Team => "team",
            Scope::Personal => "personal",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a scope string cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("unknown scope '{0}', expected 'team' or 'personal'")]
pub struct ParseScopeError(String);

impl std::str::FromStr for Scope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "team" => Ok(Scope::Team),
            "personal" => Ok(Scope::Personal),
            other => Err(ParseScopeError(other.to_string())),
        }
    }
}
