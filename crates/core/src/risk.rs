//! Risk candidates and severity tiers.

use serde::{Deserialize, Serialize};

use crate::id::CandidateId;

/// The kinds of risk the engine evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskKind {
    /// A ticket with no activity for too long
    StaleTicket,
    /// A pull request waiting on review
    StuckReview,
    /// An active incident
    Incident,
    /// A high-priority item past its due date
    Overdue,
}

impl RiskKind {
    /// String form (kebab-case, as in snapshots).
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskKind::StaleTicket => "stale-ticket",
            RiskKind::StuckReview => "stuck-review",
            RiskKind::Incident => "incident",
            RiskKind::Overdue => "overdue",
        }
    }
}

impl std::fmt::Display for RiskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Severity tier of a risk.
///
/// Ranking order: critical > high > medium > low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must be acted on now
    Critical,
    /// Needs attention this sprint
    High,
    /// Worth watching
    Medium,
    /// Informational
    Low,
}

impl Severity {
    /// All severities, highest first.
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Rank used for ordering; lower ranks sort first.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }

    /// String form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A canonical risk candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskCandidate {
    /// Tracker-issued identifier
    pub id: CandidateId,

    /// Kind of risk
    pub kind: RiskKind,

    /// Short human title
    pub title: String,

    /// Elapsed hours or item count, depending on kind; non-negative
    pub wait_measure: f64,

    /// Severity estimate the scorer starts from
    pub severity_hint: Severity,

    /// Suggested mitigation, passed through to the view
    pub mitigation: Option<String>,
}

/// Prior-period per-severity counts used for trend deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorCounts {
    /// Critical risks in the prior period
    pub critical: u64,

    /// High risks in the prior period
    pub high: u64,

    /// Medium risks in the prior period
    pub medium: u64,

    /// Low risks in the prior period
    pub low: u64,
}

impl PriorCounts {
    /// Count for one severity tier.
    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_rank_order() {
        assert!(Severity::Critical.rank() < Severity::High.rank());
        assert!(Severity::High.rank() < Severity::Medium.rank());
        assert!(Severity::Medium.rank() < Severity::Low.rank());
    }

    #[test]
    fn test_severity_all_is_highest_first() {
        let ranks: Vec<u8> = Severity::ALL.iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }
}
