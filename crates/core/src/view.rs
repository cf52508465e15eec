//! Derived view model consumed by the rendering layer.
//!
//! Everything here is output-only: built fresh by the rollup for one
//! snapshot, tagged with its scope, and never mutated in place.

use serde::{Serialize, Serializer};

use crate::id::{CandidateId, MemberId};
use crate::risk::{RiskKind, Severity};
use crate::scope::Scope;
use crate::warning::FieldWarning;
use crate::workload::LoadClassification;

/// Sprint status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SprintStatus {
    /// Completion keeps pace with elapsed time, within the buffer
    OnTrack,
    /// Completion lags elapsed time by more than the buffer
    AtRisk,
    /// Completion lags badly
    OffTrack,
}

impl SprintStatus {
    /// Display label, as shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            SprintStatus::OnTrack => "On Track",
            SprintStatus::AtRisk => "At Risk",
            SprintStatus::OffTrack => "Off Track",
        }
    }
}

/// A percent change against a prior period, or `n/a` when there is no
/// baseline to compare against.
///
/// Serializes as a bare number or the string `"n/a"`, so a missing baseline
/// can never read as "no change".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDelta {
    /// Rounded percent change
    Percent(i64),
    /// No baseline; distinct from zero change
    NotAvailable,
}

impl Serialize for TrendDelta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TrendDelta::Percent(value) => serializer.serialize_i64(*value),
            TrendDelta::NotAvailable => serializer.serialize_str("n/a"),
        }
    }
}

impl std::fmt::Display for TrendDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendDelta::Percent(value) => write!(f, "{:+}%", value),
            TrendDelta::NotAvailable => f.write_str("n/a"),
        }
    }
}

/// Derived sprint progress figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SprintView {
    /// Sprint name
    pub name: String,

    /// Completed points as a rounded percentage of committed points
    pub completion_percent: u8,

    /// Elapsed time as a rounded percentage of the sprint length
    pub elapsed_percent: u8,

    /// Velocity change vs. the previous sprint
    pub velocity_change: TrendDelta,

    /// Status classification
    pub status: SprintStatus,

    /// Predicted completion percentage at the end of the sprint
    pub predicted_percent: u8,

    /// Whether committed scope exceeds what current velocity supports
    pub scope_at_risk: bool,

    /// Points still open
    pub remaining_points: f64,

    /// Average completed points per elapsed day
    pub avg_points_per_day: f64,
}

/// A scored and ranked risk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRisk {
    /// Tracker-issued identifier
    pub id: CandidateId,

    /// Kind of risk
    pub kind: RiskKind,

    /// Short human title
    pub title: String,

    /// Final severity tier
    pub severity: Severity,

    /// Normalized impact magnitude, 0..=100
    pub impact_score: u8,

    /// Suggested mitigation
    pub mitigation: Option<String>,
}

/// Current count and trend for one severity tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeverityTrend {
    /// Severity tier
    pub severity: Severity,

    /// Risks at this tier in the current snapshot
    pub count: u64,

    /// Change vs. the prior-period count
    pub trend: TrendDelta,
}

/// Derived risk figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskView {
    /// Risks ranked by severity, impact score, then id
    pub ranked: Vec<RankedRisk>,

    /// Per-severity counts with trend deltas, critical first
    pub counts: Vec<SeverityTrend>,
}

/// One member's derived load figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberLoad {
    /// Member identifier
    pub member: MemberId,

    /// Display name
    pub name: String,

    /// Points assigned this sprint
    pub assigned_points: f64,

    /// Rolling average over recent sprints
    pub rolling_avg_points: f64,

    /// Assigned points over the rolling average
    pub load_ratio: f64,

    /// Classification of the ratio
    pub classification: LoadClassification,
}

/// Advisory rebalancing proposal. Mutates no assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RebalanceSuggestion {
    /// Member to take points from
    pub from: MemberId,

    /// Member to give points to
    pub to: MemberId,

    /// Whole points to move
    pub points: u32,

    /// Human-readable summary
    pub summary: String,
}

/// Derived workload figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadView {
    /// Per-member load, in input order
    pub members: Vec<MemberLoad>,

    /// Number of overloaded members
    pub overloaded_count: usize,

    /// Rebalancing proposal, when imbalance was detected
    pub suggestion: Option<RebalanceSuggestion>,
}

/// The aggregate, scope-tagged output of one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    /// Which scope this view describes
    pub scope: Scope,

    /// Sprint progress section
    pub sprint: SprintView,

    /// Risk section
    pub risk: RiskView,

    /// Workload section
    pub workload: WorkloadView,

    /// Normalization warnings, for the consumer to render a neutral state
    pub warnings: Vec<FieldWarning>,
}
