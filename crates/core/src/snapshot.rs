//! Raw snapshot contract delivered by collectors.
//!
//! Every field a collector might not see is optional. The normalizer turns
//! whatever arrives into canonical values plus field warnings; nothing in
//! this module is trusted downstream without passing through it.

use serde::{Deserialize, Serialize};

use crate::risk::{RiskKind, Severity};
use crate::Time;

/// A point-in-time bundle of sprint, ticket, PR, and team data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSnapshot {
    /// When the collector captured the data
    pub captured_at: Option<Time>,

    /// Team-wide section
    pub team: Option<RawScopeData>,

    /// Personal section
    pub personal: Option<RawScopeData>,
}

/// One scope's worth of raw data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawScopeData {
    /// Sprint counters
    pub sprint: Option<RawSprint>,

    /// Risk candidates (stale tickets, stuck reviews, incidents, overdue items)
    pub risks: Vec<RawRiskCandidate>,

    /// Per-member workload entries
    pub workload: Vec<RawWorkloadEntry>,

    /// Prior-period risk counts for trend deltas, supplied by the caller
    pub prior_risk_counts: RawPriorCounts,
}

/// Raw sprint counters as delivered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSprint {
    /// Sprint name
    pub name: Option<String>,

    /// Committed story points
    pub total_points: Option<f64>,

    /// Completed story points
    pub completed_points: Option<f64>,

    /// Sprint length in days
    pub total_days: Option<f64>,

    /// Days left in the sprint
    pub remaining_days: Option<f64>,

    /// Current sprint velocity in points
    pub current_velocity: Option<f64>,

    /// Previous sprint velocity in points
    pub previous_velocity: Option<f64>,
}

/// A raw risk candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRiskCandidate {
    /// Tracker-issued identifier
    #[serde(default)]
    pub id: Option<String>,

    /// What kind of risk this is
    pub kind: RiskKind,

    /// Short human title
    #[serde(default)]
    pub title: Option<String>,

    /// Elapsed hours or item count, depending on kind
    #[serde(default)]
    pub wait_measure: Option<f64>,

    /// Collector's severity estimate
    #[serde(default)]
    pub severity_hint: Option<Severity>,

    /// Suggested mitigation, passed through to the view
    #[serde(default)]
    pub mitigation: Option<String>,
}

/// A raw per-member workload entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawWorkloadEntry {
    /// Member identifier
    pub member: Option<String>,

    /// Display name
    pub name: Option<String>,

    /// Points assigned in the current sprint
    pub assigned_points: Option<f64>,

    /// Rolling average over recent sprints
    pub rolling_avg_points: Option<f64>,
}

/// Prior-period per-severity risk counts.
///
/// Absent counts simply mean no baseline; the corresponding trend deltas
/// degrade to `n/a` without a warning.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPriorCounts {
    /// Critical risks in the prior period
    pub critical: Option<u64>,

    /// High risks in the prior period
    pub high: Option<u64>,

    /// Medium risks in the prior period
    pub medium: Option<u64>,

    /// Low risks in the prior period
    pub low: Option<u64>,
}
