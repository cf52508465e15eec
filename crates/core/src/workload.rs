//! Per-member workload entries and load classification.

use serde::Serialize;

use crate::id::MemberId;

/// A canonical workload entry for one member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadEntry {
    /// Member identifier
    pub member: MemberId,

    /// Display name
    pub name: String,

    /// Points assigned this sprint; non-negative
    pub assigned_points: f64,

    /// Rolling average over recent sprints; non-negative
    pub rolling_avg_points: f64,
}

/// Load classification derived from the load ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadClassification {
    /// At or below usual capacity
    Balanced,
    /// Noticeably above the rolling average
    High,
    /// Well past capacity; a rebalance candidate
    Overloaded,
}

impl LoadClassification {
    /// Display label, as shown on the dashboard badge.
    pub fn label(&self) -> &'static str {
        match self {
            LoadClassification::Balanced => "Balanced",
            LoadClassification::High => "High",
            LoadClassification::Overloaded => "Overloaded",
        }
    }
}

impl std::fmt::Display for LoadClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}
