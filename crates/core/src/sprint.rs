//! Canonical sprint snapshot.

use serde::Serialize;

/// Sprint counters after normalization.
///
/// Invariants: every numeric field is non-negative and finite,
/// `completed_points <= total_points`, `remaining_days <= total_days`.
/// A zero `total_points` or `total_days` is legal but flagged upstream as
/// insufficient data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SprintSnapshot {
    /// Sprint name
    pub name: String,

    /// Committed story points
    pub total_points: f64,

    /// Completed story points
    pub completed_points: f64,

    /// Sprint length in days
    pub total_days: f64,

    /// Days left in the sprint
    pub remaining_days: f64,

    /// Current velocity in points per sprint
    pub current_velocity: f64,

    /// Previous sprint's velocity
    pub previous_velocity: f64,
}
