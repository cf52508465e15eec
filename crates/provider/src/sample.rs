//! Built-in sample snapshot.
//!
//! The demo dataset the dashboard ships with: Sprint 14, five team members,
//! four team risks and two personal ones. It goes through the same input
//! contract as any collector, which keeps demos, the CLI, and fixture-based
//! tests on the real code path.

use async_trait::async_trait;
use chrono::Utc;
use workpulse_core::{
    RawPriorCounts, RawRiskCandidate, RawScopeData, RawSnapshot, RawSprint, RawWorkloadEntry,
    RiskKind, Severity,
};

use super::{Result, SnapshotProvider};

/// Serves a fixed demo snapshot.
#[derive(Debug, Default)]
pub struct SampleProvider;

impl SampleProvider {
    /// The demo snapshot, as a plain value.
    pub fn snapshot() -> RawSnapshot {
        RawSnapshot {
            captured_at: Some(Utc::now()),
            team: Some(team_scope()),
            personal: Some(personal_scope()),
        }
    }
}

#[async_trait]
impl SnapshotProvider for SampleProvider {
    fn source(&self) -> &str {
        "sample"
    }

    async fn fetch(&self) -> Result<RawSnapshot> {
        Ok(Self::snapshot())
    }
}

fn team_scope() -> RawScopeData {
    RawScopeData {
        sprint: Some(sprint("Sprint 14", 89.0, 62.0, 82.0, 78.0)),
        risks: vec![
            candidate(
                "INC-301",
                RiskKind::Incident,
                "API service degradation",
                6.0,
                Severity::Critical,
                "Scale up instances, investigate bottleneck",
            ),
            candidate(
                "PR-198",
                RiskKind::StuckReview,
                "3 PRs stuck in review",
                72.0,
                Severity::High,
                "Assign additional reviewers",
            ),
            candidate(
                "WORK-210",
                RiskKind::Overdue,
                "Payment flow rework past due",
                48.0,
                Severity::High,
                "Redistribute 2 tasks to frontend team",
            ),
            candidate(
                "WORK-145",
                RiskKind::StaleTicket,
                "Sprint scope at risk",
                96.0,
                Severity::Medium,
                "Consider descoping 2 low-priority items",
            ),
        ],
        workload: vec![
            member("sarah.chen", "Sarah Chen", 18.0, 15.0),
            member("john.doe", "John Doe", 14.0, 14.0),
            member("mike.johnson", "Mike Johnson", 21.0, 16.0),
            member("emily.davis", "Emily Davis", 10.0, 12.0),
            member("alex.rivera", "Alex Rivera", 8.0, 10.0),
        ],
        prior_risk_counts: RawPriorCounts {
            critical: Some(3),
            high: Some(2),
            medium: Some(3),
            low: Some(0),
        },
    }
}

fn personal_scope() -> RawScopeData {
    RawScopeData {
        sprint: Some(sprint("Sprint 14", 21.0, 14.0, 18.0, 16.0)),
        risks: vec![
            candidate(
                "PR-234",
                RiskKind::StuckReview,
                "PR #234 needs review",
                48.0,
                Severity::High,
                "Request review from team lead",
            ),
            candidate(
                "WORK-145",
                RiskKind::Overdue,
                "WORK-145 approaching deadline",
                36.0,
                Severity::Medium,
                "Break into smaller tasks or extend",
            ),
        ],
        workload: Vec::new(),
        prior_risk_counts: RawPriorCounts {
            critical: Some(1),
            high: Some(1),
            medium: Some(2),
            low: Some(0),
        },
    }
}

fn sprint(name: &str, total: f64, completed: f64, velocity: f64, previous: f64) -> RawSprint {
    RawSprint {
        name: Some(name.to_string()),
        total_points: Some(total),
        completed_points: Some(completed),
        total_days: Some(14.0),
        remaining_days: Some(4.0),
        current_velocity: Some(velocity),
        previous_velocity: Some(previous),
    }
}

fn candidate(
    id: &str,
    kind: RiskKind,
    title: &str,
    wait_measure: f64,
    severity: Severity,
    mitigation: &str,
) -> RawRiskCandidate {
    RawRiskCandidate {
        id: Some(id.to_string()),
        kind,
        title: Some(title.to_string()),
        wait_measure: Some(wait_measure),
        severity_hint: Some(severity),
        mitigation: Some(mitigation.to_string()),
    }
}

fn member(id: &str, name: &str, assigned: f64, avg: f64) -> RawWorkloadEntry {
    RawWorkloadEntry {
        member: Some(id.to_string()),
        name: Some(name.to_string()),
        assigned_points: Some(assigned),
        rolling_avg_points: Some(avg),
    }
}
