//! Snapshot normalization: clamp, default, flag.
//!
//! Collectors deliver whatever they could see; this module turns that into
//! canonical values plus field warnings. Total: it never fails, and every
//! adjustment it makes is recorded so the consumer can render a neutral
//! state instead of a misleading number.

use workpulse_core::{
    CandidateId, FieldWarning, MemberId, PriorCounts, RawPriorCounts, RawRiskCandidate,
    RawScopeData, RawSprint, RawWorkloadEntry, RiskCandidate, RiskKind, Severity, SprintSnapshot,
    WorkloadEntry,
};

/// One scope's data after normalization, with the warnings that got it there.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedScope {
    /// Canonical sprint counters.
    pub sprint: SprintSnapshot,

    /// Canonical risk candidates.
    pub risks: Vec<RiskCandidate>,

    /// Canonical workload entries.
    pub workload: Vec<WorkloadEntry>,

    /// Prior-period risk counts.
    pub prior_risk_counts: PriorCounts,

    /// Everything that had to be clamped, defaulted, or flagged.
    pub warnings: Vec<FieldWarning>,
}

/// Normalize one scope's raw data.
pub fn normalize_scope(raw: &RawScopeData) -> NormalizedScope {
    let mut warnings = Vec::new();

    let sprint = match &raw.sprint {
        Some(sprint) => normalize_sprint(sprint, &mut warnings),
        None => {
            warnings.push(FieldWarning::missing("sprint"));
            normalize_sprint(&RawSprint::default(), &mut warnings)
        }
    };

    let risks = raw
        .risks
        .iter()
        .enumerate()
        .map(|(index, candidate)| normalize_candidate(candidate, index, &mut warnings))
        .collect();

    let workload = raw
        .workload
        .iter()
        .enumerate()
        .map(|(index, entry)| normalize_member(entry, index, &mut warnings))
        .collect();

    NormalizedScope {
        sprint,
        risks,
        workload,
        prior_risk_counts: normalize_prior_counts(&raw.prior_risk_counts),
        warnings,
    }
}

fn normalize_sprint(raw: &RawSprint, warnings: &mut Vec<FieldWarning>) -> SprintSnapshot {
    let name = match &raw.name {
        Some(name) => name.clone(),
        None => {
            warnings.push(FieldWarning::missing("sprint.name"));
            "unnamed".to_string()
        }
    };

    let total_points = non_negative(raw.total_points, "sprint.total_points", warnings);
    let completed_points = non_negative(raw.completed_points, "sprint.completed_points", warnings);
    let total_days = non_negative(raw.total_days, "sprint.total_days", warnings);
    let remaining_days = non_negative(raw.remaining_days, "sprint.remaining_days", warnings);
    let current_velocity = non_negative(raw.current_velocity, "sprint.current_velocity", warnings);
    let previous_velocity =
        non_negative(raw.previous_velocity, "sprint.previous_velocity", warnings);

    let completed_points = clamp_upper(
        completed_points,
        total_points,
        "sprint.completed_points",
        warnings,
    );
    let remaining_days = clamp_upper(remaining_days, total_days, "sprint.remaining_days", warnings);

    if total_points == 0.0 {
        warnings.push(FieldWarning::insufficient("sprint.total_points"));
    }
    if total_days == 0.0 {
        warnings.push(FieldWarning::insufficient("sprint.total_days"));
    }

    SprintSnapshot {
        name,
        total_points,
        completed_points,
        total_days,
        remaining_days,
        current_velocity,
        previous_velocity,
    }
}

fn normalize_candidate(
    raw: &RawRiskCandidate,
    index: usize,
    warnings: &mut Vec<FieldWarning>,
) -> RiskCandidate {
    let id = match &raw.id {
        Some(id) => CandidateId::new(id.clone()),
        None => {
            warnings.push(FieldWarning::missing(format!("risks[{index}].id")));
            CandidateId::new(format!("{}-{}", raw.kind.as_str(), index))
        }
    };

    let wait_measure = non_negative(
        raw.wait_measure,
        &format!("risks[{index}].wait_measure"),
        warnings,
    );

    let severity_hint = match raw.severity_hint {
        Some(severity) => severity,
        None => {
            warnings.push(FieldWarning::missing(format!(
                "risks[{index}].severity_hint"
            )));
            default_severity(raw.kind)
        }
    };

    RiskCandidate {
        id,
        kind: raw.kind,
        title: raw
            .title
            .clone()
            .unwrap_or_else(|| raw.kind.as_str().to_string()),
        wait_measure,
        severity_hint,
        mitigation: raw.mitigation.clone(),
    }
}

fn normalize_member(
    raw: &RawWorkloadEntry,
    index: usize,
    warnings: &mut Vec<FieldWarning>,
) -> WorkloadEntry {
    let member = match &raw.member {
        Some(member) => MemberId::new(member.clone()),
        None => {
            warnings.push(FieldWarning::missing(format!("workload[{index}].member")));
            MemberId::new(format!("member-{index}"))
        }
    };

    let assigned_points = non_negative(
        raw.assigned_points,
        &format!("workload[{index}].assigned_points"),
        warnings,
    );
    let rolling_avg_points = non_negative(
        raw.rolling_avg_points,
        &format!("workload[{index}].rolling_avg_points"),
        warnings,
    );

    WorkloadEntry {
        member,
        name: raw.name.clone().unwrap_or_else(|| format!("Member {index}")),
        assigned_points,
        rolling_avg_points,
    }
}

fn normalize_prior_counts(raw: &RawPriorCounts) -> PriorCounts {
    PriorCounts {
        critical: raw.critical.unwrap_or(0),
        high: raw.high.unwrap_or(0),
        medium: raw.medium.unwrap_or(0),
        low: raw.low.unwrap_or(0),
    }
}

/// Severity assumed when the collector sends none, by risk kind.
fn default_severity(kind: RiskKind) -> Severity {
    match kind {
        RiskKind::Incident => Severity::Critical,
        RiskKind::StuckReview | RiskKind::Overdue => Severity::High,
        RiskKind::StaleTicket => Severity::Medium,
    }
}

/// Missing or non-finite -> 0 with a missing-defaulted warning;
/// negative -> 0 with a clamped warning.
fn non_negative(value: Option<f64>, field: &str, warnings: &mut Vec<FieldWarning>) -> f64 {
    match value {
        None => {
            warnings.push(FieldWarning::missing(field));
            0.0
        }
        Some(v) if !v.is_finite() => {
            warnings.push(FieldWarning::missing(field));
            0.0
        }
        Some(v) if v < 0.0 => {
            warnings.push(FieldWarning::clamped(field, v, 0.0));
            0.0
        }
        Some(v) => v,
    }
}

/// Clamp `value` down to `limit`, recording a warning when it moves.
fn clamp_upper(value: f64, limit: f64, field: &str, warnings: &mut Vec<FieldWarning>) -> f64 {
    if value > limit {
        warnings.push(FieldWarning::clamped(field, value, limit));
        limit
    } else {
        value
    }
}
