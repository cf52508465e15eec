//! Workload classification and rebalance suggestions.

use workpulse_core::{
    LoadClassification, MemberLoad, RebalanceSuggestion, WorkloadEntry, WorkloadView,
};

/// Ratio at or above which a member is overloaded.
const OVERLOADED_RATIO: f64 = 1.3;

/// Ratio at or above which a member's load is high.
const HIGH_RATIO: f64 = 1.1;

/// Half-width of the target band around the team average, as a fraction.
const REBALANCE_BAND: f64 = 0.10;

/// Derive per-member load figures and, when warranted, a rebalance proposal.
pub fn balance(entries: &[WorkloadEntry]) -> WorkloadView {
    let members: Vec<MemberLoad> = entries.iter().map(member_load).collect();
    let overloaded_count = members
        .iter()
        .filter(|m| m.classification == LoadClassification::Overloaded)
        .count();
    let suggestion = suggest(&members);

    WorkloadView {
        members,
        overloaded_count,
        suggestion,
    }
}

fn member_load(entry: &WorkloadEntry) -> MemberLoad {
    let load_ratio = entry.assigned_points / entry.rolling_avg_points.max(1.0);
    MemberLoad {
        member: entry.member.clone(),
        name: entry.name.clone(),
        assigned_points: entry.assigned_points,
        rolling_avg_points: entry.rolling_avg_points,
        load_ratio,
        classification: classify(load_ratio),
    }
}

/// Threshold classification; boundary ratios belong to the higher tier.
fn classify(ratio: f64) -> LoadClassification {
    if ratio >= OVERLOADED_RATIO {
        LoadClassification::Overloaded
    } else if ratio >= HIGH_RATIO {
        LoadClassification::High
    } else {
        LoadClassification::Balanced
    }
}

/// Propose moving points from the most-overloaded member to the least-loaded
/// one, when both exist. Advisory only: no assignment is touched.
///
/// The quantity is the smallest whole transfer that brings the donor inside
/// the band around the team-average assigned points, clamped so the receiver
/// stays inside it too. A transfer between two members leaves the average
/// itself unchanged, so both checks are closed-form.
fn suggest(members: &[MemberLoad]) -> Option<RebalanceSuggestion> {
    let donor = members
        .iter()
        .filter(|m| m.classification == LoadClassification::Overloaded)
        .max_by(|a, b| a.load_ratio.total_cmp(&b.load_ratio))?;
    let receiver = members
        .iter()
        .filter(|m| m.load_ratio < 1.0)
        .min_by(|a, b| a.load_ratio.total_cmp(&b.load_ratio))?;

    let team_avg = members.iter().map(|m| m.assigned_points).sum::<f64>() / members.len() as f64;
    let upper = team_avg * (1.0 + REBALANCE_BAND);

    let needed = (donor.assigned_points - upper).max(0.0);
    let room = (upper - receiver.assigned_points).max(0.0);
    let points = needed.ceil().min(room.floor()).max(1.0) as u32;

    let summary = format!(
        "{} is at {:.0} pts against a {:.0} pt team average; move {} pts to {}",
        donor.name, donor.assigned_points, team_avg, points, receiver.name,
    );

    Some(RebalanceSuggestion {
        from: donor.member.clone(),
        to: receiver.member.clone(),
        points,
        summary,
    })
}
