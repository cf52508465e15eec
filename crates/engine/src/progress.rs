//! Sprint progress derivation.
//!
//! Completion vs. elapsed time, velocity trend, the buffer-based status
//! classification, and a completion prediction from the current pace.

use workpulse_core::{SprintSnapshot, SprintStatus, SprintView, TrendDelta};

/// Percentage points completion may lag elapsed time and stay on track.
const ON_TRACK_BUFFER: i64 = 10;

/// Beyond this lag the sprint is off track.
const AT_RISK_BUFFER: i64 = 20;

/// Committed scope above `current_velocity * this` flags the sprint scope.
const SCOPE_RISK_FACTOR: f64 = 1.1;

/// Derive the sprint progress section from canonical counters.
///
/// Total function: zero denominators degrade to 0 or `n/a` (the normalizer
/// already flagged them), never to a panic.
pub fn evaluate(sprint: &SprintSnapshot) -> SprintView {
    let completion_percent = ratio_percent(sprint.completed_points, sprint.total_points);
    let elapsed_days = sprint.total_days - sprint.remaining_days;
    let elapsed_percent = ratio_percent(elapsed_days, sprint.total_days);

    let velocity_change = if sprint.previous_velocity == 0.0 {
        TrendDelta::NotAvailable
    } else {
        let change = (sprint.current_velocity - sprint.previous_velocity)
            / sprint.previous_velocity
            * 100.0;
        TrendDelta::Percent(change.round() as i64)
    };

    let avg_points_per_day = sprint.completed_points / elapsed_days.max(1.0);
    let predicted_percent = if sprint.total_points == 0.0 {
        0
    } else {
        let projected = avg_points_per_day * sprint.remaining_days + sprint.completed_points;
        (projected / sprint.total_points * 100.0)
            .round()
            .clamp(0.0, 100.0) as u8
    };

    SprintView {
        name: sprint.name.clone(),
        completion_percent,
        elapsed_percent,
        velocity_change,
        status: classify(completion_percent, elapsed_percent),
        predicted_percent,
        scope_at_risk: sprint.total_points > sprint.current_velocity * SCOPE_RISK_FACTOR,
        remaining_points: sprint.total_points - sprint.completed_points,
        avg_points_per_day,
    }
}

/// `round(numerator / denominator * 100)`; 0 when the denominator is zero.
fn ratio_percent(numerator: f64, denominator: f64) -> u8 {
    if denominator == 0.0 {
        0
    } else {
        (numerator / denominator * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Buffer-based classification; boundary values land in the better bucket.
fn classify(completion_percent: u8, elapsed_percent: u8) -> SprintStatus {
    let completion = completion_percent as i64;
    let elapsed = elapsed_percent as i64;
    if completion >= elapsed - ON_TRACK_BUFFER {
        SprintStatus::OnTrack
    } else if completion >= elapsed - AT_RISK_BUFFER {
        SprintStatus::AtRisk
    } else {
        SprintStatus::OffTrack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprint(total: f64, completed: f64, total_days: f64, remaining: f64) -> SprintSnapshot {
        SprintSnapshot {
            name: "Sprint 14".to_string(),
            total_points: total,
            completed_points: completed,
            total_days,
            remaining_days: remaining,
            current_velocity: 82.0,
            previous_velocity: 78.0,
        }
    }

    #[test]
    fn test_reference_sprint_percentages() {
        let view = evaluate(&sprint(89.0, 62.0, 14.0, 4.0));
        assert_eq!(view.completion_percent, 70);
        assert_eq!(view.elapsed_percent, 71);
        assert_eq!(view.remaining_points, 27.0);
        // 70 >= 71 - 10, so the buffer keeps this sprint on track.
        assert_eq!(view.status, SprintStatus::OnTrack);
    }

    #[test]
    fn test_completion_percent_bounded() {
        for completed in [0.0, 10.0, 44.5, 89.0] {
            let view = evaluate(&sprint(89.0, completed, 14.0, 4.0));
            assert!(view.completion_percent <= 100);
        }
    }

    #[test]
    fn test_completion_monotonic_in_completed_points() {
        let less = evaluate(&sprint(89.0, 30.0, 14.0, 4.0));
        let more = evaluate(&sprint(89.0, 45.0, 14.0, 4.0));
        assert!(more.completion_percent >= less.completion_percent);
    }

    #[test]
    fn test_zero_total_points_degrades_to_zero() {
        let view = evaluate(&sprint(0.0, 0.0, 14.0, 4.0));
        assert_eq!(view.completion_percent, 0);
        assert_eq!(view.predicted_percent, 0);
    }

    #[test]
    fn test_zero_total_days_degrades_to_zero() {
        let view = evaluate(&sprint(89.0, 62.0, 0.0, 0.0));
        assert_eq!(view.elapsed_percent, 0);
    }

    #[test]
    fn test_no_velocity_baseline_is_not_available() {
        let mut snapshot = sprint(89.0, 62.0, 14.0, 4.0);
        snapshot.previous_velocity = 0.0;
        let view = evaluate(&snapshot);
        assert_eq!(view.velocity_change, TrendDelta::NotAvailable);
    }

    #[test]
    fn test_velocity_change_rounds() {
        // (82 - 78) / 78 = 5.13%
        let view = evaluate(&sprint(89.0, 62.0, 14.0, 4.0));
        assert_eq!(view.velocity_change, TrendDelta::Percent(5));
    }

    #[test]
    fn test_status_boundary_is_on_track() {
        // Completion exactly buffer points behind elapsed time.
        assert_eq!(classify(61, 71), SprintStatus::OnTrack);
        assert_eq!(classify(60, 71), SprintStatus::AtRisk);
    }

    #[test]
    fn test_status_at_risk_boundary_is_at_risk() {
        assert_eq!(classify(51, 71), SprintStatus::AtRisk);
        assert_eq!(classify(50, 71), SprintStatus::OffTrack);
    }

    #[test]
    fn test_prediction_on_day_zero_does_not_divide_by_zero() {
        // Nothing elapsed yet: pace divides by max(1, 0).
        let view = evaluate(&sprint(89.0, 0.0, 14.0, 14.0));
        assert_eq!(view.avg_points_per_day, 0.0);
        assert_eq!(view.predicted_percent, 0);
    }

    #[test]
    fn test_prediction_clamps_to_one_hundred() {
        // 60 points in 10 days, 4 days left: projection overshoots the total.
        let view = evaluate(&sprint(70.0, 60.0, 14.0, 4.0));
        assert_eq!(view.predicted_percent, 100);
    }

    #[test]
    fn test_reference_sprint_prediction() {
        // 62 pts over 10 days = 6.2/day; 6.2 * 4 + 62 = 86.8 of 89 -> 98%.
        let view = evaluate(&sprint(89.0, 62.0, 14.0, 4.0));
        assert_eq!(view.avg_points_per_day, 6.2);
        assert_eq!(view.predicted_percent, 98);
    }

    #[test]
    fn test_scope_at_risk_thresholds() {
        let mut snapshot = sprint(89.0, 62.0, 14.0, 4.0);
        // 89 > 82 * 1.1 = 90.2 is false.
        assert!(!evaluate(&snapshot).scope_at_risk);
        snapshot.current_velocity = 78.0;
        // 89 > 85.8.
        assert!(evaluate(&snapshot).scope_at_risk);
    }
}
