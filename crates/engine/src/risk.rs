//! Risk scoring, ranking, and severity counts.

use workpulse_core::{
    PriorCounts, RankedRisk, RiskCandidate, RiskView, Severity, SeverityTrend, TrendDelta,
};

/// Scoring ramp for one severity tier.
struct Ramp {
    /// Score with no wait at all
    floor: f64,
    /// Extra score available as the wait grows
    span: f64,
    /// Wait measure at which the ramp saturates
    saturation: f64,
}

/// Per-tier ramps, calibrated so the dashboard's sample data lands in its
/// displayed bands: incidents in the 90s, stuck reviews in the 70s-80s,
/// stale tickets in the 50s-60s.
fn ramp(severity: Severity) -> Ramp {
    match severity {
        Severity::Critical => Ramp {
            floor: 85.0,
            span: 15.0,
            saturation: 24.0,
        },
        Severity::High => Ramp {
            floor: 60.0,
            span: 40.0,
            saturation: 96.0,
        },
        Severity::Medium => Ramp {
            floor: 40.0,
            span: 40.0,
            saturation: 120.0,
        },
        Severity::Low => Ramp {
            floor: 10.0,
            span: 40.0,
            saturation: 168.0,
        },
    }
}

/// Impact score for one candidate: a linear ramp of the wait measure,
/// saturating at the tier's ceiling and never exceeding 100.
fn impact_score(severity: Severity, wait_measure: f64) -> u8 {
    let Ramp {
        floor,
        span,
        saturation,
    } = ramp(severity);
    let fraction = (wait_measure / saturation).min(1.0);
    (floor + span * fraction).round().min(100.0) as u8
}

/// Score, rank, and count a scope's risk candidates.
///
/// The ranking is a total order: severity rank, then impact score
/// descending, then id ascending, so repeated calls with identical input
/// agree exactly.
pub fn score(candidates: &[RiskCandidate], prior: &PriorCounts) -> RiskView {
    let mut ranked: Vec<RankedRisk> = candidates
        .iter()
        .map(|candidate| RankedRisk {
            id: candidate.id.clone(),
            kind: candidate.kind,
            title: candidate.title.clone(),
            severity: candidate.severity_hint,
            impact_score: impact_score(candidate.severity_hint, candidate.wait_measure),
            mitigation: candidate.mitigation.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.severity
            .rank()
            .cmp(&b.severity.rank())
            .then_with(|| b.impact_score.cmp(&a.impact_score))
            .then_with(|| a.id.cmp(&b.id))
    });

    let counts = Severity::ALL
        .iter()
        .map(|&severity| {
            let count = ranked.iter().filter(|r| r.severity == severity).count() as u64;
            SeverityTrend {
                severity,
                count,
                trend: trend_delta(count, prior.get(severity)),
            }
        })
        .collect();

    RiskView { ranked, counts }
}

/// Percent change vs. a prior count; no prior baseline means `n/a`.
fn trend_delta(current: u64, prior: u64) -> TrendDelta {
    if prior == 0 {
        TrendDelta::NotAvailable
    } else {
        let change = (current as f64 - prior as f64) / prior as f64 * 100.0;
        TrendDelta::Percent(change.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workpulse_core::{CandidateId, RiskKind};

    fn candidate(id: &str, kind: RiskKind, wait: f64, severity: Severity) -> RiskCandidate {
        RiskCandidate {
            id: CandidateId::new(id),
            kind,
            title: id.to_string(),
            wait_measure: wait,
            severity_hint: severity,
            mitigation: None,
        }
    }

    #[test]
    fn test_impact_grows_with_wait() {
        let short = impact_score(Severity::High, 24.0);
        let long = impact_score(Severity::High, 72.0);
        assert!(long > short);
    }

    #[test]
    fn test_impact_saturates_at_one_hundred() {
        assert!(impact_score(Severity::Critical, 10_000.0) <= 100);
        assert_eq!(
            impact_score(Severity::Critical, 24.0),
            impact_score(Severity::Critical, 500.0)
        );
    }

    #[test]
    fn test_higher_severity_outscores_lower_at_equal_wait() {
        assert!(impact_score(Severity::Critical, 24.0) > impact_score(Severity::High, 24.0));
        assert!(impact_score(Severity::High, 24.0) > impact_score(Severity::Medium, 24.0));
        assert!(impact_score(Severity::Medium, 24.0) > impact_score(Severity::Low, 24.0));
    }

    #[test]
    fn test_ranking_orders_by_severity_then_impact_then_id() {
        let candidates = vec![
            candidate("b", RiskKind::StuckReview, 48.0, Severity::High),
            candidate("c", RiskKind::Incident, 6.0, Severity::Critical),
            candidate("a", RiskKind::StuckReview, 48.0, Severity::High),
            candidate("d", RiskKind::StaleTicket, 96.0, Severity::Medium),
            candidate("e", RiskKind::StuckReview, 90.0, Severity::High),
        ];

        let view = score(&candidates, &PriorCounts::default());
        let order: Vec<&str> = view.ranked.iter().map(|r| r.id.as_str()).collect();
        // Critical first; the two equal-impact highs break the tie on id.
        assert_eq!(order, vec!["c", "e", "a", "b", "d"]);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let candidates = vec![
            candidate("x", RiskKind::Overdue, 30.0, Severity::High),
            candidate("y", RiskKind::StuckReview, 30.0, Severity::High),
            candidate("z", RiskKind::Incident, 1.0, Severity::Critical),
        ];

        let first = score(&candidates, &PriorCounts::default());
        let second = score(&candidates, &PriorCounts::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_counts_cover_every_severity() {
        let candidates = vec![
            candidate("a", RiskKind::Incident, 2.0, Severity::Critical),
            candidate("b", RiskKind::StuckReview, 48.0, Severity::High),
            candidate("c", RiskKind::Overdue, 24.0, Severity::High),
        ];

        let view = score(&candidates, &PriorCounts::default());
        let counts: Vec<(Severity, u64)> =
            view.counts.iter().map(|c| (c.severity, c.count)).collect();
        assert_eq!(
            counts,
            vec![
                (Severity::Critical, 1),
                (Severity::High, 2),
                (Severity::Medium, 0),
                (Severity::Low, 0),
            ]
        );
    }

    #[test]
    fn test_trend_without_baseline_is_not_available() {
        assert_eq!(trend_delta(5, 0), TrendDelta::NotAvailable);
    }

    #[test]
    fn test_trend_percent_change_rounds() {
        // 12 now vs 13 before: -7.7% rounds to -8.
        assert_eq!(trend_delta(12, 13), TrendDelta::Percent(-8));
        assert_eq!(trend_delta(7, 4), TrendDelta::Percent(75));
        assert_eq!(trend_delta(0, 2), TrendDelta::Percent(-100));
    }

    #[test]
    fn test_empty_candidates_produce_empty_ranking() {
        let view = score(&[], &PriorCounts::default());
        assert!(view.ranked.is_empty());
        assert_eq!(view.counts.len(), 4);
    }
}
