//! View-model assembly.

use workpulse_core::{RawSnapshot, Scope, ViewModel};

use crate::normalize::normalize_scope;
use crate::{progress, risk, workload};

/// Errors surfaced by the engine.
///
/// Everything else degrades through field warnings; a missing scope section
/// is the one condition that must not be silently defaulted, because a view
/// over no data would misrepresent the dashboard.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The snapshot carries no section for the requested scope
    #[error("snapshot has no {0} section")]
    MissingScopeData(Scope),
}

/// Build the view model for one scope of a snapshot.
pub fn assemble(scope: Scope, snapshot: &RawSnapshot) -> Result<ViewModel, EngineError> {
    let section = match scope {
        Scope::Team => snapshot.team.as_ref(),
        Scope::Personal => snapshot.personal.as_ref(),
    }
    .ok_or(EngineError::MissingScopeData(scope))?;

    let normalized = normalize_scope(section);
    tracing::debug!(
        scope = scope.as_str(),
        risks = normalized.risks.len(),
        members = normalized.workload.len(),
        warnings = normalized.warnings.len(),
        "assembling view model"
    );

    Ok(ViewModel {
        scope,
        sprint: progress::evaluate(&normalized.sprint),
        risk: risk::score(&normalized.risks, &normalized.prior_risk_counts),
        workload: workload::balance(&normalized.workload),
        warnings: normalized.warnings,
    })
}

/// Build a view model for every scope present in the snapshot, team first.
pub fn assemble_all(snapshot: &RawSnapshot) -> Vec<ViewModel> {
    [Scope::Team, Scope::Personal]
        .into_iter()
        .filter_map(|scope| assemble(scope, snapshot).ok())
        .collect()
}
