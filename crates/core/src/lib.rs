//! Workpulse core data models.
//!
//! This crate defines the data contracts of the metrics engine: the raw
//! snapshot shape collectors deliver, the canonical entities produced by
//! normalization, and the derived view model the dashboard consumes.

#![warn(missing_docs)]

// Core identities
mod id;
mod scope;

// Input contract
mod snapshot;

// Canonical entities
mod risk;
mod sprint;
mod warning;
mod workload;

// Derived output
mod view;

// Re-exports
pub use id::{CandidateId, MemberId};
pub use scope::{ParseScopeError, Scope};

// Raw input
pub use snapshot::{
    RawPriorCounts, RawRiskCandidate, RawScopeData, RawSnapshot, RawSprint, RawWorkloadEntry,
};

// Canonical
pub use risk::{PriorCounts, RiskCandidate, RiskKind, Severity};
pub use sprint::SprintSnapshot;
pub use warning::{FieldWarning, WarningKind};
pub use workload::{LoadClassification, WorkloadEntry};

// Derived
pub use view::{
    MemberLoad, RankedRisk, RebalanceSuggestion, RiskView, SeverityTrend, SprintStatus,
    SprintView, TrendDelta, ViewModel, WorkloadView,
};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
