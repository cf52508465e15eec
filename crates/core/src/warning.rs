//! Field-level warnings produced by normalization.

use serde::Serialize;

/// Why a field was adjusted or flagged during normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WarningKind {
    /// The value was out of range and clamped
    Clamped {
        /// Value as delivered
        from: f64,
        /// Value after clamping
        to: f64,
    },
    /// The field was absent and a safe default was filled in
    MissingDefaulted,
    /// A zero denominator; dependent figures degrade to a neutral state
    InsufficientData,
}

/// A single normalization warning, tied to one input field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldWarning {
    /// Dotted path of the field, e.g. `sprint.completed_points`
    pub field: String,

    /// What happened
    pub kind: WarningKind,
}

impl FieldWarning {
    /// Warning for an out-of-range value that was clamped.
    pub fn clamped(field: impl Into<String>, from: f64, to: f64) -> Self {
        Self {
            field: field.into(),
            kind: WarningKind::Clamped { from, to },
        }
    }

    /// Warning for a missing field replaced by its default.
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: WarningKind::MissingDefaulted,
        }
    }

    /// Warning for a zero denominator preserved for downstream guards.
    pub fn insufficient(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: WarningKind::InsufficientData,
        }
    }
}
