use crate::{Field, Step};

/// The per-step predicate that must hold before the wizard moves forward.
///
/// Each variant names the rule kind and the field it reads. The rules are
/// evaluated by the `csat` crate, which owns the validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatingRule {
    /// Non-empty and a valid CPF or CNPJ.
    TaxId(Field),

    /// Non-empty and at least `min` characters after trimming.
    MinChars { field: Field, min: usize },

    /// Non-empty and a plausible Brazilian phone number.
    Phone(Field),

    /// The score must be set.
    ScoreSet(Field),

    /// The text must be non-empty (a chosen option or free text).
    NonEmpty(Field),

    /// Always passes.
    Open(Field),
}

impl GatingRule {
    /// The field this rule reads.
    pub fn field(&self) -> Field {
        match *self {
            GatingRule::TaxId(field)
            | GatingRule::MinChars { field, .. }
            | GatingRule::Phone(field)
            | GatingRule::ScoreSet(field)
            | GatingRule::NonEmpty(field)
            | GatingRule::Open(field) => field,
        }
    }
}

/// A failed gating check: the step stays put and the reason is shown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct Rejection {
    /// The step that refused to advance.
    pub step: Step,
    /// Short human-readable reason.
    pub reason: String,
}

impl Rejection {
    pub fn new(step: Step, reason: impl Into<String>) -> Self {
        Self {
            step,
            reason: reason.into(),
        }
    }
}

/// Result of a gating check.
pub type ValidationOutcome = Result<(), Rejection>;
