use uuid::Uuid;

use crate::ResponseValidation;

/// Error type for response submission.
///
/// Validation rejections carry the full per-question report; store and
/// lookup failures short-circuit before any validation runs.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// No survey with this id exists.
    #[error("Survey not found: {0}")]
    SurveyNotFound(Uuid),

    /// The survey exists but no longer accepts responses.
    #[error("Survey is not active: {0}")]
    SurveyInactive(Uuid),

    /// The response failed validation; nothing was persisted.
    #[error("Response rejected: {} question(s) failed validation", .0.errors.len())]
    Rejected(ResponseValidation),

    /// Store-level failure (I/O, connection loss, etc.), surfaced as-is.
    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl SubmitError {
    /// Create a store error from any error type.
    pub fn store(err: impl Into<anyhow::Error>) -> Self {
        Self::Store(err.into())
    }

    /// Check if this error is a validation rejection.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The validation report, when this error is a rejection.
    pub fn validation(&self) -> Option<&ResponseValidation> {
        match self {
            Self::Rejected(report) => Some(report),
            _ => None,
        }
    }
}
