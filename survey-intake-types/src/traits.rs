use uuid::Uuid;

use crate::{NewResponse, Question, StoredResponse, Survey};

/// Trait for stores that hold surveys, their questions, and submitted
/// responses.
///
/// Implementations are injected into the submission path; nothing in this
/// workspace reaches for a global connection. The only consistency
/// demanded of an implementation is that the question set it returns for
/// a survey stays consistent for the duration of one validate-then-insert
/// sequence; concurrent survey edits may win on the next submission.
pub trait SurveyStore {
    /// The error type for this store.
    type Error: Into<anyhow::Error>;

    /// Look up a survey by id. `Ok(None)` when no such survey exists.
    fn survey(&self, id: Uuid) -> Result<Option<Survey>, Self::Error>;

    /// The survey's questions in survey-defined order (ascending
    /// `order_index`).
    fn questions(&self, survey_id: Uuid) -> Result<Vec<Question>, Self::Error>;

    /// Persist one response atomically, returning the stored row.
    ///
    /// All-or-nothing: either the row is durably stored and returned, or
    /// an error is returned and nothing was written.
    fn insert_response(&self, response: NewResponse) -> Result<StoredResponse, Self::Error>;
}
