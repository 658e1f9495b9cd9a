//! In-memory survey store for testing submission flows without a
//! database.
//!
//! `MemoryStore` holds surveys and their questions registered up front
//! and appends accepted responses to an in-process log. It is the
//! reference `SurveyStore` implementation; real deployments implement
//! the trait over their database client instead.
//!
//! # Example
//!
//! ```rust,ignore
//! let store = MemoryStore::new()
//!     .with_survey(survey, questions);
//!
//! let submitter = Submitter::new(store);
//! submitter.submit(submission)?;
//! assert_eq!(submitter.store().response_count(), 1);
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use survey_intake_types::{NewResponse, Question, StoredResponse, Survey, SurveyStore};

/// An in-memory store over pre-registered surveys.
#[derive(Debug, Default)]
pub struct MemoryStore {
    surveys: HashMap<Uuid, Survey>,
    questions: HashMap<Uuid, Vec<Question>>,
    responses: Mutex<Vec<StoredResponse>>,
}

/// Error type for `MemoryStore`.
#[derive(Debug, thiserror::Error)]
pub enum MemoryStoreError {
    /// A writer panicked while holding the response log lock.
    #[error("Response log poisoned")]
    Poisoned,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a survey together with its questions.
    pub fn with_survey(mut self, survey: Survey, questions: Vec<Question>) -> Self {
        self.questions.insert(survey.id, questions);
        self.surveys.insert(survey.id, survey);
        self
    }

    /// All responses stored so far, in insertion order.
    pub fn responses(&self) -> Vec<StoredResponse> {
        match self.responses.lock() {
            Ok(log) => log.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The number of responses stored so far.
    pub fn response_count(&self) -> usize {
        self.responses().len()
    }
}

impl SurveyStore for MemoryStore {
    type Error = MemoryStoreError;

    fn survey(&self, id: Uuid) -> Result<Option<Survey>, Self::Error> {
        Ok(self.surveys.get(&id).cloned())
    }

    fn questions(&self, survey_id: Uuid) -> Result<Vec<Question>, Self::Error> {
        let mut questions = self.questions.get(&survey_id).cloned().unwrap_or_default();
        questions.sort_by_key(Question::order_index);
        Ok(questions)
    }

    fn insert_response(&self, response: NewResponse) -> Result<StoredResponse, Self::Error> {
        let stored = response.into_stored(Uuid::new_v4());
        let mut log = self
            .responses
            .lock()
            .map_err(|_| MemoryStoreError::Poisoned)?;
        log.push(stored.clone());
        Ok(stored)
    }
}
