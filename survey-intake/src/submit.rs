use chrono::Utc;
use tracing::{debug, info};

use survey_intake_types::{Submission, SubmissionReceipt, SubmitError, SurveyStore};

use crate::validate_response;

/// Accepts or rejects candidate responses for the surveys held by a
/// store.
///
/// A submission is either atomically accepted-and-stored or
/// rejected-and-discarded; there is no partial persistence. Rejections
/// carry the full validation report so the caller can surface every
/// problem at once.
#[derive(Debug, Clone)]
pub struct Submitter<S> {
    store: S,
}

impl<S: SurveyStore> Submitter<S> {
    /// Create a submitter over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and persist one candidate response.
    ///
    /// Unknown and inactive surveys are refused before any validation
    /// runs. Validation failures return [`SubmitError::Rejected`] with
    /// every per-question error and persist nothing. Store failures are
    /// surfaced as-is, never retried here.
    pub fn submit(&self, submission: Submission) -> Result<SubmissionReceipt, SubmitError> {
        let survey = self
            .store
            .survey(submission.survey_id)
            .map_err(SubmitError::store)?
            .ok_or(SubmitError::SurveyNotFound(submission.survey_id))?;

        if !survey.is_active {
            return Err(SubmitError::SurveyInactive(survey.id));
        }

        let questions = self.store.questions(survey.id).map_err(SubmitError::store)?;
        let validation = validate_response(&questions, &submission.answers);
        if !validation.is_valid() {
            debug!(
                survey_id = %survey.id,
                rejected_questions = validation.errors.len(),
                "response failed validation"
            );
            return Err(SubmitError::Rejected(validation));
        }

        let stored = self
            .store
            .insert_response(submission.into_response(Utc::now()))
            .map_err(SubmitError::store)?;
        info!(survey_id = %stored.survey_id, response_id = %stored.id, "response accepted");

        Ok(SubmissionReceipt {
            response_id: stored.id,
            submitted_at: stored.submitted_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde_json::json;
    use survey_intake_types::{
        Answers, ChoiceQuestion, NewResponse, Question, QuestionKind, RatingQuestion,
        StoredResponse, Survey, ValidationError,
    };
    use uuid::Uuid;

    fn feedback_questions() -> Vec<Question> {
        vec![
            Question::new("q-name", "Your name", QuestionKind::Text)
                .required(true)
                .with_order_index(0),
            Question::new(
                "q-rating",
                "Rate us",
                QuestionKind::Rating(RatingQuestion::new()),
            )
            .required(true)
            .with_order_index(1),
            Question::new(
                "q-channel",
                "How did you hear about us?",
                QuestionKind::SingleChoice(ChoiceQuestion::new(["Search", "Friend"])),
            )
            .with_order_index(2),
        ]
    }

    fn submitter_with_survey(survey: Survey) -> (Uuid, Submitter<MemoryStore>) {
        let id = survey.id;
        let store = MemoryStore::new().with_survey(survey, feedback_questions());
        (id, Submitter::new(store))
    }

    #[test]
    fn rejects_unknown_survey() {
        let (_, submitter) = submitter_with_survey(Survey::new(Uuid::new_v4(), "Feedback"));
        let missing = Uuid::new_v4();

        let err = submitter
            .submit(Submission::new(missing, Answers::new()))
            .unwrap_err();
        assert!(matches!(err, SubmitError::SurveyNotFound(id) if id == missing));
    }

    #[test]
    fn rejects_inactive_survey_before_validation() {
        let (id, submitter) =
            submitter_with_survey(Survey::new(Uuid::new_v4(), "Feedback").inactive());

        // Answers are complete and valid; the active check still wins.
        let answers = Answers::new().with("q-name", "Alice").with("q-rating", 5);
        let err = submitter.submit(Submission::new(id, answers)).unwrap_err();
        assert!(matches!(err, SubmitError::SurveyInactive(inactive) if inactive == id));
    }

    #[test]
    fn rejects_invalid_response_without_persisting() {
        let (id, submitter) = submitter_with_survey(Survey::new(Uuid::new_v4(), "Feedback"));
        let answers = Answers::new().with("q-rating", 11).with("q-channel", "Radio");

        let err = submitter.submit(Submission::new(id, answers)).unwrap_err();
        let report = err.validation().expect("rejection carries the report");

        assert_eq!(report.errors.len(), 3);
        assert_eq!(report.errors[0].question_id, "q-name");
        assert_eq!(report.errors[0].errors, vec![ValidationError::Required]);
        assert_eq!(report.errors[1].question_id, "q-rating");
        assert_eq!(report.errors[2].question_id, "q-channel");
        assert_eq!(submitter.store().response_count(), 0);
    }

    #[test]
    fn accepts_and_persists_raw_answers() {
        let (id, submitter) = submitter_with_survey(Survey::new(Uuid::new_v4(), "Feedback"));
        let respondent = Uuid::new_v4();
        let answers = Answers::new()
            .with("q-name", "Alice")
            .with("q-rating", 4)
            .with("q-channel", "Friend");

        let receipt = submitter
            .submit(Submission::new(id, answers.clone()).with_respondent(respondent))
            .unwrap();

        let stored = submitter.store().responses();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, receipt.response_id);
        assert_eq!(stored[0].submitted_at, receipt.submitted_at);
        assert_eq!(stored[0].survey_id, id);
        assert_eq!(stored[0].respondent_id, Some(respondent));
        assert_eq!(stored[0].answers, answers);
    }

    #[test]
    fn extraneous_answer_keys_do_not_block_acceptance() {
        let (id, submitter) = submitter_with_survey(Survey::new(Uuid::new_v4(), "Feedback"));
        let answers = Answers::new()
            .with("q-name", "Alice")
            .with("q-rating", 4)
            .with("q-removed", json!({ "stale": true }));

        assert!(submitter.submit(Submission::new(id, answers)).is_ok());
    }

    struct FailingStore;

    impl SurveyStore for FailingStore {
        type Error = anyhow::Error;

        fn survey(&self, _id: Uuid) -> Result<Option<Survey>, Self::Error> {
            Err(anyhow::anyhow!("store offline"))
        }

        fn questions(&self, _survey_id: Uuid) -> Result<Vec<Question>, Self::Error> {
            Err(anyhow::anyhow!("store offline"))
        }

        fn insert_response(&self, _response: NewResponse) -> Result<StoredResponse, Self::Error> {
            Err(anyhow::anyhow!("store offline"))
        }
    }

    #[test]
    fn store_failure_surfaces_as_store_error() {
        let submitter = Submitter::new(FailingStore);

        let err = submitter
            .submit(Submission::new(Uuid::new_v4(), Answers::new()))
            .unwrap_err();
        assert!(matches!(err, SubmitError::Store(_)));
        assert!(!err.is_rejection());
    }
}
