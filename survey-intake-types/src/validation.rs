use serde::{Serialize, Serializer};

/// A single reason why an answer fails validation.
///
/// Serializes as its display string, which is the message the API layer
/// returns to submitters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required question got an empty answer.
    #[error("This question is required")]
    Required,

    /// A text question got a non-string value.
    #[error("Answer must be text")]
    ExpectedText,

    /// A boolean question got something other than `true`/`false`.
    #[error("Answer must be true or false")]
    ExpectedBool,

    /// A single-choice answer is not one of the declared choices.
    #[error("Please select a valid option")]
    InvalidChoice,

    /// A multiple-choice question got a non-array value.
    #[error("Answer must be an array of choices")]
    ExpectedChoiceList,

    /// A multiple-choice selection contains undeclared choices.
    #[error("Some selected options are not valid")]
    InvalidChoices,

    /// A rating is non-numeric or outside the question's bounds.
    #[error("Rating must be between {min} and {max}")]
    RatingOutOfRange { min: f64, max: f64 },

    /// The question declares a type tag the validator does not recognize.
    #[error("Unknown question type")]
    UnknownKind,
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of validating one answer against its question.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnswerValidation {
    /// Every reason the answer was rejected; empty when it is acceptable.
    pub errors: Vec<ValidationError>,
}

impl AnswerValidation {
    /// An outcome with no errors.
    pub fn valid() -> Self {
        Self::default()
    }

    /// An outcome rejecting the answer for a single reason.
    pub fn invalid(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// An outcome carrying the given errors (valid when the list is empty).
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Check if the answer was accepted.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// All errors reported for one question of a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionErrors {
    /// Identifier of the offending question.
    pub question_id: String,

    /// The question's prompt text, for human-readable reporting.
    pub label: String,

    /// Why its answer was rejected.
    pub errors: Vec<ValidationError>,
}

/// Outcome of validating a whole response against its question set.
///
/// Errors appear in survey-defined question order; questions whose
/// answers were accepted contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseValidation {
    /// One entry per rejected question.
    pub errors: Vec<QuestionErrors>,
}

impl ResponseValidation {
    /// An outcome with no errors.
    pub fn valid() -> Self {
        Self::default()
    }

    /// An outcome carrying the given per-question errors.
    pub fn new(errors: Vec<QuestionErrors>) -> Self {
        Self { errors }
    }

    /// Check if the whole response was accepted.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
