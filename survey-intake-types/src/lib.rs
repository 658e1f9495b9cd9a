//! Core types for the survey-intake crates.
//!
//! This crate provides the foundational types for validating and storing
//! survey responses:
//! - `Survey` and `Question`/`QuestionKind` - The survey structure
//! - `Answers` - A submitted answer map, keyed by question id
//! - `AnswerValidation` and `ResponseValidation` - Validation reports
//! - `Submission`, `NewResponse`, `StoredResponse` - The response lifecycle
//! - `SurveyStore` trait - For implementing storage backends

mod question;
pub use question::{
    ChoiceQuestion, DEFAULT_RATING_MAX, DEFAULT_RATING_MIN, Question, QuestionKind,
    QuestionOptions, RatingQuestion,
};

mod answers;
pub use answers::Answers;

mod validation;
pub use validation::{AnswerValidation, QuestionErrors, ResponseValidation, ValidationError};

mod survey;
pub use survey::{Survey, response_rate, survey_slug};

mod response;
pub use response::{NewResponse, StoredResponse, Submission, SubmissionReceipt};

mod error;
pub use error::SubmitError;

mod traits;
pub use traits::SurveyStore;
