//! # survey-intake
//!
//! Validate and persist survey responses. Store-agnostic.
//!
//! The validation core is two pure functions: [`validate_answer`] checks
//! one answer against its question definition, [`validate_response`]
//! sweeps a whole answer map across a survey's ordered question set and
//! enumerates every problem in one pass. [`Submitter`] wires the core to
//! a [`SurveyStore`]: it resolves the target survey, refuses inactive or
//! unknown surveys, and atomically persists responses that pass.
//!
//! ## Usage
//!
//! ```
//! use survey_intake::{
//!     Answers, ChoiceQuestion, MemoryStore, Question, QuestionKind, Submission, Submitter,
//!     Survey,
//! };
//!
//! let survey_id = uuid::Uuid::new_v4();
//! let store = MemoryStore::new().with_survey(
//!     Survey::new(survey_id, "Customer Feedback"),
//!     vec![
//!         Question::new(
//!             "q-overall",
//!             "How was your visit?",
//!             QuestionKind::SingleChoice(ChoiceQuestion::new(["Great", "Okay", "Poor"])),
//!         )
//!         .required(true),
//!     ],
//! );
//!
//! let submitter = Submitter::new(store);
//! let answers = Answers::new().with("q-overall", "Great");
//! let receipt = submitter.submit(Submission::new(survey_id, answers))?;
//!
//! assert_eq!(submitter.store().response_count(), 1);
//! println!("stored response {}", receipt.response_id);
//! # Ok::<(), survey_intake::SubmitError>(())
//! ```
//!
//! ## Stores
//!
//! Storage backends implement [`SurveyStore`] and are passed in by the
//! caller. [`MemoryStore`] ships here for tests and examples; a real
//! deployment implements the trait over its database client.

// Re-export all types from survey-intake-types
pub use survey_intake_types::*;

mod validate;
pub use validate::{validate_answer, validate_response};

mod submit;
pub use submit::Submitter;

// In-memory store for testing submission flows without a database
mod memory_store;
pub use memory_store::{MemoryStore, MemoryStoreError};
