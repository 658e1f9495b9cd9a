//! The pure validation core: one answer against one question, and a whole
//! answer map against an ordered question set.
//!
//! Both functions are stateless and perform no I/O; they are safe to call
//! concurrently from any number of callers.

use serde_json::Value;
use survey_intake_types::{
    AnswerValidation, Answers, Question, QuestionErrors, QuestionKind, ResponseValidation,
    ValidationError,
};

/// Validate a single answer against its question definition.
///
/// The required check runs first and takes priority over every
/// type-specific check: a required rating handed an empty string fails
/// with [`ValidationError::Required`], not with a range error. An
/// optional question with an empty answer passes without any type
/// checking — an intentionally omitted answer has no shape to check.
///
/// "Empty" means absent, `null`, or `""` for every kind, plus `[]` for
/// multiple choice. `false` and `0` are real answers, never empty.
pub fn validate_answer(question: &Question, answer: Option<&Value>) -> AnswerValidation {
    let value = match answer {
        Some(value) if !is_empty_answer(question.kind(), value) => value,
        _ if question.is_required() => {
            return AnswerValidation::invalid(ValidationError::Required);
        }
        _ => return AnswerValidation::valid(),
    };

    let mut errors = Vec::new();
    match question.kind() {
        QuestionKind::Text => {
            if !value.is_string() {
                errors.push(ValidationError::ExpectedText);
            }
        }
        QuestionKind::Boolean => {
            if !value.is_boolean() {
                errors.push(ValidationError::ExpectedBool);
            }
        }
        QuestionKind::SingleChoice(choice) => match value.as_str() {
            Some(picked) if choice.contains(picked) => {}
            _ => errors.push(ValidationError::InvalidChoice),
        },
        QuestionKind::MultipleChoice(choice) => match value.as_array() {
            None => errors.push(ValidationError::ExpectedChoiceList),
            Some(picked) => {
                let all_declared = picked
                    .iter()
                    .all(|entry| entry.as_str().is_some_and(|s| choice.contains(s)));
                if !all_declared {
                    errors.push(ValidationError::InvalidChoices);
                }
            }
        },
        QuestionKind::Rating(rating) => {
            let (min, max) = rating.bounds();
            match value.as_f64() {
                Some(n) if n >= min && n <= max => {}
                _ => errors.push(ValidationError::RatingOutOfRange { min, max }),
            }
        }
        QuestionKind::Unknown(_) => errors.push(ValidationError::UnknownKind),
    }

    AnswerValidation::new(errors)
}

/// Validate a whole answer map against a survey's question set.
///
/// Visits every question in the given order, treating absent map entries
/// as empty answers, and never short-circuits: the report carries one
/// [`QuestionErrors`] entry per failing question so a caller can surface
/// every problem in one pass. Answers keyed by ids outside the question
/// set are ignored.
pub fn validate_response(questions: &[Question], answers: &Answers) -> ResponseValidation {
    let mut errors = Vec::new();
    for question in questions {
        let validation = validate_answer(question, answers.get(question.id()));
        if !validation.is_valid() {
            errors.push(QuestionErrors {
                question_id: question.id().to_string(),
                label: question.label().to_string(),
                errors: validation.errors,
            });
        }
    }
    ResponseValidation::new(errors)
}

fn is_empty_answer(kind: &QuestionKind, value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty() && matches!(kind, QuestionKind::MultipleChoice(_)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use survey_intake_types::{ChoiceQuestion, RatingQuestion};

    fn question(kind: QuestionKind) -> Question {
        Question::new("q", "Label", kind)
    }

    fn required(kind: QuestionKind) -> Question {
        question(kind).required(true)
    }

    fn single_choice() -> QuestionKind {
        QuestionKind::SingleChoice(ChoiceQuestion::new(["A", "B"]))
    }

    fn multiple_choice() -> QuestionKind {
        QuestionKind::MultipleChoice(ChoiceQuestion::new(["A", "B", "C"]))
    }

    fn rating() -> QuestionKind {
        QuestionKind::Rating(RatingQuestion::new())
    }

    #[test]
    fn required_rejects_missing_null_and_empty_string() {
        for kind in [
            QuestionKind::Text,
            QuestionKind::Boolean,
            single_choice(),
            multiple_choice(),
            rating(),
        ] {
            let q = required(kind);
            for answer in [None, Some(&Value::Null), Some(&json!(""))] {
                let validation = validate_answer(&q, answer);
                assert_eq!(
                    validation.errors,
                    vec![ValidationError::Required],
                    "kind {:?}, answer {answer:?}",
                    q.kind()
                );
            }
        }
    }

    #[test]
    fn required_multiple_choice_rejects_empty_selection() {
        let validation = validate_answer(&required(multiple_choice()), Some(&json!([])));
        assert_eq!(validation.errors, vec![ValidationError::Required]);
    }

    #[test]
    fn required_check_outranks_type_checks() {
        // A required rating handed "" fails as required, not as a range error.
        let validation = validate_answer(&required(rating()), Some(&json!("")));
        assert_eq!(validation.errors, vec![ValidationError::Required]);
    }

    #[test]
    fn optional_accepts_empty_answers() {
        for kind in [
            QuestionKind::Text,
            QuestionKind::Boolean,
            single_choice(),
            multiple_choice(),
            rating(),
            QuestionKind::Unknown("signature".into()),
        ] {
            let q = question(kind);
            for answer in [None, Some(&Value::Null), Some(&json!(""))] {
                assert!(
                    validate_answer(&q, answer).is_valid(),
                    "kind {:?}, answer {answer:?}",
                    q.kind()
                );
            }
        }
    }

    #[test]
    fn optional_multiple_choice_accepts_empty_selection() {
        assert!(validate_answer(&question(multiple_choice()), Some(&json!([]))).is_valid());
    }

    #[test]
    fn boolean_false_is_an_answer() {
        assert!(validate_answer(&required(QuestionKind::Boolean), Some(&json!(false))).is_valid());
    }

    #[test]
    fn rating_zero_fails_range_not_required() {
        let validation = validate_answer(&required(rating()), Some(&json!(0)));
        assert_eq!(
            validation.errors,
            vec![ValidationError::RatingOutOfRange { min: 1.0, max: 5.0 }]
        );
    }

    #[test]
    fn text_rejects_non_string() {
        let validation = validate_answer(&question(QuestionKind::Text), Some(&json!(42)));
        assert_eq!(validation.errors, vec![ValidationError::ExpectedText]);
        assert!(validate_answer(&question(QuestionKind::Text), Some(&json!("hi"))).is_valid());
    }

    #[test]
    fn boolean_rejects_non_boolean() {
        let validation = validate_answer(&question(QuestionKind::Boolean), Some(&json!("true")));
        assert_eq!(validation.errors, vec![ValidationError::ExpectedBool]);
    }

    #[test]
    fn single_choice_membership() {
        let q = question(single_choice());
        assert!(validate_answer(&q, Some(&json!("A"))).is_valid());
        assert_eq!(
            validate_answer(&q, Some(&json!("C"))).errors,
            vec![ValidationError::InvalidChoice]
        );
        assert_eq!(
            validate_answer(&q, Some(&json!(1))).errors,
            vec![ValidationError::InvalidChoice]
        );
    }

    #[test]
    fn multiple_choice_subset() {
        let q = question(multiple_choice());
        assert!(validate_answer(&q, Some(&json!(["A", "C"]))).is_valid());
        assert_eq!(
            validate_answer(&q, Some(&json!(["A", "D"]))).errors,
            vec![ValidationError::InvalidChoices]
        );
        assert_eq!(
            validate_answer(&q, Some(&json!(["A", 2]))).errors,
            vec![ValidationError::InvalidChoices]
        );
        assert_eq!(
            validate_answer(&q, Some(&json!("A"))).errors,
            vec![ValidationError::ExpectedChoiceList]
        );
    }

    #[test]
    fn rating_range() {
        let q = question(rating());
        assert!(validate_answer(&q, Some(&json!(3))).is_valid());
        assert!(validate_answer(&q, Some(&json!(1))).is_valid());
        assert!(validate_answer(&q, Some(&json!(5))).is_valid());
        for bad in [json!(0), json!(6), json!("three")] {
            assert_eq!(
                validate_answer(&q, Some(&bad)).errors,
                vec![ValidationError::RatingOutOfRange { min: 1.0, max: 5.0 }],
                "answer {bad:?}"
            );
        }
    }

    #[test]
    fn rating_custom_bounds() {
        let q = question(QuestionKind::Rating(RatingQuestion::with_bounds(0.0, 10.0)));
        assert!(validate_answer(&q, Some(&json!(0))).is_valid());
        assert!(validate_answer(&q, Some(&json!(10))).is_valid());
        assert_eq!(
            validate_answer(&q, Some(&json!(11))).errors,
            vec![ValidationError::RatingOutOfRange {
                min: 0.0,
                max: 10.0
            }]
        );
    }

    #[test]
    fn choice_without_declared_choices_rejects_everything() {
        let q = question(QuestionKind::SingleChoice(ChoiceQuestion::default()));
        assert_eq!(
            validate_answer(&q, Some(&json!("anything"))).errors,
            vec![ValidationError::InvalidChoice]
        );
    }

    #[test]
    fn unknown_kind_always_fails_when_answered() {
        let q = required(QuestionKind::Unknown("signature".into()));
        let validation = validate_answer(&q, Some(&json!("scribble")));
        assert_eq!(validation.errors, vec![ValidationError::UnknownKind]);
    }

    #[test]
    fn validate_answer_is_idempotent() {
        let q = required(single_choice());
        let answer = json!("C");
        let first = validate_answer(&q, Some(&answer));
        let second = validate_answer(&q, Some(&answer));
        assert_eq!(first, second);
    }

    #[test]
    fn response_collects_every_problem_in_order() {
        let questions = vec![
            Question::new("q1", "Your name", QuestionKind::Text).required(true),
            Question::new("q2", "Anything else?", QuestionKind::Text),
            Question::new("q3", "Pick one", single_choice()),
        ];
        let answers = Answers::new().with("q3", "C");

        let report = validate_response(&questions, &answers);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 2);

        assert_eq!(report.errors[0].question_id, "q1");
        assert_eq!(report.errors[0].label, "Your name");
        assert_eq!(report.errors[0].errors, vec![ValidationError::Required]);

        assert_eq!(report.errors[1].question_id, "q3");
        assert_eq!(report.errors[1].errors, vec![ValidationError::InvalidChoice]);
    }

    #[test]
    fn response_accepts_complete_valid_answers() {
        let questions = vec![
            Question::new("q1", "Your name", QuestionKind::Text).required(true),
            Question::new("q2", "Rate us", rating()).required(true),
        ];
        let answers = Answers::new().with("q1", "Alice").with("q2", 4);

        assert!(validate_response(&questions, &answers).is_valid());
    }

    #[test]
    fn response_ignores_answers_for_unknown_question_ids() {
        let questions = vec![Question::new("q1", "Your name", QuestionKind::Text)];
        let answers = Answers::new().with("q-stale", json!({ "nested": true }));

        assert!(validate_response(&questions, &answers).is_valid());
    }
}
