use survey_intake_types::{ChoiceQuestion, Question, QuestionKind, RatingQuestion, Survey};
use uuid::Uuid;

/// A customer feedback survey exercising every question kind.
///
/// Questions `visit-reason`, `recommend`, and `service` are required;
/// `channel` and `improvements` are optional.
pub fn customer_feedback(id: Uuid) -> (Survey, Vec<Question>) {
    let survey = Survey::new(id, "Customer Feedback").with_description("Tell us how we did.");

    let questions = vec![
        Question::new("visit-reason", "What brought you in today?", QuestionKind::Text)
            .required(true)
            .with_order_index(0),
        Question::new(
            "recommend",
            "Would you recommend us to a friend?",
            QuestionKind::Boolean,
        )
        .required(true)
        .with_order_index(1),
        Question::new(
            "service",
            "How would you rate the service?",
            QuestionKind::Rating(RatingQuestion::new()),
        )
        .required(true)
        .with_order_index(2),
        Question::new(
            "channel",
            "How did you hear about us?",
            QuestionKind::SingleChoice(ChoiceQuestion::new(["Search", "Friend", "Advert"])),
        )
        .with_order_index(3),
        Question::new(
            "improvements",
            "Which areas should we improve?",
            QuestionKind::MultipleChoice(ChoiceQuestion::new([
                "Speed", "Quality", "Price", "Support",
            ])),
        )
        .with_order_index(4),
    ];

    (survey, questions)
}
