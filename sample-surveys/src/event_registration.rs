use survey_intake_types::{ChoiceQuestion, Question, QuestionKind, RatingQuestion, Survey};
use uuid::Uuid;

/// An event registration survey with a wide rating scale.
///
/// `attendee-name`, `session`, and `diet` are required; `excitement`
/// (rated 0 to 10) and `newsletter` are optional.
pub fn event_registration(id: Uuid) -> (Survey, Vec<Question>) {
    let survey = Survey::new(id, "RustConf Registration")
        .with_description("Reserve your spot and tell us what to cook.");

    let questions = vec![
        Question::new("attendee-name", "Your full name", QuestionKind::Text)
            .required(true)
            .with_order_index(0),
        Question::new(
            "session",
            "Which track will you attend?",
            QuestionKind::SingleChoice(ChoiceQuestion::new(["Embedded", "Web", "Tooling"])),
        )
        .required(true)
        .with_order_index(1),
        Question::new(
            "diet",
            "Any dietary requirements?",
            QuestionKind::MultipleChoice(ChoiceQuestion::new([
                "Vegetarian",
                "Vegan",
                "Gluten-free",
                "None",
            ])),
        )
        .required(true)
        .with_order_index(2),
        Question::new(
            "excitement",
            "How excited are you?",
            QuestionKind::Rating(RatingQuestion::with_bounds(0.0, 10.0)),
        )
        .with_order_index(3),
        Question::new(
            "newsletter",
            "Keep me posted about future events",
            QuestionKind::Boolean,
        )
        .with_order_index(4),
    ];

    (survey, questions)
}
