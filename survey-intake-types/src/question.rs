use serde::{Deserialize, Serialize};

/// Lower bound applied to rating questions that declare no `min`.
pub const DEFAULT_RATING_MIN: f64 = 1.0;

/// Upper bound applied to rating questions that declare no `max`.
pub const DEFAULT_RATING_MAX: f64 = 5.0;

/// A single question in a survey.
///
/// Questions are immutable once a response references them; they are
/// created by survey authoring and only read at submission time.
///
/// On the wire a question is the flat row shape of the survey database
/// (`id`, `label`, `type`, `options`, `required`, `order_index`); in
/// memory the type tag and its options are folded into [`QuestionKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "QuestionRow", into = "QuestionRow")]
pub struct Question {
    /// Unique identifier; also the key for this question's answer.
    id: String,

    /// The prompt text shown to the respondent.
    label: String,

    /// The kind of question (determines the legal answer shape).
    kind: QuestionKind,

    /// Whether an empty answer makes the whole response unacceptable.
    required: bool,

    /// Position within the survey; questions are served in ascending order.
    order_index: i64,
}

impl Question {
    /// Create a new optional question at order index 0.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            required: false,
            order_index: 0,
        }
    }

    /// Set whether this question is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the position of this question within its survey.
    pub fn with_order_index(mut self, order_index: i64) -> Self {
        self.order_index = order_index;
        self
    }

    /// Get the question identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the prompt text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Check whether an answer to this question is mandatory.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the position of this question within its survey.
    pub fn order_index(&self) -> i64 {
        self.order_index
    }
}

/// The kind of question, determining the legal answer shape.
///
/// Unrecognized type tags deserialize to [`QuestionKind::Unknown`] rather
/// than failing: a stored survey must stay readable even when it carries a
/// tag this version does not know, and validation then rejects answers to
/// that question instead of silently passing them through.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Free-form text input.
    Text,

    /// Yes/no answer.
    Boolean,

    /// Pick exactly one of the declared choices.
    SingleChoice(ChoiceQuestion),

    /// Pick any subset of the declared choices.
    MultipleChoice(ChoiceQuestion),

    /// Numeric rating within declared (or default) bounds.
    Rating(RatingQuestion),

    /// Unrecognized type tag, preserved verbatim.
    Unknown(String),
}

impl QuestionKind {
    /// The wire tag for this kind.
    pub fn tag(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::SingleChoice(_) => "single_choice",
            Self::MultipleChoice(_) => "multiple_choice",
            Self::Rating(_) => "rating",
            Self::Unknown(tag) => tag,
        }
    }

    /// Check if this kind is recognized by the validator.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Check if this kind draws its answers from a declared choice set.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::SingleChoice(_) | Self::MultipleChoice(_))
    }
}

/// Configuration for a single- or multiple-choice question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceQuestion {
    /// The allowed choices. An empty set rejects every submitted choice.
    pub choices: Vec<String>,
}

impl ChoiceQuestion {
    /// Create a choice set from anything iterable over strings.
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a submitted choice is one of the declared choices.
    pub fn contains(&self, choice: &str) -> bool {
        self.choices.iter().any(|c| c == choice)
    }
}

/// Configuration for a numeric rating question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingQuestion {
    /// Optional lower bound; defaults to [`DEFAULT_RATING_MIN`].
    pub min: Option<f64>,

    /// Optional upper bound; defaults to [`DEFAULT_RATING_MAX`].
    pub max: Option<f64>,

    /// Step increment used by rating widgets; not enforced here.
    pub step: Option<f64>,
}

impl RatingQuestion {
    /// Create a rating question with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with explicit bounds.
    pub fn with_bounds(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            step: None,
        }
    }

    /// The effective `(min, max)` bounds, with defaults applied.
    pub fn bounds(&self) -> (f64, f64) {
        (
            self.min.unwrap_or(DEFAULT_RATING_MIN),
            self.max.unwrap_or(DEFAULT_RATING_MAX),
        )
    }
}

/// The `options` column of the question row: type-dependent structured
/// data, with fields left empty when the kind does not use them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionOptions {
    /// Allowed choices for choice kinds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,

    /// Lower rating bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper rating bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Rating step increment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl QuestionOptions {
    /// Check if no option field is set.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty() && self.min.is_none() && self.max.is_none() && self.step.is_none()
    }
}

/// The flat database row shape of a question.
#[derive(Debug, Serialize, Deserialize)]
struct QuestionRow {
    id: String,

    // Older schema revisions called this column `title`.
    #[serde(alias = "title")]
    label: String,

    #[serde(rename = "type")]
    kind: String,

    #[serde(default, skip_serializing_if = "QuestionOptions::is_empty")]
    options: QuestionOptions,

    #[serde(default)]
    required: bool,

    #[serde(default)]
    order_index: i64,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        let kind = match row.kind.as_str() {
            "text" => QuestionKind::Text,
            "boolean" => QuestionKind::Boolean,
            "single_choice" => QuestionKind::SingleChoice(ChoiceQuestion {
                choices: row.options.choices,
            }),
            "multiple_choice" => QuestionKind::MultipleChoice(ChoiceQuestion {
                choices: row.options.choices,
            }),
            "rating" => QuestionKind::Rating(RatingQuestion {
                min: row.options.min,
                max: row.options.max,
                step: row.options.step,
            }),
            other => QuestionKind::Unknown(other.to_string()),
        };

        Self {
            id: row.id,
            label: row.label,
            kind,
            required: row.required,
            order_index: row.order_index,
        }
    }
}

impl From<Question> for QuestionRow {
    fn from(question: Question) -> Self {
        let tag = question.kind.tag().to_string();
        let options = match question.kind {
            QuestionKind::SingleChoice(choice) | QuestionKind::MultipleChoice(choice) => {
                QuestionOptions {
                    choices: choice.choices,
                    ..QuestionOptions::default()
                }
            }
            QuestionKind::Rating(rating) => QuestionOptions {
                min: rating.min,
                max: rating.max,
                step: rating.step,
                ..QuestionOptions::default()
            },
            QuestionKind::Text | QuestionKind::Boolean | QuestionKind::Unknown(_) => {
                QuestionOptions::default()
            }
        };

        Self {
            id: question.id,
            label: question.label,
            kind: tag,
            options,
            required: question.required,
            order_index: question.order_index,
        }
    }
}
