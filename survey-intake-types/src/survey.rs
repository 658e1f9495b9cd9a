use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A survey: a named, ordered collection of questions presented to
/// respondents.
///
/// The question set itself lives behind
/// [`SurveyStore::questions`](crate::SurveyStore::questions); this record
/// carries the metadata the submission path needs, most importantly the
/// active flag: inactive surveys refuse new responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    /// Unique survey identifier.
    pub id: Uuid,

    /// Display title.
    pub title: String,

    /// Optional description shown to respondents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the survey currently accepts responses.
    pub is_active: bool,

    /// When the survey was created.
    pub created_at: DateTime<Utc>,
}

impl Survey {
    /// Create a new active survey.
    pub fn new(id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the survey as closed to new responses.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// URL slug derived from the title.
    pub fn slug(&self) -> String {
        survey_slug(&self.title)
    }
}

/// Derive a URL slug from a survey title.
///
/// Lowercases, keeps alphanumerics and underscores, collapses whitespace
/// and dash runs to a single dash, and strips dashes at both ends.
pub fn survey_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '_' {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-') && !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Percentage of views that became responses, rounded to the nearest
/// whole percent. Zero views yields zero.
pub fn response_rate(responses: u64, views: u64) -> u64 {
    if views == 0 {
        return 0;
    }
    ((responses as f64 / views as f64) * 100.0).round() as u64
}
