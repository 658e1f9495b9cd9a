use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A submitted answer map, keyed by question id.
///
/// Answers arrive from submitters as raw JSON and are kept that way: the
/// validator's whole job is to decide whether each value has the shape its
/// question demands, so values stay untyped until then. Accepted maps are
/// persisted verbatim.
///
/// The map is supplied wholesale with one submission; it is never
/// partially updated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: Map<String, Value>,
}

impl Answers {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Insert an answer for the given question id.
    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(question_id.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, question_id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(question_id, value);
        self
    }

    /// Get the answer for the given question id.
    pub fn get(&self, question_id: &str) -> Option<&Value> {
        self.values.get(question_id)
    }

    /// Check if an answer exists for the given question id.
    pub fn contains(&self, question_id: &str) -> bool {
        self.values.contains_key(question_id)
    }

    /// Get an iterator over all id-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for Answers {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl From<Answers> for Value {
    fn from(answers: Answers) -> Self {
        Value::Object(answers.values)
    }
}

impl IntoIterator for Answers {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
