//! Questionnaire answers and the finalized answer set.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single answer value, matching the closed set of question kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerValue {
    /// Free text or long text
    Text(String),
    /// One option from a single-select question
    Selection(String),
    /// Zero or more options from a multi-select question
    Multi(Vec<String>),
    /// A boolean toggle
    Toggle(bool),
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Text(s) | AnswerValue::Selection(s) => f.write_str(s),
            AnswerValue::Multi(items) => f.write_str(&items.join(", ")),
            AnswerValue::Toggle(true) => f.write_str("yes"),
            AnswerValue::Toggle(false) => f.write_str("no"),
        }
    }
}

/// Finalized mapping from question label to stringified answer value.
///
/// Built once by the questionnaire and consumed by value; iteration order
/// is insertion order, which is the fixed question order. Order matters
/// only for prompt readability, not correctness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    entries: IndexMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer under its question label. Labels are unique per
    /// questionnaire run; a repeated label overwrites in place.
    pub fn insert(&mut self, label: impl Into<String>, value: &AnswerValue) {
        self.entries.insert(label.into(), value.to_string());
    }

    /// Record an already-stringified answer (empty string for unanswered
    /// questions).
    pub fn insert_raw(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(label.into(), value.into());
    }

    /// Iterate label/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_rendering() {
        assert_eq!(AnswerValue::Text("hi".into()).to_string(), "hi");
        assert_eq!(AnswerValue::Selection("dark".into()).to_string(), "dark");
        assert_eq!(
            AnswerValue::Multi(vec!["blog".into(), "gallery".into()]).to_string(),
            "blog, gallery"
        );
        assert_eq!(AnswerValue::Toggle(true).to_string(), "yes");
        assert_eq!(AnswerValue::Toggle(false).to_string(), "no");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut answers = AnswerSet::new();
        answers.insert("b", &AnswerValue::Text("2".into()));
        answers.insert("a", &AnswerValue::Text("1".into()));
        answers.insert("c", &AnswerValue::Text("3".into()));

        let labels: Vec<&str> = answers.iter().map(|(k, _)| k).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
    }
}
