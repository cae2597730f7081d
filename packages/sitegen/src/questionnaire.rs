//! Linear questionnaire flow.
//!
//! A fixed sequence of questions walked one at a time. No skipping and no
//! branching by answer content: every respondent sees every question in the
//! same order. Finalizing produces the [`AnswerSet`] consumed by the
//! generation pipeline, with empty-string defaults for anything left
//! unanswered.

use std::collections::HashMap;

use crate::types::answers::{AnswerSet, AnswerValue};

/// The kind of a question, which determines how it is asked and answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick one option
    Select { options: Vec<String> },
    /// Pick zero or more options
    MultiSelect { options: Vec<String> },
    /// Short free text
    Text,
    /// Multi-line free text
    LongText,
    /// Yes/no toggle
    Toggle,
}

/// One question definition.
#[derive(Debug, Clone)]
pub struct Question {
    /// Stable identifier, unique within the questionnaire.
    pub id: String,
    /// Human-readable label; becomes the key in the finalized answer set.
    pub label: String,
    pub kind: QuestionKind,
}

impl Question {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }
}

fn options(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed question list a website questionnaire walks through.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "website_type",
            "What type of website do you want to create?",
            QuestionKind::Select {
                options: options(&["Personal", "Business", "Portfolio", "Blog", "E-Commerce"]),
            },
        ),
        Question::new(
            "website_name",
            "What is the name of your website?",
            QuestionKind::Text,
        ),
        Question::new(
            "color_scheme",
            "What color scheme would you prefer?",
            QuestionKind::Select {
                options: options(&["Light", "Dark", "Colorful", "Minimal", "Custom"]),
            },
        ),
        Question::new(
            "primary_features",
            "Select the main features you want to include:",
            QuestionKind::MultiSelect {
                options: options(&[
                    "Contact Form",
                    "Image Gallery",
                    "Blog Section",
                    "Services Showcase",
                    "Testimonials",
                    "Pricing Tables",
                    "About Section",
                ]),
            },
        ),
        Question::new(
            "seo_keywords",
            "Enter some SEO keywords for your website (comma separated):",
            QuestionKind::Text,
        ),
        Question::new(
            "responsive",
            "Do you want your website to be responsive?",
            QuestionKind::Toggle,
        ),
        Question::new(
            "description",
            "Describe your website and its content in detail:",
            QuestionKind::LongText,
        ),
    ]
}

/// Outcome of advancing the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to the next question.
    Advanced,
    /// Already at the last question; the answer set is ready to finalize.
    Complete,
}

/// Finite state walk over a fixed question list.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    questions: Vec<Question>,
    current: usize,
    answers: HashMap<String, AnswerValue>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            answers: HashMap::new(),
        }
    }

    /// The question currently shown, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Zero-based index of the current question.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Completion fraction in `[0, 1]`, for progress display.
    pub fn progress(&self) -> f32 {
        if self.questions.is_empty() {
            return 1.0;
        }
        (self.current + 1) as f32 / self.questions.len() as f32
    }

    /// Record an answer for the current question, replacing any earlier one.
    pub fn record(&mut self, value: AnswerValue) {
        if let Some(question) = self.questions.get(self.current) {
            self.answers.insert(question.id.clone(), value);
        }
    }

    /// Advance to the next question; at the last question, reports
    /// [`Step::Complete`] instead of moving.
    pub fn next(&mut self) -> Step {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            Step::Advanced
        } else {
            Step::Complete
        }
    }

    /// Step back one question, clamped at the first.
    pub fn back(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Produce the finalized answer set, keyed by question label in
    /// question order. Unanswered questions default to an empty string.
    pub fn finalize(self) -> AnswerSet {
        let mut set = AnswerSet::new();
        for question in &self.questions {
            match self.answers.get(&question.id) {
                Some(value) => set.insert(question.label.clone(), value),
                None => set.insert_raw(question.label.clone(), ""),
            }
        }
        set
    }
}
