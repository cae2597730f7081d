//! Core data types for questionnaire-driven site generation.

pub mod answers;
pub mod project;
pub mod site;

pub use answers::{AnswerSet, AnswerValue};
pub use project::{Project, User};
pub use site::GeneratedSite;
