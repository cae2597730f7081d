//! Prompts for website generation.

use crate::types::answers::AnswerSet;

/// Upper bound on completion size for a generation call.
pub const MAX_OUTPUT_TOKENS: u32 = 4000;

/// Fixed instruction preamble sent as the system prompt.
pub const SYSTEM_PROMPT: &str = "\
You are a professional web developer. Create a complete, modern website based on the user's requirements.
The output should include valid HTML, CSS, and JavaScript in separate code blocks.
The website should be responsive, accessible, and follow best practices.
Include comments to explain your code.";

/// Serialize the answers into a deterministic, human-readable prompt body:
/// one `label: value` line per answer in the answer set's iteration order.
pub fn build_user_prompt(answers: &AnswerSet) -> String {
    let mut prompt = String::from("Please create a website with the following specifications:\n\n");

    for (label, value) in answers.iter() {
        prompt.push_str(label);
        prompt.push_str(": ");
        prompt.push_str(value);
        prompt.push('\n');
    }

    prompt.push_str("\nPlease provide the complete HTML, CSS, and JavaScript code for this website.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::answers::AnswerValue;

    #[test]
    fn test_prompt_lines_follow_answer_order() {
        let mut answers = AnswerSet::new();
        answers.insert("What type of website?", &AnswerValue::Selection("blog".into()));
        answers.insert("Responsive?", &AnswerValue::Toggle(true));

        let prompt = build_user_prompt(&answers);
        let type_pos = prompt.find("What type of website?: blog").unwrap();
        let responsive_pos = prompt.find("Responsive?: yes").unwrap();
        assert!(type_pos < responsive_pos);
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let mut answers = AnswerSet::new();
        answers.insert("Name", &AnswerValue::Text("Acme".into()));

        assert_eq!(build_user_prompt(&answers), build_user_prompt(&answers));
    }

    #[test]
    fn test_empty_answers_still_form_a_request() {
        let prompt = build_user_prompt(&AnswerSet::new());
        assert!(prompt.starts_with("Please create a website"));
        assert!(prompt.ends_with("for this website."));
    }
}
