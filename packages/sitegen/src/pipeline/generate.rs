//! The generation call: one model round trip, then extraction.

use tracing::{debug, warn};

use crate::error::Result;
use crate::extract::extract_code;
use crate::pipeline::prompts::{build_user_prompt, MAX_OUTPUT_TOKENS, SYSTEM_PROMPT};
use crate::traits::model::CompletionModel;
use crate::types::{answers::AnswerSet, site::GeneratedSite};

/// Generate a site from finalized answers.
///
/// Issues exactly one completion request and feeds the raw text to the
/// extractor. Transport and upstream failures propagate to the caller,
/// which retries by resubmitting; regeneration from the same answers may
/// legitimately produce a different site each time.
pub async fn generate_site(
    model: &dyn CompletionModel,
    answers: &AnswerSet,
) -> Result<GeneratedSite> {
    let user_prompt = build_user_prompt(answers);

    debug!(answers = answers.len(), "requesting site generation");
    let completion = model
        .complete(SYSTEM_PROMPT, &user_prompt, MAX_OUTPUT_TOKENS)
        .await?;

    let site = extract_code(&completion);
    if site.is_empty() {
        warn!(
            completion_len = completion.len(),
            "completion contained no fenced code blocks"
        );
    }

    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SitegenError;
    use crate::testing::MockModel;
    use crate::types::answers::AnswerValue;

    fn answers() -> AnswerSet {
        let mut set = AnswerSet::new();
        set.insert("Website name", &AnswerValue::Text("Acme".into()));
        set.insert("Color scheme", &AnswerValue::Selection("dark".into()));
        set
    }

    #[tokio::test]
    async fn test_single_call_and_extraction() {
        let model = MockModel::completing(
            "```html\n<h1>Acme</h1>\n```\n```css\nh1{}\n```\n```js\nlet x;\n```",
        );

        let site = generate_site(&model, &answers()).await.unwrap();

        assert_eq!(site.html, "<h1>Acme</h1>");
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_prompt_carries_answer_lines() {
        let model = MockModel::completing("```html\nok\n```");
        generate_site(&model, &answers()).await.unwrap();

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].user.contains("Website name: Acme"));
        assert!(calls[0].user.contains("Color scheme: dark"));
        assert_eq!(calls[0].system, SYSTEM_PROMPT);
        assert_eq!(calls[0].max_tokens, MAX_OUTPUT_TOKENS);
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates_without_retry() {
        let model = MockModel::failing("service unavailable");

        let err = generate_site(&model, &answers()).await.unwrap_err();

        assert!(matches!(err, SitegenError::Generation(_)));
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blockless_completion_degrades_to_empty_site() {
        let model = MockModel::completing("Sorry, I cannot help with that.");

        let site = generate_site(&model, &answers()).await.unwrap();
        assert!(site.is_empty());
    }
}
