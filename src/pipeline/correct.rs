//! Grammar correction: the first remote call.
//!
//! Intentionally thin — the instruction wording lives in [`crate::prompts`]
//! and the transport in [`crate::llm`], so this stage is one prompt build
//! and one provider call. The full document goes out in a single request;
//! if it exceeds the model's input capacity the API error surfaces here
//! unmodified, and the request fails.

use crate::error::PolishError;
use crate::llm::CompletionProvider;
use crate::prompts;
use std::sync::Arc;
use tracing::debug;

/// Submit `text` for grammar correction and return the completion verbatim.
pub async fn correct_grammar(
    provider: &Arc<dyn CompletionProvider>,
    text: &str,
) -> Result<String, PolishError> {
    let prompt = prompts::grammar_prompt(text);
    debug!(chars = text.len(), "Submitting grammar correction");
    provider.complete(&prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockProvider;

    #[tokio::test]
    async fn submits_the_filled_grammar_prompt() {
        let mock = Arc::new(MockProvider::with_reply(|_| "corrected".to_string()));
        let provider: Arc<dyn CompletionProvider> = mock.clone();

        let result = correct_grammar(&provider, "Their going home.").await.unwrap();

        assert_eq!(result, "corrected");
        assert_eq!(
            mock.calls(),
            vec!["\n    Correct the following text for grammar mistakes:\n    Their going home.\n    "]
        );
    }

    #[tokio::test]
    async fn provider_failure_is_fatal() {
        let mock = Arc::new(MockProvider::failing(|| PolishError::ApiError {
            status: 401,
            message: "bad key".into(),
        }));
        let provider: Arc<dyn CompletionProvider> = mock;

        let err = correct_grammar(&provider, "text").await.unwrap_err();
        assert!(matches!(err, PolishError::ApiError { status: 401, .. }));
    }
}
