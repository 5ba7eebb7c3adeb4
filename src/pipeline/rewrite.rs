//! Style rewriting: the second and last remote call.
//!
//! Takes the corrected text and a style phrase, builds the rewrite
//! instruction, and returns the completion verbatim. One-shot: nothing
//! chains back into grammar correction.

use crate::error::PolishError;
use crate::llm::CompletionProvider;
use crate::prompts;
use crate::style::Style;
use std::sync::Arc;
use tracing::debug;

/// Submit `text` for rewriting in `style` and return the completion verbatim.
pub async fn rewrite_text(
    provider: &Arc<dyn CompletionProvider>,
    text: &str,
    style: Style,
) -> Result<String, PolishError> {
    rewrite_with_phrase(provider, text, style.phrase()).await
}

/// Rewrite with an already-resolved style phrase.
///
/// Split out so the form layer, which resolves raw labels (with the
/// lowercase `"standard"` fallback for unknown ones), shares the same call.
pub async fn rewrite_with_phrase(
    provider: &Arc<dyn CompletionProvider>,
    text: &str,
    phrase: &str,
) -> Result<String, PolishError> {
    let prompt = prompts::rewrite_prompt(text, phrase);
    debug!(chars = text.len(), style = phrase, "Submitting style rewrite");
    provider.complete(&prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockProvider;

    #[tokio::test]
    async fn submits_the_filled_rewrite_prompt() {
        let mock = Arc::new(MockProvider::with_reply(|_| "rewritten".to_string()));
        let provider: Arc<dyn CompletionProvider> = mock.clone();

        let result = rewrite_text(&provider, "They are going home.", Style::Formal)
            .await
            .unwrap();

        assert_eq!(result, "rewritten");
        assert_eq!(
            mock.calls(),
            vec!["\n    Rewrite the following text in a formal, professional style:\n    They are going home.\n    "]
        );
    }

    #[tokio::test]
    async fn each_style_lands_its_phrase_in_the_prompt() {
        for style in Style::ALL {
            let mock = Arc::new(MockProvider::new());
            let provider: Arc<dyn CompletionProvider> = mock.clone();
            rewrite_text(&provider, "text", style).await.unwrap();
            assert!(
                mock.calls()[0].contains(style.phrase()),
                "prompt for {style} must contain {:?}",
                style.phrase()
            );
        }
    }
}
