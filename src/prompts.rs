//! Instruction templates for the two completion calls.
//!
//! Centralising both prompts here serves two purposes:
//!
//! 1. **Single source of truth** — the exact wording the model receives is
//!    defined in one place and nowhere else.
//!
//! 2. **Testability** — unit tests assert the exact prompt string a stage
//!    builds without touching a real model; a wording regression fails a
//!    test, not a production run.
//!
//! The templates keep their surrounding whitespace (leading newline, 4-space
//! indent) on purpose: downstream tests pin the filled prompt byte-for-byte,
//! and the model output is not sensitive to it.

/// Instruction for the grammar-correction call. `{text}` is replaced with
/// the full document content, verbatim.
pub const GRAMMAR_PROMPT: &str = "\n    Correct the following text for grammar mistakes:\n    {text}\n    ";

/// Instruction for the rewrite call. `{style}` is replaced with the style's
/// descriptive phrase, `{text}` with the corrected document.
pub const REWRITE_PROMPT: &str = "\n    Rewrite the following text in {style} style:\n    {text}\n    ";

/// Fill [`GRAMMAR_PROMPT`] with the document content.
pub fn grammar_prompt(text: &str) -> String {
    GRAMMAR_PROMPT.replacen("{text}", text, 1)
}

/// Fill [`REWRITE_PROMPT`] with the style phrase and the corrected text.
pub fn rewrite_prompt(text: &str, style_phrase: &str) -> String {
    REWRITE_PROMPT
        .replacen("{style}", style_phrase, 1)
        .replacen("{text}", text, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_prompt_embeds_text_verbatim() {
        let p = grammar_prompt("Their going to the store.");
        assert_eq!(
            p,
            "\n    Correct the following text for grammar mistakes:\n    Their going to the store.\n    "
        );
    }

    #[test]
    fn rewrite_prompt_embeds_phrase_and_text() {
        let p = rewrite_prompt("They are going to the store.", "a formal, professional");
        assert_eq!(
            p,
            "\n    Rewrite the following text in a formal, professional style:\n    They are going to the store.\n    "
        );
    }

    #[test]
    fn braces_in_document_text_survive() {
        // The document itself may contain "{style}"; only the template's own
        // placeholders are substituted, each exactly once, style first.
        let p = rewrite_prompt("code: {style}", "a fluent, clear");
        assert!(p.contains("code: {style}"));
        assert!(p.starts_with("\n    Rewrite the following text in a fluent, clear style:"));
    }
}
