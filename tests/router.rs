//! Integration tests for the request router and pipeline composition.
//!
//! The remote model is stubbed with `MockProvider`; assertions pin the
//! exact prompt strings each stage constructs, not end-to-end model
//! output, because the hosted model is not deterministic across provider
//! versions even at temperature zero.

use docpolish::{
    polish, polish_text, route_form, CompletionProvider, DocumentInput, DocumentLoader,
    MockLoader, MockProvider, PolishConfig, PolishRequest, Style, MISSING_INPUT_PROMPT,
    MODE_PDF, MODE_TEXT,
};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Stub that answers the grammar call with `corrected` and every other
/// call with `rewritten`.
fn staged_mock(corrected: &str, rewritten: &str) -> Arc<MockProvider> {
    let corrected = corrected.to_string();
    let rewritten = rewritten.to_string();
    Arc::new(MockProvider::with_reply(move |prompt| {
        if prompt.contains("Correct the following text for grammar mistakes") {
            corrected.clone()
        } else {
            rewritten.clone()
        }
    }))
}

fn config_with(mock: &Arc<MockProvider>) -> PolishConfig {
    let provider: Arc<dyn CompletionProvider> = mock.clone();
    PolishConfig::builder().provider(provider).build().unwrap()
}

// ── Text mode ────────────────────────────────────────────────────────────

#[tokio::test]
async fn text_mode_runs_correct_then_rewrite() {
    let mock = staged_mock("They are going to the store.", "The final text.");
    let config = config_with(&mock);

    let result = route_form(
        MODE_TEXT,
        None,
        Some("Their going to the store."),
        "Formal",
        &config,
    )
    .await
    .unwrap();

    assert_eq!(result, "The final text.");

    let calls = mock.calls();
    assert_eq!(calls.len(), 2, "exactly two remote calls, in order");
    assert_eq!(
        calls[0],
        "\n    Correct the following text for grammar mistakes:\n    Their going to the store.\n    "
    );
    assert_eq!(
        calls[1],
        "\n    Rewrite the following text in a formal, professional style:\n    They are going to the store.\n    "
    );
}

#[tokio::test]
async fn rewrite_consumes_the_corrected_text_not_the_original() {
    let mock = staged_mock("CORRECTED", "done");
    let config = config_with(&mock);

    route_form(MODE_TEXT, None, Some("original"), "Natural", &config)
        .await
        .unwrap();

    let calls = mock.calls();
    assert!(calls[1].contains("CORRECTED"));
    assert!(!calls[1].contains("original"));
}

#[tokio::test]
async fn every_known_style_lands_its_phrase() {
    let cases = [
        ("Standard", "a standard, well-structured"),
        ("Natural", "a human, conversational"),
        ("Formal", "a formal, professional"),
        ("Fluency", "a fluent, clear"),
    ];

    for (label, phrase) in cases {
        let mock = staged_mock("fixed", "out");
        let config = config_with(&mock);
        route_form(MODE_TEXT, None, Some("text"), label, &config)
            .await
            .unwrap();
        assert!(
            mock.calls()[1].contains(phrase),
            "label {label:?} must produce phrase {phrase:?}, got {:?}",
            mock.calls()[1]
        );
    }
}

#[tokio::test]
async fn unknown_style_label_uses_literal_standard() {
    let mock = staged_mock("fixed", "out");
    let config = config_with(&mock);

    route_form(MODE_TEXT, None, Some("text"), "Shakespearean", &config)
        .await
        .unwrap();

    assert_eq!(
        mock.calls()[1],
        "\n    Rewrite the following text in standard style:\n    fixed\n    "
    );
}

// ── Missing-input branch ─────────────────────────────────────────────────

#[tokio::test]
async fn pdf_mode_without_file_returns_prompt_with_no_remote_calls() {
    let mock = staged_mock("fixed", "out");
    let config = config_with(&mock);

    let result = route_form(MODE_PDF, None, None, "Formal", &config)
        .await
        .unwrap();

    assert_eq!(result, MISSING_INPUT_PROMPT);
    assert_eq!(
        result,
        "Please select an input mode and provide the corresponding data."
    );
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn text_mode_without_text_returns_prompt() {
    let mock = staged_mock("fixed", "out");
    let config = config_with(&mock);

    let result = route_form(MODE_TEXT, None, None, "Standard", &config)
        .await
        .unwrap();

    assert_eq!(result, MISSING_INPUT_PROMPT);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn unset_mode_returns_prompt_even_with_both_inputs() {
    let mock = staged_mock("fixed", "out");
    let config = config_with(&mock);

    let result = route_form("", Some(Path::new("doc.pdf")), Some("text"), "Formal", &config)
        .await
        .unwrap();

    assert_eq!(result, MISSING_INPUT_PROMPT);
    assert_eq!(mock.call_count(), 0);
}

// ── PDF mode ─────────────────────────────────────────────────────────────

fn config_with_loader(
    mock: &Arc<MockProvider>,
    fragments: Vec<&'static str>,
) -> PolishConfig {
    let provider: Arc<dyn CompletionProvider> = mock.clone();
    let loader: Arc<dyn DocumentLoader> = Arc::new(MockLoader::new(fragments));
    PolishConfig::builder()
        .provider(provider)
        .loader(loader)
        .build()
        .unwrap()
}

#[tokio::test]
async fn pdf_mode_corrects_the_concatenated_fragments() {
    let mock = staged_mock("All fixed.", "All rewritten.");
    let config = config_with_loader(&mock, vec!["A.", "B."]);

    let result = route_form(MODE_PDF, Some(Path::new("doc.pdf")), None, "Formal", &config)
        .await
        .unwrap();

    assert_eq!(result, "All rewritten.");

    let calls = mock.calls();
    assert_eq!(calls.len(), 2);
    // The grammar call sees the flattened document: accumulator seeded
    // with a space, fragment boundaries gone.
    assert_eq!(
        calls[0],
        "\n    Correct the following text for grammar mistakes:\n     A.B.\n    "
    );
    assert_eq!(
        calls[1],
        "\n    Rewrite the following text in a formal, professional style:\n    All fixed.\n    "
    );
}

#[tokio::test]
async fn polish_counts_pdf_fragments_in_stats() {
    let mock = staged_mock("fixed", "out");
    let config = config_with_loader(&mock, vec!["one ", "two ", "three"]);

    let request = PolishRequest {
        input: DocumentInput::PdfFile("doc.pdf".into()),
        style: Style::Natural,
    };
    let output = polish(&request, &config).await.unwrap();

    assert_eq!(output.text, "out");
    assert_eq!(output.stats.fragments, 3);
    assert_eq!(output.stats.source_chars, " one two three".len());
}

// ── PDF mode error propagation ───────────────────────────────────────────

#[tokio::test]
async fn pdf_mode_with_non_pdf_file_fails_before_any_remote_call() {
    let mock = staged_mock("fixed", "out");
    let config = config_with(&mock);

    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(b"just some text, no PDF header").unwrap();

    let err = route_form(MODE_PDF, Some(f.path()), None, "Formal", &config)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("not a valid PDF"), "got: {err}");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn pdf_mode_with_missing_file_fails() {
    let mock = staged_mock("fixed", "out");
    let config = config_with(&mock);

    let err = route_form(
        MODE_PDF,
        Some(Path::new("/nonexistent/report.pdf")),
        None,
        "Formal",
        &config,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("not found"), "got: {err}");
    assert_eq!(mock.call_count(), 0);
}

// ── Remote failure propagation ───────────────────────────────────────────

#[tokio::test]
async fn api_failure_in_correction_aborts_the_request() {
    let mock = Arc::new(MockProvider::failing(|| docpolish::PolishError::ApiError {
        status: 429,
        message: "rate limited".into(),
    }));
    let config = config_with(&mock);

    let err = route_form(MODE_TEXT, None, Some("text"), "Formal", &config)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("429"), "got: {err}");
    // The rewrite call was never attempted.
    assert_eq!(mock.call_count(), 1);
}

// ── Typed library entry point ────────────────────────────────────────────

#[tokio::test]
async fn polish_text_reports_stats() {
    let mock = staged_mock("They are going to the store.", "Final.");
    let config = config_with(&mock);

    let output = polish_text("Their going to the store.", Style::Formal, &config)
        .await
        .unwrap();

    assert_eq!(output.text, "Final.");
    assert_eq!(output.stats.fragments, 0);
    assert_eq!(output.stats.source_chars, "Their going to the store.".len());
    assert_eq!(
        output.stats.corrected_chars,
        "They are going to the store.".len()
    );
    assert_eq!(output.stats.final_chars, "Final.".len());
}

#[tokio::test]
async fn polish_output_serialises_to_json() {
    let mock = staged_mock("fixed", "out");
    let config = config_with(&mock);

    let output = polish_text("text", Style::Standard, &config).await.unwrap();
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["text"], "out");
    assert!(json["stats"]["total_duration_ms"].is_u64());
}
