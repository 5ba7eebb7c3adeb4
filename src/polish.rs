//! Top-level polishing entry points.
//!
//! One request is one document through three stages: ingest (PDF only),
//! correct, rewrite. The input is a tagged union — a PDF path or raw text —
//! rather than a pair of optional fields, so the "which field is set"
//! validation exists only at the form boundary ([`select_input`]) and the
//! core API cannot receive an ambiguous request.

use crate::config::PolishConfig;
use crate::error::PolishError;
use crate::llm::{CompletionProvider, OpenAiProvider};
use crate::pipeline::ingest::{DocumentLoader, PdfLoader};
use crate::pipeline::{correct, ingest, rewrite};
use crate::style::Style;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Fixed response when the form submits no usable input.
///
/// This is the only locally handled validation in the system; every other
/// failure propagates as a [`PolishError`].
pub const MISSING_INPUT_PROMPT: &str =
    "Please select an input mode and provide the corresponding data.";

/// Form label for the PDF input mode.
pub const MODE_PDF: &str = "PDF File";
/// Form label for the raw-text input mode.
pub const MODE_TEXT: &str = "Text Input";

/// The document to polish: a PDF on disk or literal text.
#[derive(Debug, Clone)]
pub enum DocumentInput {
    /// Path to a readable PDF; flattened to text by the ingest stage.
    PdfFile(PathBuf),
    /// Literal text; skips ingestion entirely.
    RawText(String),
}

/// A complete polish request.
#[derive(Debug, Clone)]
pub struct PolishRequest {
    pub input: DocumentInput,
    pub style: Style,
}

/// Timing and size counters for one request.
#[derive(Debug, Clone, Serialize)]
pub struct PolishStats {
    /// Fragments the loader yielded (0 for raw-text input).
    pub fragments: usize,
    /// Characters of document content sent to grammar correction.
    pub source_chars: usize,
    /// Characters returned by grammar correction.
    pub corrected_chars: usize,
    /// Characters in the final rewritten text.
    pub final_chars: usize,
    /// Wall-clock duration of the whole request.
    pub total_duration_ms: u64,
    /// Duration of the grammar-correction call.
    pub correct_duration_ms: u64,
    /// Duration of the rewrite call.
    pub rewrite_duration_ms: u64,
}

/// Result of a polish request: the rewritten text plus stats.
#[derive(Debug, Clone, Serialize)]
pub struct PolishOutput {
    /// The rewritten document, verbatim from the model.
    pub text: String,
    pub stats: PolishStats,
}

/// Polish a document: ingest if needed, correct grammar, rewrite style.
///
/// This is the primary entry point for the library.
///
/// # Errors
/// Any stage failure is fatal for the request: unreadable or corrupt PDF,
/// remote API failure (auth, network, rate limit, oversized input), or
/// misconfiguration surfacing as an API error. There is no retry and no
/// partial result.
pub async fn polish(
    request: &PolishRequest,
    config: &PolishConfig,
) -> Result<PolishOutput, PolishError> {
    let total_start = Instant::now();
    let provider = resolve_provider(config)?;

    // ── Stage 1: Ingest ──────────────────────────────────────────────────
    let (content, fragments) = match &request.input {
        DocumentInput::PdfFile(path) => {
            info!("Polishing PDF: {}", path.display());
            let fragments = resolve_loader(config).load_fragments(path).await?;
            let count = fragments.len();
            (ingest::concat_fragments(&fragments), count)
        }
        DocumentInput::RawText(text) => {
            info!(chars = text.len(), "Polishing raw text");
            (text.clone(), 0)
        }
    };
    let source_chars = content.len();

    // ── Stage 2: Correct ─────────────────────────────────────────────────
    let correct_start = Instant::now();
    let corrected = correct::correct_grammar(&provider, &content).await?;
    let correct_duration_ms = correct_start.elapsed().as_millis() as u64;

    // ── Stage 3: Rewrite ─────────────────────────────────────────────────
    let rewrite_start = Instant::now();
    let text = rewrite::rewrite_text(&provider, &corrected, request.style).await?;
    let rewrite_duration_ms = rewrite_start.elapsed().as_millis() as u64;

    let stats = PolishStats {
        fragments,
        source_chars,
        corrected_chars: corrected.len(),
        final_chars: text.len(),
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        correct_duration_ms,
        rewrite_duration_ms,
    };

    info!(
        "Polish complete: {} → {} chars in {}ms",
        stats.source_chars, stats.final_chars, stats.total_duration_ms
    );

    Ok(PolishOutput { text, stats })
}

/// Polish literal text with the given style.
pub async fn polish_text(
    text: impl Into<String>,
    style: Style,
    config: &PolishConfig,
) -> Result<PolishOutput, PolishError> {
    let request = PolishRequest {
        input: DocumentInput::RawText(text.into()),
        style,
    };
    polish(&request, config).await
}

/// Polish PDF bytes in memory.
///
/// Writes `bytes` to a managed [`tempfile`] so the extractor has a path to
/// open; the file is cleaned up automatically on return or panic. Use this
/// when the PDF arrives over the network (the form upload path) rather
/// than from disk.
pub async fn polish_from_bytes(
    bytes: &[u8],
    style: Style,
    config: &PolishConfig,
) -> Result<PolishOutput, PolishError> {
    let mut tmp = tempfile::NamedTempFile::new()
        .map_err(|e| PolishError::Internal(format!("tempfile: {e}")))?;
    tmp.write_all(bytes)
        .map_err(|e| PolishError::Internal(format!("tempfile write: {e}")))?;
    let request = PolishRequest {
        input: DocumentInput::PdfFile(tmp.path().to_path_buf()),
        style,
    };
    // `tmp` is dropped (and the file deleted) when `polish` returns
    polish(&request, config).await
}

/// Synchronous wrapper around [`polish`].
///
/// Creates a temporary tokio runtime internally.
pub fn polish_sync(
    request: &PolishRequest,
    config: &PolishConfig,
) -> Result<PolishOutput, PolishError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| PolishError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(polish(request, config))
}

/// Translate the form's optional fields into a typed input.
///
/// Exactly two combinations are valid: mode [`MODE_PDF`] with a file, and
/// mode [`MODE_TEXT`] with text. Everything else — missing file, missing
/// text, unknown or unset mode — is `None`, and the caller answers with
/// [`MISSING_INPUT_PROMPT`] without touching the model.
pub fn select_input(
    mode: &str,
    file: Option<&Path>,
    text: Option<&str>,
) -> Option<DocumentInput> {
    match mode {
        MODE_PDF => file.map(|p| DocumentInput::PdfFile(p.to_path_buf())),
        MODE_TEXT => text.map(|t| DocumentInput::RawText(t.to_string())),
        _ => None,
    }
}

/// The form router: raw fields in, display string out.
///
/// Exactly two reachable branches. PDF mode runs ingest → correct →
/// rewrite; text mode runs correct → rewrite on the provided text. Any
/// other combination returns [`MISSING_INPUT_PROMPT`] with no remote call
/// made. The style label is resolved with the lowercase `"standard"`
/// fallback for unrecognised values, so the router is total over its
/// inputs: the only `Err` cases are genuine stage failures.
pub async fn route_form(
    mode: &str,
    file: Option<&Path>,
    text: Option<&str>,
    style_label: &str,
    config: &PolishConfig,
) -> Result<String, PolishError> {
    let Some(input) = select_input(mode, file, text) else {
        return Ok(MISSING_INPUT_PROMPT.to_string());
    };

    let provider = resolve_provider(config)?;
    let content = match &input {
        DocumentInput::PdfFile(path) => {
            let fragments = resolve_loader(config).load_fragments(path).await?;
            ingest::concat_fragments(&fragments)
        }
        DocumentInput::RawText(text) => text.clone(),
    };
    let corrected = correct::correct_grammar(&provider, &content).await?;
    rewrite::rewrite_with_phrase(&provider, &corrected, crate::style::phrase_for_label(style_label))
        .await
}

/// Resolve the completion provider, most-specific first.
///
/// 1. **Pre-built provider** (`config.provider`) — the caller constructed
///    it entirely; used as-is. This is the test seam.
/// 2. **Config fields** — an [`OpenAiProvider`] built from model, key and
///    endpoint. A missing key is not caught here; it fails at first call.
fn resolve_provider(config: &PolishConfig) -> Result<Arc<dyn CompletionProvider>, PolishError> {
    if let Some(ref provider) = config.provider {
        return Ok(Arc::clone(provider));
    }
    Ok(Arc::new(OpenAiProvider::from_config(config)?))
}

/// Resolve the document loader: the configured one, or the PDF extractor.
fn resolve_loader(config: &PolishConfig) -> Arc<dyn DocumentLoader> {
    match config.loader {
        Some(ref loader) => Arc::clone(loader),
        None => Arc::new(PdfLoader),
    }
}
