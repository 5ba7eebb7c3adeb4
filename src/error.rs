//! Error types for the docpolish library.
//!
//! A single fatal error type: the pipeline has no partial-success mode.
//! A request is one document and two completion calls; if any stage fails
//! the whole request fails, so every variant here aborts the request.
//! The web layer surfaces these as an error response, the CLI wraps them
//! with `anyhow` context.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the docpolish library.
#[derive(Debug, Error)]
pub enum PolishError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    /// The PDF extractor could not pull text out of the document.
    #[error("Text extraction failed for '{path}': {detail}\nScanned or image-only PDFs have no extractable text.")]
    ExtractionFailed { path: PathBuf, detail: String },

    // ── LLM errors ────────────────────────────────────────────────────────
    /// The completion provider is not configured (missing API key etc.).
    #[error("Completion provider is not configured.\n{hint}")]
    ProviderNotConfigured { hint: String },

    /// The completion API returned an error response.
    #[error("Completion API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// The completion API call timed out.
    #[error("Completion API call timed out after {secs}s")]
    ApiTimeout { secs: u64 },

    /// The API answered but the response carried no completion text.
    #[error("Completion API returned an empty response")]
    EmptyCompletion,

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
