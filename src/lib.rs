//! # docpolish
//!
//! Correct grammar and rewrite the style of a document using a hosted
//! completion model.
//!
//! ## Why this crate?
//!
//! Rule-based grammar checkers catch typos but cannot rephrase a whole
//! document into a different register. docpolish sends the full text through
//! two fixed-instruction completion calls — one for grammar, one for style —
//! and hands back the rewritten text verbatim. PDF input is flattened to
//! plain text first; the model sees one document, not pages.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF / text
//!  │
//!  ├─ 1. Ingest   extract per-page text, concatenate in document order
//!  ├─ 2. Correct  one completion call with the grammar-fix instruction
//!  ├─ 3. Rewrite  one completion call with the style instruction
//!  └─ 4. Output   rewritten text + per-stage stats
//! ```
//!
//! Each stage's output is the sole input of the next. There is no chunking,
//! no retry, and no state shared between requests — a request is two remote
//! calls over the whole document.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docpolish::{polish_text, PolishConfig, Style};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Model, key and endpoint read from OPENAI_MODEL / OPENAI_API_KEY /
//!     // OPENAI_API_HOST
//!     let config = PolishConfig::from_env();
//!     let output = polish_text("Their going to the store.", Style::Formal, &config).await?;
//!     println!("{}", output.text);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `docpolish` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! docpolish = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod polish;
pub mod prompts;
pub mod server;
pub mod style;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{PolishConfig, PolishConfigBuilder};
pub use error::PolishError;
pub use llm::{CompletionProvider, MockProvider, OpenAiProvider};
pub use pipeline::ingest::{DocumentLoader, MockLoader, PdfLoader};
pub use polish::{
    polish, polish_from_bytes, polish_sync, polish_text, route_form, select_input,
    DocumentInput, PolishOutput, PolishRequest, PolishStats, MISSING_INPUT_PROMPT, MODE_PDF,
    MODE_TEXT,
};
pub use style::Style;
