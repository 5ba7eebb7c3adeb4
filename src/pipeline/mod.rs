//! Pipeline stages for document polishing.
//!
//! Each submodule implements exactly one transformation step, and the
//! output of each stage is the sole input of the next. Keeping stages
//! separate makes each independently testable against a stub provider.
//!
//! ## Data Flow
//!
//! ```text
//! ingest ──▶ correct ──▶ rewrite
//! (PDF→text) (grammar)   (style)
//! ```
//!
//! 1. [`ingest`]  — validate the PDF and flatten its per-page text into one
//!    string; runs in `spawn_blocking` because extraction is CPU-bound
//! 2. [`correct`] — submit the grammar instruction; the first of the two
//!    remote calls
//! 3. [`rewrite`] — submit the style instruction over the corrected text;
//!    the second and last remote call

pub mod correct;
pub mod ingest;
pub mod rewrite;
