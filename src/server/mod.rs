//! The local web form: one page, one API route.
//!
//! A single-page form (radio input-mode selector, file upload, free-text
//! field, style dropdown, read-only output) served from embedded static
//! assets, plus `POST /api/polish` which drives the request router. No
//! other routes exist; the server holds only the read-only configuration
//! and nothing is shared between requests.

mod app;
mod error;
mod handlers;
mod state;
mod web;

pub use app::{create_router, run_server};
pub use state::AppState;
