//! The embedded form page.
//!
//! The whole UI is one HTML file compiled into the binary, so there is no
//! asset directory to resolve against: every non-API request gets the form.

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Assets;

/// Serve the form page for any path the API does not own.
pub async fn form_page() -> Response {
    match Assets::get("index.html") {
        Some(page) => Response::builder()
            .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
            .body(Body::from(page.data.into_owned()))
            .unwrap(),
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("form page missing from build"))
            .unwrap(),
    }
}
