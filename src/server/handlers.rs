//! The form submission handler.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use std::io::Write;
use tracing::info;

use crate::polish::route_form;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Response body for a form submission.
///
/// `result` is either the rewritten document or the fixed
/// prompt-the-user string; the page shows it in the output field either way.
#[derive(Debug, Serialize)]
pub struct PolishResponse {
    pub result: String,
}

/// POST /api/polish — run the request router over the submitted form.
///
/// Multipart fields: `mode` ("PDF File" | "Text Input"), `style`, `text`,
/// `file`. An uploaded PDF is written to a managed temp file so the ingest
/// stage has a path to open; the file is removed when the request ends.
/// Empty fields are treated as absent, which is what lets the router's
/// missing-input branch fire for a form submitted without data.
pub async fn polish_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PolishResponse>, ApiError> {
    let mut mode = String::new();
    let mut style_label = String::new();
    let mut text: Option<String> = None;
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "mode" => {
                mode = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Bad 'mode' field: {}", e)))?;
            }
            "style" => {
                style_label = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Bad 'style' field: {}", e)))?;
            }
            "text" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Bad 'text' field: {}", e)))?;
                if !value.is_empty() {
                    text = Some(value);
                }
            }
            "file" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Bad 'file' field: {}", e)))?;
                if !data.is_empty() {
                    file_bytes = Some(data.to_vec());
                }
            }
            _ => {}
        }
    }

    info!(
        mode = %mode,
        style = %style_label,
        has_text = text.is_some(),
        has_file = file_bytes.is_some(),
        "Form submission"
    );

    // The upload needs a path on disk for the extractor. NamedTempFile
    // removes it when `_upload` drops, after the router returns.
    let _upload = match file_bytes {
        Some(bytes) => {
            let mut tmp = tempfile::NamedTempFile::new().map_err(|e| {
                ApiError::BadRequest(format!("Failed to stage uploaded file: {}", e))
            })?;
            tmp.write_all(&bytes).map_err(|e| {
                ApiError::BadRequest(format!("Failed to stage uploaded file: {}", e))
            })?;
            Some(tmp)
        }
        None => None,
    };

    let result = route_form(
        &mode,
        _upload.as_ref().map(|t| t.path()),
        text.as_deref(),
        &style_label,
        &state.config,
    )
    .await?;

    Ok(Json(PolishResponse { result }))
}
