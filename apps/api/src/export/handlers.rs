//! Axum route handler for DOCX export.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::export::contact::Identity;
use crate::export::docx::{export_docx, DOCX_MIME};
use crate::state::AppState;

/// Markdown shorter than this (after trimming) is treated as missing.
pub const MIN_MARKDOWN_CHARS: usize = 10;

const ATTACHMENT_DISPOSITION: &str = "attachment; filename=\"tailored-resume.docx\"";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocxRequest {
    pub markdown: Option<String>,
    #[serde(flatten)]
    pub identity: Identity,
}

/// POST /api/export/docx
///
/// Converts tailored Markdown plus caller identity into a styled Word document.
pub async fn handle_export_docx(
    State(state): State<AppState>,
    payload: Result<Json<ExportDocxRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;

    let markdown = match request.markdown {
        Some(markdown) if markdown.trim().chars().count() >= MIN_MARKDOWN_CHARS => markdown,
        _ => return Err(AppError::Validation("Missing markdown content.".to_string())),
    };

    let bytes = export_docx(markdown, request.identity, state.stylesheet).await?;
    info!("Exported DOCX ({} bytes)", bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME),
            (header::CONTENT_DISPOSITION, ATTACHMENT_DISPOSITION),
        ],
        Bytes::from(bytes),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_flattens_identity() {
        let request: ExportDocxRequest = serde_json::from_str(
            r#"{"markdown": "SUMMARY\nBuilds things.", "firstName": "Ana", "linkedIn": "in/ana"}"#,
        )
        .unwrap();
        assert_eq!(request.markdown.as_deref(), Some("SUMMARY\nBuilds things."));
        assert_eq!(request.identity.first_name.as_deref(), Some("Ana"));
        assert_eq!(request.identity.linked_in.as_deref(), Some("in/ana"));
        assert_eq!(request.identity.email, None);
    }

    #[test]
    fn test_request_without_markdown_parses() {
        let request: ExportDocxRequest = serde_json::from_str(r#"{"lastName": "Lee"}"#).unwrap();
        assert!(request.markdown.is_none());
    }
}
