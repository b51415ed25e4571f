//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{tailor_resume, GenerateRequest, GenerateResponse};
use crate::state::AppState;

/// POST /api/generate
///
/// Two-pass pipeline: extract grounded facts from the base resume, then compose a
/// tailored Markdown resume in the export dialect.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let response = tailor_resume(state.llm.as_ref(), &request).await?;

    Ok(Json(response))
}
