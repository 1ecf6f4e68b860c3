//! Axum route handlers for the Assessment API.

use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::assessment::engine::run_assessment;
use crate::assessment::models::AssessmentResult;
use crate::assessment::validator::ValidatorOptions;
use crate::errors::AppError;
use crate::state::AppState;

/// Hard cap on submitted CV text. Extraction upstream produces text far
/// below this; anything larger is a malformed request.
const MAX_CV_TEXT_BYTES: usize = 512 * 1024;

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub cv_text: String,
}

/// POST /api/v1/assessments
///
/// Assesses extracted CV text against the O-1A criteria. Empty or
/// whitespace-only text is accepted and yields an all-low result; partial
/// LLM failures degrade per criterion rather than failing the request.
pub async fn handle_assess(
    State(state): State<AppState>,
    Json(request): Json<AssessRequest>,
) -> Result<Json<AssessmentResult>, AppError> {
    if request.cv_text.len() > MAX_CV_TEXT_BYTES {
        return Err(AppError::Validation(format!(
            "cv_text exceeds {MAX_CV_TEXT_BYTES} bytes"
        )));
    }

    let options = ValidatorOptions {
        timeout: Duration::from_secs(state.config.llm_timeout_secs),
        max_concurrency: state.config.llm_max_concurrency,
    };

    let result = run_assessment(
        &request.cv_text,
        &state.rules,
        Arc::clone(&state.extractor),
        &options,
    )
    .await;

    Ok(Json(result))
}
