//! Axum route handlers for the resume API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::info_span;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::{generate_resume, GenerateRequest, ResumeForm};
use crate::generation::optimizer::{optimize_resume, OptimizeForm, OptimizeRequest};
use crate::render::RenderOptions;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub resume: String,
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::InvalidBody(rejection.body_text()))
}

/// POST /generate
///
/// Builds a resume from the create-form fields. All eight fields are required.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<ResumeResponse>, AppError> {
    let form = ResumeForm::try_from(json_body(payload)?)?;
    let options = RenderOptions::from(&state.config);

    let span = info_span!("generate_resume", request_id = %Uuid::new_v4());
    let resume = span
        .in_scope(|| generate_resume(&form, &options))
        .map_err(AppError::GenerationFailed)?;

    Ok(Json(ResumeResponse { resume }))
}

/// POST /optimize
///
/// Rebuilds an existing resume (plain text or HTML) around a job description.
pub async fn handle_optimize(
    State(state): State<AppState>,
    payload: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Result<Json<ResumeResponse>, AppError> {
    let form = OptimizeForm::try_from(json_body(payload)?)?;
    let options = RenderOptions::from(&state.config);

    let span = info_span!("optimize_resume", request_id = %Uuid::new_v4());
    let resume = span
        .in_scope(|| optimize_resume(&form, &options))
        .map_err(AppError::OptimizationFailed)?;

    Ok(Json(ResumeResponse { resume }))
}
