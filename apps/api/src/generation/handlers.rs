//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::benefits::PREDEFINED_BENEFITS;
use crate::generation::generator::{generate_job_description, GenerateRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct BenefitsResponse {
    pub benefits: Vec<&'static str>,
}

/// POST /generate-job-description
///
/// Builds the prompt from the form fields and returns the generated text as-is.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let job_description = generate_job_description(state.generator.as_ref(), request).await?;
    Ok(Json(GenerateResponse { job_description }))
}

/// GET /benefits
pub async fn handle_list_benefits() -> Json<BenefitsResponse> {
    Json(BenefitsResponse {
        benefits: PREDEFINED_BENEFITS.to_vec(),
    })
}
