//! Axum route handlers for the Posting and Listing API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::job::JobListing;
use crate::postings::service::{list_jobs, post_job, PostJobRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PostJobResponse {
    pub status: &'static str,
}

/// POST /post-job-description
///
/// Stores the generated description with its inputs, stamped with today's date.
pub async fn handle_post_job(
    State(state): State<AppState>,
    Json(request): Json<PostJobRequest>,
) -> Result<Json<PostJobResponse>, AppError> {
    post_job(state.store.as_ref(), request).await?;
    Ok(Json(PostJobResponse { status: "success" }))
}

/// GET /job-descriptions
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobListing>>, AppError> {
    let jobs = list_jobs(state.store.as_ref()).await?;
    Ok(Json(jobs))
}
