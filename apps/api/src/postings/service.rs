//! Posting and Listing services.
//!
//! Posting writes exactly one `job_description` row per call and stamps it with
//! today's UTC date. Listing is a read-only full scan, newest first.

use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::job::{JobListing, JobRecord};
use crate::postings::store::JobStore;

/// Request body for posting a generated description.
#[derive(Debug, Clone, Deserialize)]
pub struct PostJobRequest {
    pub job_id: String,
    pub job_title: String,
    pub custom_note: String,
    pub key_focus: String,
    #[serde(default)]
    pub benefits: String,
    pub description: String,
    #[serde(default)]
    pub job_code: Option<String>,
}

/// Persists one job record. No identifier generation and no dedup on `job_id`.
pub async fn post_job(
    store: &dyn JobStore,
    request: PostJobRequest,
) -> Result<JobRecord, AppError> {
    if request.job_id.trim().is_empty() {
        return Err(AppError::Save("job_id cannot be empty".to_string()));
    }
    if request.description.trim().is_empty() {
        return Err(AppError::Save("description cannot be empty".to_string()));
    }

    let record = JobRecord {
        job_id: request.job_id,
        job_title: request.job_title,
        custom_note: request.custom_note,
        key_focus: request.key_focus,
        benefits: request.benefits,
        description: request.description,
        date_posted: Utc::now().date_naive(),
        job_code: request.job_code,
    };

    store
        .insert(&record)
        .await
        .map_err(|e| AppError::Save(format!("insert of job {} failed: {e}", record.job_id)))?;

    info!(
        "Posted job {} ({}) on {}",
        record.job_id, record.job_title, record.date_posted
    );
    Ok(record)
}

/// Returns every posted job, newest `date_posted` first.
pub async fn list_jobs(store: &dyn JobStore) -> Result<Vec<JobListing>, AppError> {
    store
        .list_newest_first()
        .await
        .map_err(|e| AppError::Retrieval(e.to_string()))
}
