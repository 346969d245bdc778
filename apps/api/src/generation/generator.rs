//! Job Description Generation: prompt assembly plus one text-generator call.
//!
//! Flow: validate required fields → compose benefits → build prompt →
//!       TextGenerator → raw text back to the caller. Nothing is persisted here.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::benefits::compose_benefits;
use crate::generation::prompts::build_job_description_prompt;
use crate::llm_client::TextGenerator;

/// The four values that make up a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRequest {
    pub job_title: String,
    pub custom_note: String,
    pub key_focus: String,
    pub benefits: String,
}

/// Request body for job description generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub job_title: String,
    pub custom_note: String,
    pub key_focus: String,
    #[serde(default)]
    pub benefits: String,
    /// Catalogue picks, appended after `benefits`.
    #[serde(default)]
    pub selected_benefits: Vec<String>,
    /// Comma-separated extras, appended last.
    #[serde(default)]
    pub custom_benefits: String,
}

impl GenerateRequest {
    /// Checks the required fields and folds the benefit inputs into one string.
    pub fn into_job_request(self) -> Result<JobRequest, AppError> {
        for (field, value) in [
            ("job_title", &self.job_title),
            ("custom_note", &self.custom_note),
            ("key_focus", &self.key_focus),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Generation(format!("{field} cannot be empty")));
            }
        }

        let benefits = if self.selected_benefits.is_empty() && self.custom_benefits.is_empty() {
            self.benefits
        } else {
            compose_benefits(&self.benefits, &self.selected_benefits, &self.custom_benefits)
        };

        Ok(JobRequest {
            job_title: self.job_title,
            custom_note: self.custom_note,
            key_focus: self.key_focus,
            benefits,
        })
    }
}

/// Generates a job description and returns the generator's text unchanged.
///
/// Any generator failure collapses into `AppError::Generation`; the cause is
/// kept only for the server log.
pub async fn generate_job_description(
    generator: &dyn TextGenerator,
    request: GenerateRequest,
) -> Result<String, AppError> {
    let job = request.into_job_request()?;
    let prompt = build_job_description_prompt(&job);

    info!("Generating job description for '{}'", job.job_title);

    let description = generator
        .generate_text(&prompt)
        .await
        .map_err(|e| AppError::Generation(format!("text generation failed: {e}")))?;

    info!(
        "Generated job description for '{}' ({} chars)",
        job.job_title,
        description.len()
    );
    Ok(description)
}
