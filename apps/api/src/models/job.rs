use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One posted job description, as stored in `job_description`.
/// Never updated or deleted after insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobRecord {
    pub job_id: String,
    pub job_title: String,
    pub custom_note: String,
    pub key_focus: String,
    pub benefits: String,
    pub description: String,
    pub date_posted: NaiveDate,
    pub job_code: Option<String>,
}

/// Listing projection of a `JobRecord`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobListing {
    pub job_id: String,
    pub job_title: String,
    pub date_posted: NaiveDate,
    pub description: String,
    pub job_code: Option<String>,
}

impl From<&JobRecord> for JobListing {
    fn from(record: &JobRecord) -> Self {
        Self {
            job_id: record.job_id.clone(),
            job_title: record.job_title.clone(),
            date_posted: record.date_posted,
            description: record.description.clone(),
            job_code: record.job_code.clone(),
        }
    }
}
