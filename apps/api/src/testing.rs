//! In-process stand-ins for the external collaborators, used by unit and router tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::llm_client::{LlmError, TextGenerator};
use crate::models::job::{JobListing, JobRecord};
use crate::postings::store::{JobStore, StoreError};
use crate::state::AppState;

/// Echoes the prompt back, so the output carries every section heading and input value.
#[derive(Default)]
pub struct EchoGenerator {
    calls: AtomicUsize,
}

impl EchoGenerator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(prompt.to_string())
    }
}

/// Always fails the way an exhausted quota does.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate_text(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        })
    }
}

#[derive(Default)]
pub struct MemoryJobStore {
    records: Mutex<Vec<JobRecord>>,
    fail_next_insert: AtomicBool,
}

impl MemoryJobStore {
    pub fn with_records(records: Vec<JobRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_next_insert: AtomicBool::new(false),
        }
    }

    pub fn fail_next_insert(&self) {
        self.fail_next_insert.store(true, Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<JobRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn insert(&self, record: &JobRecord) -> Result<(), StoreError> {
        if self.fail_next_insert.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<JobListing>, StoreError> {
        let mut listings: Vec<JobListing> =
            self.records.lock().unwrap().iter().map(JobListing::from).collect();
        listings.sort_by(|a, b| b.date_posted.cmp(&a.date_posted));
        Ok(listings)
    }
}

/// Every call fails as if the database were unreachable.
pub struct FailingJobStore;

#[async_trait]
impl JobStore for FailingJobStore {
    async fn insert(&self, _record: &JobRecord) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_newest_first(&self) -> Result<Vec<JobListing>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn test_state(generator: Arc<dyn TextGenerator>, store: Arc<dyn JobStore>) -> AppState {
    AppState { generator, store }
}
