//! Persistence Store: the `job_description` table behind a trait.
//!
//! Default: `PgJobStore` (sqlx over PostgreSQL).
//! `AppState` holds an `Arc<dyn JobStore>`, so tests swap in an in-memory store.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::models::job::{JobListing, JobRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Append-only job store: insert one row, read everything newest first.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn insert(&self, record: &JobRecord) -> Result<(), StoreError>;

    /// All rows ordered by `date_posted` descending. Same-day order is unspecified.
    async fn list_newest_first(&self) -> Result<Vec<JobListing>, StoreError>;
}

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    /// Opens the connection pool. Connections go back to the pool on drop.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn insert(&self, record: &JobRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO job_description
                (job_id, job_title, custom_note, key_focus, benefits,
                 description, date_posted, job_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&record.job_id)
        .bind(&record.job_title)
        .bind(&record.custom_note)
        .bind(&record.key_focus)
        .bind(&record.benefits)
        .bind(&record.description)
        .bind(record.date_posted)
        .bind(&record.job_code)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<JobListing>, StoreError> {
        Ok(sqlx::query_as::<_, JobListing>(
            r#"
            SELECT job_id, job_title, date_posted, description, job_code
            FROM job_description
            ORDER BY date_posted DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }
}
