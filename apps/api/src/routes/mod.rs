pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::postings::handlers as postings;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/benefits", get(generation::handle_list_benefits))
        .route(
            "/generate-job-description",
            post(generation::handle_generate),
        )
        .route("/post-job-description", post(postings::handle_post_job))
        .route("/job-descriptions", get(postings::handle_list_jobs))
        .with_state(state)
}
