use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// HTTP-boundary error type. One variant per endpoint family.
///
/// The wrapped string carries the diagnostic detail; it is logged server-side
/// and never sent to the caller, who only sees the generic message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Save failed: {0}")]
    Save(String),

    #[error("Retrieval failed: {0}")]
    Retrieval(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Generation(_) => "GENERATION_FAILED",
            AppError::Save(_) => "SAVE_FAILED",
            AppError::Retrieval(_) => "RETRIEVAL_FAILED",
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Generation(_) => "Failed to generate job description. See server logs.",
            AppError::Save(_) => "Failed to save job description. See server logs.",
            AppError::Retrieval(_) => "Failed to retrieve job descriptions. See server logs.",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.code(), "{self}");

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.public_message()
            }
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
