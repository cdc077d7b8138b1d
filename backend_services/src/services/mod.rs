mod chat_service;
mod log_service;

pub use chat_service::ChatClient;
pub use log_service::LogClient;

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("upstream returned {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },
    #[error("unexpected upstream response: {0}")]
    InvalidResponse(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Unavailable(String),
}

impl ServiceError {
    /// Status the dashboard API answers with when this error ends a request.
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Upstream(_)
            | ServiceError::UpstreamStatus { .. }
            | ServiceError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
