use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::highlights::{HighlightError, HighlightService};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub highlight_service: HighlightService,
}

impl AppState {
    pub fn new(highlight_service: HighlightService) -> Self {
        Self { highlight_service }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<HighlightError> for AppError {
    fn from(err: HighlightError) -> Self {
        match err {
            HighlightError::MalformedEvent { .. } => AppError::BadRequest(err.to_string()),
            _ => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_events_map_to_bad_request() {
        let err = HighlightError::MalformedEvent {
            index: 3,
            field: "quarter",
            reason: "is required".to_string(),
        };

        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn other_errors_map_to_internal() {
        let err = HighlightError::Worker("task panicked".to_string());

        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
