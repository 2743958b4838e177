//! HTTP mapping for `StudentError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::students::errors::{FieldViolation, StoreError, StudentError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldViolation>,
}

impl StudentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StudentError::Validation(_) => StatusCode::BAD_REQUEST,
            StudentError::NotFound { .. } => StatusCode::NOT_FOUND,
            StudentError::Store(StoreError::DuplicateNationalId(_)) => StatusCode::CONFLICT,
            StudentError::Store(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            StudentError::Validation(err) => ErrorResponse {
                error: err.to_string(),
                violations: err.violations,
            },
            StudentError::Store(StoreError::Database(err)) => {
                tracing::error!(error = %err, "Student store failure");
                ErrorResponse {
                    error: "internal storage error".to_string(),
                    violations: Vec::new(),
                }
            }
            other => ErrorResponse {
                error: other.to_string(),
                violations: Vec::new(),
            },
        };

        (status, Json(body)).into_response()
    }
}
