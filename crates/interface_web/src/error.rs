//! Web error handling
//!
//! Every handler failure funnels into [`WebError`]; JSON routes answer
//! with a status code and an [`ErrorResponse`] body, while form routes
//! catch the error themselves and turn it into a flash redirect.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use core_kernel::TemporalError;
use domain_billing::BillingError;
use domain_lodging::LodgingError;
use infra_db::DatabaseError;
use infra_docs::DocumentError;

/// Web-layer error types
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Standard error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            WebError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            WebError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            WebError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            WebError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            WebError::Document(_) => (StatusCode::INTERNAL_SERVER_ERROR, "document_error"),
            WebError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<DatabaseError> for WebError {
    fn from(err: DatabaseError) -> Self {
        if err.is_not_found() {
            WebError::NotFound(err.to_string())
        } else if err.is_constraint_violation() {
            WebError::Conflict(err.to_string())
        } else {
            WebError::Database(err.to_string())
        }
    }
}

impl From<LodgingError> for WebError {
    fn from(err: LodgingError) -> Self {
        WebError::Validation(err.to_string())
    }
}

impl From<BillingError> for WebError {
    fn from(err: BillingError) -> Self {
        WebError::Validation(err.to_string())
    }
}

impl From<TemporalError> for WebError {
    fn from(err: TemporalError) -> Self {
        WebError::Validation(err.to_string())
    }
}

impl From<DocumentError> for WebError {
    fn from(err: DocumentError) -> Self {
        if err.is_invalid_path() {
            WebError::NotFound(err.to_string())
        } else {
            WebError::Document(err.to_string())
        }
    }
}

/// Logs a failed mutation at the right level: rejected input is routine,
/// infrastructure trouble is not.
pub(crate) fn log_failure(action: &str, err: &WebError) {
    match err {
        WebError::Validation(_) | WebError::NotFound(_) | WebError::Conflict(_) => {
            warn!(error = %err, "{action} rejected");
        }
        _ => {
            error!(error = %err, "{action} failed");
        }
    }
}
