use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use di_core::ports::{DeviceRepositoryError, DeviceValidationError};

use super::envelope::ErrorEnvelope;

/// Request failures that map to a non-200 status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed identifier or body; 400.
    #[error("{0}")]
    Validation(String),

    /// Storage fault; 500.
    #[error("{0}")]
    Persistence(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorEnvelope {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<DeviceRepositoryError> for ApiError {
    fn from(err: DeviceRepositoryError) -> Self {
        ApiError::Persistence(err.to_string())
    }
}

impl From<DeviceValidationError> for ApiError {
    fn from(err: DeviceValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}
