//! Response envelope: every body is either `{"result": ...}` or `{"error": ...}`.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResultEnvelope<T> {
    pub result: T,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

/// 200 with `{"result": payload}`.
pub fn ok<T: Serialize>(result: T) -> Response {
    Json(ResultEnvelope { result }).into_response()
}

/// 200 with `{"error": message}`.
///
/// For outcomes that completed normally but found nothing to act on
/// ("not found", "not updated").
pub fn soft_error(message: &str) -> Response {
    Json(ErrorEnvelope {
        error: message.to_string(),
    })
    .into_response()
}
