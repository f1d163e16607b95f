//! HTTP error mapping for core errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hacks_core::errors::{DatabaseError, Error};
use serde_json::json;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

pub struct ApiError(Error);

impl ApiError {
    pub fn not_found(what: impl Into<String>) -> Self {
        ApiError(Error::Database(DatabaseError::NotFound(what.into())))
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
