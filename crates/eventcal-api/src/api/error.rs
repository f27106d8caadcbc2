// API error mapping
//
// ValidationFailed: request could not be decoded into the typed input (400)
// Storage(Unavailable): pool exhausted or store unreachable (503)
// Storage(Rejected): store refused the statement (500, diagnostic in body)

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use eventcal_storage::StorageError;
use thiserror::Error;

use super::common::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(StorageError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Storage(StorageError::Rejected(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ValidationFailed(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::ValidationFailed(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::ValidationFailed(reason) = &self {
            tracing::debug!(%reason, "Rejected request");
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::ValidationFailed("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StorageError::unavailable("pool timed out")).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(StorageError::rejected("not-null")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_message_passes_through() {
        let err = ApiError::from(StorageError::rejected("null value in column \"title\""));
        assert_eq!(
            err.to_string(),
            "storage rejected statement: null value in column \"title\""
        );
    }
}
