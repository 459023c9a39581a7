use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bloglist_core::Error as CoreError;

use crate::metrics;

/// Application errors
#[derive(Debug)]
pub enum AppError {
    Store(CoreError),
    NotFound(String),
    BadRequest(String),
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::Store(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            AppError::Store(err) => {
                let status = match err {
                    CoreError::NotFound(_) => StatusCode::NOT_FOUND,
                    CoreError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                    CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.code(), err.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT", msg),
        };

        metrics::ERRORS_TOTAL.with_label_values(&[error_type]).inc();

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
