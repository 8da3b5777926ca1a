//! Maps domain `AppError` to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use keygate_core::error::{AppError, ErrorKind};

/// Response wrapper for [`AppError`] so handlers can use `?` directly.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::Validation | ErrorKind::Payment => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Expired => StatusCode::GONE,
            ErrorKind::Upstream => StatusCode::BAD_GATEWAY,
            ErrorKind::Storage
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Clients get a generic body for server-side failures; the full
        // error stays in the log.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %err, "Internal server error");
            return (status, "internal error").into_response();
        }

        (status, err.message).into_response()
    }
}
