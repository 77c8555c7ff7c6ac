//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use opsboard_core::error::{AppError, ErrorKind};

use crate::dto::response::ApiResponse;

/// HTTP-boundary wrapper around the domain error.
///
/// Handlers return this type; `?` converts any `AppError` into it.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        let status = match &err.kind {
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => {
                tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Internal failure details stay out of the response body.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            err.message
        };

        let body = ApiResponse::<serde_json::Value> {
            success: false,
            status: status.as_u16(),
            message,
            data: None,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_for(err: AppError) -> Response {
        ApiError::from(err).into_response()
    }

    #[test]
    fn test_status_mapping() {
        let resp = response_for(AppError::not_found("Project not found"));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = response_for(AppError::validation("Name must be at least 3 characters"));
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = response_for(AppError::unauthorized("Invalid token"));
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = response_for(AppError::conflict("User already exists"));
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = response_for(AppError::internal("boom"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
