use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use burrow_shortener::ShortenerError;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// The request body could not be read as JSON.
    InvalidRequest(String),
    Shortener(ShortenerError),
    Internal(String),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            AppError::Shortener(e) => match e {
                ShortenerError::InvalidUrl(_) => (StatusCode::BAD_REQUEST, "invalid_url"),
                ShortenerError::InvalidShortcode(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_shortcode")
                }
                ShortenerError::InvalidValidity(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_validity")
                }
                ShortenerError::AlreadyExists(_) => (StatusCode::CONFLICT, "already_exists"),
                ShortenerError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
                ShortenerError::Expired(_) => (StatusCode::GONE, "expired"),
                ShortenerError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
            },
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        AppError::Shortener(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind) = self.parts();
        let message = match self {
            AppError::InvalidRequest(message) => message,
            AppError::Shortener(e) => e.to_string(),
            AppError::Internal(message) => {
                error!(error = %message, "internal error");
                "internal server error".to_string()
            }
        };

        let body = ErrorResponse {
            error: kind.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
