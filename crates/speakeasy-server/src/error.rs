//! API error handling

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// API error type, rendered as a plain-text body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.message,
        )
            .into_response()
    }
}

impl From<speakeasy_core::Error> for ApiError {
    fn from(err: speakeasy_core::Error) -> Self {
        // Every pipeline failure is terminal for the request.
        ApiError::internal(format!("Error: {}", err))
    }
}
