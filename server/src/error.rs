//! Error-to-response mapping for the API.
//!
//! # Design
//! Validation failures on create map to 400 and unknown ids map
//! to 404, each with a `{"error": <message>}` JSON body. Every error
//! is handled here and surfaced as a response; none is fatal to the
//! process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use todo_core::StoreError;

/// Errors surfaced to clients as JSON error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// The request body was not valid JSON.
    InvalidJson,

    /// The create body had no string `text` key.
    MissingText,

    /// The todo text was empty after trimming.
    EmptyText,

    /// No todo with the requested id exists.
    NotFound,
}

impl ApiError {
    fn status(self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::MissingText | ApiError::EmptyText => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn message(self) -> &'static str {
        match self {
            ApiError::InvalidJson => "Request body must be valid JSON",
            ApiError::MissingText => "Missing text field",
            ApiError::EmptyText => "Text cannot be empty",
            ApiError::NotFound => "Todo not found",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyText => ApiError::EmptyText,
            StoreError::NotFound => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}
