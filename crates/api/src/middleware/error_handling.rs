//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the freeslot
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with the workspace's `SlotError` taxonomy.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use freeslot_core::errors::SlotError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `SlotError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub SlotError);

/// Converts application errors to HTTP responses.
///
/// Bad parameters, unknown experts and source-reported calendar errors map
/// to 400; window-semantics violations map to 422; anything else from the
/// external dependency maps to 500 with the raw error message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            SlotError::InvalidInput(_)
            | SlotError::UnknownExpert(_)
            | SlotError::CalendarSource(_) => StatusCode::BAD_REQUEST,
            SlotError::PastStart | SlotError::EndBeforeStart | SlotError::CrossDayWindow => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            SlotError::External(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from SlotError to AppError.
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, SlotError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError.
///
/// Wraps the report in the `SlotError::External` variant, which renders as
/// an internal server error.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SlotError::External(err))
    }
}

/// Maps a SlotError to an HTTP response.
///
/// Provided for tests and code that needs the response without going
/// through a handler return value.
pub fn map_error(err: SlotError) -> Response {
    AppError(err).into_response()
}
