//! Standardized 422 error responses.
//!
//! Every client-facing failure is reported the same way: HTTP 422 with a JSON
//! body carrying an `error` key. [`error_response`] normalizes the various
//! error shapes our handlers produce into that contract.

use serde::Serialize;
use serde_json::{Value, json};

use crate::error::HelperError;

/// Status code used for all formatted error responses.
pub const UNPROCESSABLE_ENTITY: u16 = 422;

/// A status code plus JSON body, ready to hand to whatever HTTP layer is in
/// use. With the `axum` feature this implements `IntoResponse` directly.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub body: Value,
}

/// Build a 422 response from a plain message.
pub fn error_text(message: impl Into<String>) -> ErrorResponse {
    ErrorResponse {
        status: UNPROCESSABLE_ENTITY,
        body: json!({ "error": message.into() }),
    }
}

/// Normalize an arbitrary error value into a 422 JSON response.
///
/// Shapes handled, in order:
/// - a JSON string becomes `{"error": <string>}`;
/// - an object with an `errors` array whose first element carries a string
///   `message` (the shape our ORM layer reports) surfaces that message;
/// - an object that already has an `error` key passes through unchanged;
/// - anything else is logged and reported as a generic `"Server error."`.
pub fn error_response(err: &Value) -> ErrorResponse {
    if let Value::String(message) = err {
        return error_text(message.clone());
    }

    if let Some(message) = err
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|first| first.get("message"))
        .and_then(Value::as_str)
    {
        return error_text(message);
    }

    if err.get("error").is_some() {
        return ErrorResponse {
            status: UNPROCESSABLE_ENTITY,
            body: err.clone(),
        };
    }

    tracing::error!(target: "apphelper::respond", error = %err, "unrecognized error shape");
    error_text("Server error.")
}

impl From<HelperError> for ErrorResponse {
    fn from(err: HelperError) -> Self {
        error_text(err.to_string())
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status)
            .unwrap_or(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
        (status, axum::Json(self.body)).into_response()
    }
}
