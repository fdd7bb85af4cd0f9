//! API error types and HTTP response mapping.
//!
//! This is the failure half of the response envelope and the single place
//! where a failed handler becomes an HTTP response: handlers return
//! [`ApiResult`], and the [`IntoResponse`] impl below writes the failure
//! body. No error escapes the HTTP boundary uncaught.
//!
//! Validation and not-found failures deliberately respond with HTTP 200 and
//! `status: false` — an unusual but load-bearing compatibility contract.
//! GraphQL resolvers never pass through here; their failures surface in the
//! query engine's `errors` array instead.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// API result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// The failure envelope body: `{status: false, message}`.
///
/// Unlike the success shape, there is no `data` key at all.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    /// Always `false` for this shape.
    pub status: bool,
    /// Human-readable failure message.
    pub message: String,
}

/// HTTP API error carrying the failure message and the status code the
/// caller chose for it.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Returns the failure for a request missing a required query parameter.
    #[must_use]
    pub fn missing_query_parameters() -> Self {
        Self::failure("Missing query parameters")
    }

    /// Returns the failure for an identity lookup with no matching member.
    #[must_use]
    pub fn member_not_found() -> Self {
        Self::failure("Member not found")
    }

    /// Returns a failure envelope with HTTP 200, the service's standard
    /// policy for validation and not-found outcomes.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.into(),
        }
    }

    /// Overrides the HTTP status code.
    ///
    /// The envelope shape is unchanged; only the transport status differs.
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiErrorBody {
                status: false,
                message: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_respond_with_http_200() {
        let error = ApiError::missing_query_parameters();
        assert_eq!(error.status(), StatusCode::OK);
        assert_eq!(error.message(), "Missing query parameters");

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn not_found_failure_uses_the_pinned_message() {
        let error = ApiError::member_not_found();
        assert_eq!(error.status(), StatusCode::OK);
        assert_eq!(error.message(), "Member not found");
    }

    #[test]
    fn with_status_overrides_the_transport_code_only() {
        let error = ApiError::failure("roster unavailable")
            .with_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "roster unavailable");
    }

    #[test]
    fn failure_body_has_no_data_key() {
        let body = ApiErrorBody {
            status: false,
            message: "Member not found".to_string(),
        };
        let json = serde_json::to_value(&body).expect("serialize body");
        let object = json.as_object().expect("object");
        assert_eq!(object.get("status"), Some(&serde_json::Value::Bool(false)));
        assert!(!object.contains_key("data"));
    }
}
